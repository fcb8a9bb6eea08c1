// Copyright (c) 2025 - Cowboy AI, Inc.

//! Foreman API client
//!
//! HTTP transport for the Foreman REST API: request construction against a
//! configured API base, basic-auth session handling, and a bounded-retry
//! send/decode loop shared by every resource operation.
//!
//! # Example
//!
//! ```rust,no_run
//! use foreman_client::{ForemanClient, ForemanConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ForemanConfig {
//!     base_url: "https://foreman.example.com/api".to_string(),
//!     username: "admin".to_string(),
//!     password: "changeme".to_string(),
//!     timeout_secs: 30,
//! };
//!
//! let client = ForemanClient::new(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::{ForemanError, ForemanResult};

/// Configuration for a Foreman API connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForemanConfig {
    /// Foreman API base URL (e.g. "https://foreman.example.com/api")
    pub base_url: String,

    /// Username for HTTP basic authentication
    pub username: String,

    /// Password for HTTP basic authentication
    pub password: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ForemanConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost/api".to_string(),
            username: "admin".to_string(),
            password: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Foreman API client wrapping an HTTP connection
#[derive(Debug, Clone)]
pub struct ForemanClient {
    config: ForemanConfig,
    client: Client,
}

impl ForemanClient {
    /// Create a new Foreman client with the given configuration
    pub fn new(config: ForemanConfig) -> ForemanResult<Self> {
        info!("Creating Foreman client for {}", config.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            "application/json"
                .parse()
                .map_err(|e| ForemanError::Configuration(format!("Invalid header: {}", e)))?,
        );
        headers.insert(
            ACCEPT,
            "application/json"
                .parse()
                .map_err(|e| ForemanError::Configuration(format!("Invalid header: {}", e)))?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ForemanError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// The configured API base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build a request against the API base
    ///
    /// `path` is appended to the configured base URL and must start with a
    /// slash. Basic-auth credentials from the configuration are attached to
    /// every request.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ForemanResult<RequestBuilder> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let url = Url::parse(&url)
            .map_err(|e| ForemanError::RequestConstruction(format!("Invalid URL {}: {}", url, e)))?;

        let mut request = self
            .client
            .request(method, url)
            .basic_auth(&self.config.username, Some(&self.config.password));

        if let Some(body) = body {
            request = request.json(&body);
        }

        Ok(request)
    }

    /// Send a prepared request and decode the JSON response
    ///
    /// Non-success statuses are reported as [`ForemanError::Api`] with the
    /// response body attached for diagnostics.
    pub async fn send_and_parse<T>(&self, request: RequestBuilder) -> ForemanResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| ForemanError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(ForemanError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ForemanError::Decode(e.to_string()))
    }

    /// Send a prepared request and discard the response body
    pub async fn send_and_discard(&self, request: RequestBuilder) -> ForemanResult<()> {
        let response = request
            .send()
            .await
            .map_err(|e| ForemanError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(ForemanError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    /// Send a prepared request with a bounded retry budget
    ///
    /// A budget of 0 attempts exactly once; otherwise up to `retry_budget`
    /// attempts are made. Attempts are strictly sequential with no backoff,
    /// and every failure kind (transport, API status, decode) is retried
    /// alike. The first success returns immediately; on exhaustion the last
    /// observed error is returned.
    ///
    /// The prepared request body is re-sent unchanged on every attempt, so
    /// retries are only safe for operations that are naturally idempotent.
    pub async fn send_and_parse_with_retry<T>(
        &self,
        request: RequestBuilder,
        retry_budget: u32,
    ) -> ForemanResult<T>
    where
        T: DeserializeOwned,
    {
        let attempts = retry_budget.max(1);
        let mut attempt = 0;

        loop {
            let prepared = request.try_clone().ok_or_else(|| {
                ForemanError::RequestConstruction(
                    "request body cannot be cloned for retry".to_string(),
                )
            })?;

            match self.send_and_parse(prepared).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt >= attempts {
                        return Err(err);
                    }
                    debug!(attempt, error = %err, "Retrying Foreman request");
                }
            }
        }
    }
}
