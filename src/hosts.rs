// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Resource Operations
//!
//! CRUD operations against the Foreman host collection plus the BMC
//! management dispatcher. Create and update run through the bounded retry
//! executor; read and delete execute exactly once.
//!
//! # Operation Pattern
//!
//! ```text
//! Host → Encode → Request → Retrying Executor → Decode → Host
//!                                   ↓
//!                           (BMC: result check)
//! ```

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

use crate::client::ForemanClient;
use crate::domain::{BmcCommand, BootCommand, Host, PowerCommand};
use crate::errors::{ForemanError, ForemanResult};

/// Path of the host collection under the API base
const HOSTS_PATH: &str = "/hosts";

/// Path of one host record
fn host_path(id: u32) -> String {
    format!("{}/{}", HOSTS_PATH, id)
}

/// Path of a host's BMC control sub-resource
///
/// Host names are DNS names in practice, but the server accepts anything
/// it once stored, so the segment is percent-encoded rather than trusted.
fn bmc_path(name: &str, suffix: &str) -> String {
    format!("{}/{}/{}", HOSTS_PATH, urlencoding::encode(name), suffix)
}

/// Host API operations
///
/// Defines the client interface for host lifecycle and out-of-band
/// management. Implemented by [`ForemanClient`]; the trait seam keeps
/// consumers testable against a double.
#[async_trait]
pub trait HostApi: Send + Sync {
    /// Create a new host record
    ///
    /// # Parameters
    /// - `host`: Local host state to submit; the id field is ignored
    /// - `retry_budget`: Total attempts for the executor (0 and 1 both
    ///   mean exactly one attempt)
    ///
    /// # Returns
    /// - The created host as the server reports it, id assigned
    async fn create_host(&self, host: &Host, retry_budget: u32) -> ForemanResult<Host>;

    /// Fetch a host record by id
    ///
    /// Executes exactly once; reads are cheap to re-issue at the call site.
    async fn get_host(&self, id: u32) -> ForemanResult<Host>;

    /// Update an existing host record
    ///
    /// The host's own id selects the record. Interface attachments are a
    /// delta against remote state, not a replacement.
    async fn update_host(&self, host: &Host, retry_budget: u32) -> ForemanResult<Host>;

    /// Delete a host record by id
    async fn delete_host(&self, id: u32) -> ForemanResult<()>;

    /// Send a BMC command to a host's control sub-resource
    ///
    /// The host contributes only its name, which selects the sub-resource
    /// path. The decoded response is checked for a command-level failure
    /// report: a 200 whose body says the BMC refused is still an error.
    async fn send_bmc_command(
        &self,
        host: &Host,
        command: BmcCommand,
        retry_budget: u32,
    ) -> ForemanResult<BmcCommand>;
}

#[async_trait]
impl HostApi for ForemanClient {
    async fn create_host(&self, host: &Host, retry_budget: u32) -> ForemanResult<Host> {
        info!(name = %host.name, "Creating Foreman host");

        let payload = serde_json::to_value(host)?;
        let request = self.build_request(Method::POST, HOSTS_PATH, Some(payload))?;
        let created: Host = self.send_and_parse_with_retry(request, retry_budget).await?;

        debug!(id = created.id, name = %created.name, "Host created");
        Ok(created)
    }

    async fn get_host(&self, id: u32) -> ForemanResult<Host> {
        debug!(id, "Fetching Foreman host");

        let request = self.build_request(Method::GET, &host_path(id), None)?;
        self.send_and_parse(request).await
    }

    async fn update_host(&self, host: &Host, retry_budget: u32) -> ForemanResult<Host> {
        info!(id = host.id, name = %host.name, "Updating Foreman host");

        let payload = serde_json::to_value(host)?;
        let request = self.build_request(Method::PUT, &host_path(host.id), Some(payload))?;
        self.send_and_parse_with_retry(request, retry_budget).await
    }

    async fn delete_host(&self, id: u32) -> ForemanResult<()> {
        info!(id, "Deleting Foreman host");

        let request = self.build_request(Method::DELETE, &host_path(id), None)?;
        self.send_and_discard(request).await
    }

    async fn send_bmc_command(
        &self,
        host: &Host,
        command: BmcCommand,
        retry_budget: u32,
    ) -> ForemanResult<BmcCommand> {
        let suffix = command.endpoint_suffix();
        let path = bmc_path(&host.name, suffix);
        info!(name = %host.name, endpoint = suffix, "Sending BMC command");

        let payload = serde_json::to_value(&command)?;
        let request = self.build_request(Method::PUT, &path, Some(payload))?;

        // The response decodes into the same shape it was sent as; the sum
        // itself cannot be decoded untagged since both shapes are all-optional.
        let result = match command {
            BmcCommand::Power(_) => {
                let decoded: PowerCommand =
                    self.send_and_parse_with_retry(request, retry_budget).await?;
                BmcCommand::Power(decoded)
            }
            BmcCommand::Boot(_) => {
                let decoded: BootCommand =
                    self.send_and_parse_with_retry(request, retry_budget).await?;
                BmcCommand::Boot(decoded)
            }
        };

        if result.reports_failure() {
            return Err(ForemanError::OperationFailed(format!(
                "BMC {} command on host {} reported failure",
                suffix, host.name
            )));
        }

        Ok(result)
    }
}
