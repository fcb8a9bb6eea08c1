//! Foreman API client for host lifecycle and out-of-band BMC management
//!
//! This crate talks to the Foreman REST API: creating, reading, updating
//! and deleting host records, and driving power/boot operations through a
//! host's baseboard management controller.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use foreman_client::{BmcCommand, ForemanClient, ForemanConfig, Host, HostApi, PowerAction};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ForemanClient::new(ForemanConfig {
//!     base_url: "https://foreman.example.com/api".to_string(),
//!     username: "admin".to_string(),
//!     password: "changeme".to_string(),
//!     timeout_secs: 30,
//! })?;
//!
//! let mut host = Host::new("node1.example.com");
//! host.build = true;
//! let created = client.create_host(&host, 3).await?;
//!
//! client
//!     .send_bmc_command(&created, BmcCommand::power(PowerAction::Cycle), 3)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domain;
pub mod errors;
pub mod hosts;

// Re-export commonly used types
pub use client::{ForemanClient, ForemanConfig};
pub use domain::{
    BmcCommand, BootCommand, BootDevice, BootStatus, Host, InterfaceAttachment, PowerAction,
    PowerCommand, ResourceRef,
};
pub use errors::{ForemanError, ForemanResult};
pub use hosts::HostApi;
