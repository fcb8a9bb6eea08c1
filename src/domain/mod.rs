// Copyright (c) 2025 - Cowboy AI, Inc.
//! Foreman Domain Models
//!
//! Core domain concepts for host lifecycle and out-of-band management:
//! the host entity as Foreman tracks it, its network interface attachments,
//! and the command payloads accepted by the BMC control endpoints.
//!
//! # Value Objects
//!
//! - [`ResourceRef`] - three-state reference to an associated record
//!   (unset, explicitly cleared, set to an id)
//! - [`PowerAction`] / [`BootDevice`] - closed wire vocabularies for the
//!   management endpoints
//!
//! # Entities
//!
//! - [`Host`] - a managed compute node with foreign-key associations and
//!   interface attachments
//! - [`InterfaceAttachment`] - a network interface bound to a host, with
//!   delta-update removal semantics
//!
//! # Commands
//!
//! - [`BmcCommand`] - tagged union over the power and boot payload shapes

pub mod bmc;
pub mod host;
pub mod reference;

// Re-export domain types
pub use bmc::{BmcCommand, BootCommand, BootDevice, BootStatus, PowerAction, PowerCommand};
pub use host::{Host, InterfaceAttachment};
pub use reference::ResourceRef;
