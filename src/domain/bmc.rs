// Copyright (c) 2025 - Cowboy AI, Inc.

//! Out-of-band management commands
//!
//! Foreman proxies BMC operations through per-host control sub-resources
//! (`.../power` and `.../boot`). The two payload shapes are modeled as a
//! closed sum so dispatch over the command kind is exhaustive at compile
//! time instead of inspected at runtime.

use serde::{Deserialize, Serialize};

/// Power operations accepted by the power control endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    /// Power the host on
    On,
    /// Hard power-off
    Off,
    /// Graceful shutdown via ACPI
    Soft,
    /// Power cycle
    Cycle,
    /// Query the current power state without changing it
    State,
}

impl PowerAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerAction::On => "on",
            PowerAction::Off => "off",
            PowerAction::Soft => "soft",
            PowerAction::Cycle => "cycle",
            PowerAction::State => "state",
        }
    }
}

/// Boot devices accepted by the boot control endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootDevice {
    /// Boot from local disk
    Disk,
    /// Boot from optical media
    Cdrom,
    /// Network boot
    Pxe,
    /// Drop into firmware setup
    Bios,
}

impl BootDevice {
    /// Wire name of the device
    pub fn as_str(&self) -> &'static str {
        match self {
            BootDevice::Disk => "disk",
            BootDevice::Cdrom => "cdrom",
            BootDevice::Pxe => "pxe",
            BootDevice::Bios => "bios",
        }
    }
}

/// Power command payload
///
/// The same shape serves both directions: `power_action` carries the intent
/// on send, and the server reports the observed power state back through
/// `power`. Absent fields are omitted from the payload rather than sent as
/// null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PowerCommand {
    /// Requested action (outbound) or echoed action (inbound)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_action: Option<PowerAction>,

    /// Observed power result reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<bool>,
}

/// Nested result structure of a boot command response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BootStatus {
    /// Action echo reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Whether the boot-device change took effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
}

/// Boot command payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BootCommand {
    /// Requested boot device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<BootDevice>,

    /// Server-reported outcome
    #[serde(default)]
    pub boot: BootStatus,
}

/// A command addressed to a host's BMC
///
/// Exactly one of the two payload shapes is in play per call. The variant
/// selects the control sub-resource, and the response decodes back into the
/// same shape it was sent as. Responses are decoded per variant rather than
/// through this enum; an untagged decode could not tell the two shapes
/// apart since every field in both is optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BmcCommand {
    /// Power management (`.../power`)
    Power(PowerCommand),
    /// Boot-device selection (`.../boot`)
    Boot(BootCommand),
}

impl BmcCommand {
    /// Build a power command carrying the given action
    pub fn power(action: PowerAction) -> Self {
        BmcCommand::Power(PowerCommand {
            power_action: Some(action),
            power: None,
        })
    }

    /// Build a boot command selecting the given device
    pub fn boot(device: BootDevice) -> Self {
        BmcCommand::Boot(BootCommand {
            device: Some(device),
            boot: BootStatus::default(),
        })
    }

    /// Path suffix of the control sub-resource this command targets
    pub fn endpoint_suffix(&self) -> &'static str {
        match self {
            BmcCommand::Power(_) => "power",
            BmcCommand::Boot(_) => "boot",
        }
    }

    /// Whether a decoded response reports the operation as failed
    ///
    /// The transport layer only vouches for the HTTP exchange; the BMC
    /// outcome rides inside the body. A power response with `power: false`
    /// or a boot response with `result: false` is a failed operation even
    /// on a 200. Absent result fields are not treated as failure.
    pub fn reports_failure(&self) -> bool {
        match self {
            BmcCommand::Power(power) => power.power == Some(false),
            BmcCommand::Boot(boot) => boot.boot.result == Some(false),
        }
    }
}
