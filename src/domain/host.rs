// Copyright (c) 2025 - Cowboy AI, Inc.

//! Host Entity and Wire Serialization
//!
//! A [`Host`] is a compute node managed by Foreman. The entity travels to
//! the API inside a `{"host": {...}}` wrapper with a write-side field set,
//! and comes back as a bare object with a different field set, so encoding
//! and decoding are two independently specified transformations rather
//! than inverses of each other.

use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::reference::ResourceRef;

/// A host managed by Foreman
///
/// Constructed locally, sent to the API on create/update, and rebuilt from
/// API responses on read. Foreign-key attributes are [`ResourceRef`]s so
/// that "leave unchanged", "clear", and "set" stay distinguishable on the
/// wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    /// Record id assigned by Foreman; 0 before creation
    pub id: u32,
    /// Host name
    pub name: String,
    /// Creation timestamp reported by Foreman
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp reported by Foreman
    pub updated_at: Option<DateTime<Utc>>,

    /// Whether to reprovision the host on next boot
    pub build: bool,
    /// Domain association
    pub domain_id: ResourceRef,
    /// Puppet environment association
    pub environment_id: ResourceRef,
    /// Hostgroup association
    pub hostgroup_id: ResourceRef,
    /// Operating system association
    pub operating_system_id: ResourceRef,
    /// Provision method: "build" (normal provisioning) or "image"
    pub provision_method: String,
    /// PXE loader profile. One of: PXELinux BIOS, PXELinux UEFI, Grub UEFI,
    /// Grub2 UEFI, Grub2 UEFI SecureBoot, Grub2 UEFI HTTP, Grub2 UEFI HTTPS,
    /// Grub2 UEFI HTTPS SecureBoot, iPXE Embedded, iPXE UEFI HTTP,
    /// iPXE Chain BIOS, iPXE Chain UEFI
    pub pxe_loader: String,
    /// Additional free-text information about the host
    pub comment: String,
    /// Whether Foreman manages this host
    pub managed: bool,

    /// Whether BMC functionality is enabled for this host.
    /// Local bookkeeping only; never part of any wire payload.
    pub enable_bmc: bool,
    /// Whether the last BMC call against this host succeeded.
    /// Local bookkeeping only; never part of any wire payload.
    pub bmc_success: bool,

    /// Network interfaces attached to the host
    pub interfaces: Vec<InterfaceAttachment>,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            created_at: None,
            updated_at: None,
            build: false,
            domain_id: ResourceRef::Unset,
            environment_id: ResourceRef::Unset,
            hostgroup_id: ResourceRef::Unset,
            operating_system_id: ResourceRef::Unset,
            provision_method: String::new(),
            pxe_loader: String::new(),
            comment: String::new(),
            // Foreman treats hosts as managed unless told otherwise
            managed: true,
            enable_bmc: false,
            bmc_success: false,
            interfaces: Vec::new(),
        }
    }
}

impl Host {
    /// Create a host with the given name and default attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A network interface bound to a host
///
/// The interface list sent to Foreman is a delta, never a replacement:
/// entries without an `id` are created, entries flagged with the removal
/// marker are deleted, and interfaces missing from the list are left
/// untouched on the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterfaceAttachment {
    /// Record id assigned by Foreman; omitted for new interfaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Subnet association
    #[serde(default)]
    pub subnet_id: u32,
    /// Device identifier (e.g. "eth0")
    #[serde(default)]
    pub identifier: String,
    /// DNS name for the interface
    #[serde(default)]
    pub name: String,
    /// Username for out-of-band interface types (BMC)
    #[serde(default)]
    pub username: String,
    /// Password for out-of-band interface types (BMC)
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub provision: bool,
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub primary: bool,
    /// IP address
    #[serde(default)]
    pub ip: String,
    /// MAC address
    #[serde(default)]
    pub mac: String,
    /// Interface type (e.g. "interface", "bmc", "bond")
    #[serde(rename = "type", default)]
    pub interface_type: String,
    /// Provider (e.g. "IPMI" for BMC interfaces)
    #[serde(default)]
    pub provider: String,
    /// Removal marker. The key must be entirely absent for entries that are
    /// not being removed; its presence, not its value, is what the API
    /// reacts to.
    #[serde(rename = "_destroy", default, skip_serializing_if = "is_false")]
    pub destroy: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Write-side wire form: the wrapped, field-selected payload for
/// create/update requests.
impl Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), Value::from(self.name.clone()));
        attributes.insert("comment".to_string(), Value::from(self.comment.clone()));
        attributes.insert("managed".to_string(), Value::from(self.managed));
        attributes.insert("build".to_string(), Value::from(self.build));
        attributes.insert(
            "provision_method".to_string(),
            Value::from(self.provision_method.clone()),
        );
        attributes.insert(
            "pxe_loader".to_string(),
            Value::from(self.pxe_loader.clone()),
        );

        let references = [
            ("domain_id", &self.domain_id),
            ("operatingsystem_id", &self.operating_system_id),
            ("hostgroup_id", &self.hostgroup_id),
            ("environment_id", &self.environment_id),
        ];
        for (key, reference) in references {
            if let Some(wire) = reference.to_wire() {
                attributes.insert(key.to_string(), wire);
            }
        }

        // An empty list must be omitted entirely; sending it would read as
        // "remove all interfaces" on the server side.
        if !self.interfaces.is_empty() {
            let interfaces =
                serde_json::to_value(&self.interfaces).map_err(S::Error::custom)?;
            attributes.insert("interfaces_attributes".to_string(), interfaces);
        }

        let mut wrapper = Map::new();
        wrapper.insert("host".to_string(), Value::Object(attributes));
        Value::Object(wrapper).serialize(serializer)
    }
}

/// Base fields shared by all Foreman resource payloads
#[derive(Debug, Deserialize)]
struct BaseAttributes {
    #[serde(default)]
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// The read side names the interface list differently than the write side
#[derive(Debug, Deserialize)]
struct InterfaceAttributes {
    #[serde(default)]
    interfaces: Vec<InterfaceAttachment>,
}

/// Read-side wire form: three passes over the same payload
///
/// 1. Base resource fields.
/// 2. The interface list under its read-side key.
/// 3. Scalar attributes through a generic value view, because Foreman
///    reports numerics in floating-point form. Absent or mistyped keys take
///    documented defaults; without this, attributes silently regress to
///    zero values on every read.
impl<'de> Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let payload = Value::deserialize(deserializer)?;

        let base: BaseAttributes =
            serde_json::from_value(payload.clone()).map_err(D::Error::custom)?;

        let interfaces: InterfaceAttributes =
            serde_json::from_value(payload.clone()).map_err(D::Error::custom)?;

        let build = payload.get("build").and_then(Value::as_bool).unwrap_or(false);
        let comment = payload
            .get("comment")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let managed = payload.get("managed").and_then(Value::as_bool).unwrap_or(true);
        let provision_method = payload
            .get("provision_method")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let pxe_loader = payload
            .get("pxe_loader")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        Ok(Host {
            id: base.id,
            name: base.name,
            created_at: base.created_at,
            updated_at: base.updated_at,
            build,
            domain_id: ResourceRef::from_wire(payload.get("domain_id")),
            environment_id: ResourceRef::from_wire(payload.get("environment_id")),
            hostgroup_id: ResourceRef::from_wire(payload.get("hostgroup_id")),
            operating_system_id: ResourceRef::from_wire(payload.get("operatingsystem_id")),
            provision_method,
            pxe_loader,
            comment,
            managed,
            enable_bmc: false,
            bmc_success: false,
            interfaces: interfaces.interfaces,
        })
    }
}
