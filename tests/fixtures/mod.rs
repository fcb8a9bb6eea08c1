// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for foreman-client
//!
//! Provides deterministic test data for wire serialization and API tests.
//! All ids and timestamps are fixed constants to ensure tests are
//! reproducible.
//!
//! # Design Principles
//! - All test data is deterministic (no `Utc::now()`)
//! - Fixtures are the ONLY place that constructs reference payloads
//! - Tests use fixtures, never ad-hoc JSON literals for full records

use serde_json::{json, Value};

use foreman_client::{Host, InterfaceAttachment, ResourceRef};

/// Install a tracing subscriber for test debugging (RUST_LOG-controlled)
///
/// Safe to call from every test; only the first call in a process wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// Fixed record ids
pub const HOST_ID: u32 = 42;
pub const DOMAIN_ID: u32 = 2;
pub const OS_ID: u32 = 7;
pub const INTERFACE_ID: u32 = 9;

// Fixed test timestamps (RFC 3339)
pub const CREATED_AT: &str = "2026-01-19T12:00:00Z";
pub const UPDATED_AT: &str = "2026-01-19T12:30:00Z";

/// A host as a caller would build it before creation
pub fn sample_host() -> Host {
    let mut host = Host::new("node1.example.com");
    host.comment = "lab node".to_string();
    host.build = true;
    host.provision_method = "build".to_string();
    host.pxe_loader = "Grub2 UEFI".to_string();
    host.domain_id = ResourceRef::Set(DOMAIN_ID);
    host.operating_system_id = ResourceRef::Set(OS_ID);
    host
}

/// A host carrying one BMC interface attachment
pub fn host_with_bmc_interface() -> Host {
    let mut host = sample_host();
    host.enable_bmc = true;
    host.interfaces.push(InterfaceAttachment {
        identifier: "ipmi0".to_string(),
        username: "bmc-admin".to_string(),
        password: "bmc-secret".to_string(),
        ip: "10.0.1.5".to_string(),
        mac: "aa:bb:cc:dd:ee:01".to_string(),
        interface_type: "bmc".to_string(),
        provider: "IPMI".to_string(),
        managed: true,
        ..InterfaceAttachment::default()
    });
    host
}

/// The bare host object Foreman returns on create/read/update
///
/// Numeric attributes are floats, matching how the server reports them.
pub fn host_response(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "created_at": CREATED_AT,
        "updated_at": UPDATED_AT,
        "build": true,
        "comment": "lab node",
        "managed": true,
        "domain_id": DOMAIN_ID as f64,
        "operatingsystem_id": OS_ID as f64,
        "provision_method": "build",
        "pxe_loader": "Grub2 UEFI",
        "interfaces": [
            {
                "id": INTERFACE_ID,
                "identifier": "eth0",
                "name": name,
                "ip": "10.0.0.5",
                "mac": "aa:bb:cc:dd:ee:ff",
                "type": "interface",
                "managed": true,
                "primary": true,
                "provision": true
            }
        ]
    })
}
