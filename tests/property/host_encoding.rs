// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Host Wire Encoding
//!
//! The encode and decode transformations are independently specified and
//! not inverses; these tests pin down the invariants that hold for every
//! representable host regardless of which fields are populated.

use proptest::prelude::*;
use serde_json::Value;

use foreman_client::{Host, InterfaceAttachment, ResourceRef};

// ============================================================================
// Strategies
// ============================================================================

/// Foreign-key keys as they appear on the write side
const REFERENCE_KEYS: [&str; 4] = [
    "domain_id",
    "operatingsystem_id",
    "hostgroup_id",
    "environment_id",
];

fn resource_ref() -> impl Strategy<Value = ResourceRef> {
    prop_oneof![
        Just(ResourceRef::Unset),
        Just(ResourceRef::Clear),
        (1u32..100_000).prop_map(ResourceRef::Set),
    ]
}

fn host_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,11}(\\.[a-z]{2,8}){0,2}"
}

fn interface_attachment() -> impl Strategy<Value = InterfaceAttachment> {
    (
        proptest::option::of(1u32..10_000),
        "[a-z]{2,5}[0-9]",
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(id, identifier, primary, destroy)| InterfaceAttachment {
            id,
            identifier,
            primary,
            destroy,
            ..InterfaceAttachment::default()
        })
}

fn arbitrary_host() -> impl Strategy<Value = Host> {
    (
        (
            host_name(),
            "[ -~]{0,30}",
            any::<bool>(),
            any::<bool>(),
            prop_oneof![Just(String::new()), Just("build".to_string()), Just("image".to_string())],
        ),
        (resource_ref(), resource_ref(), resource_ref(), resource_ref()),
        proptest::collection::vec(interface_attachment(), 0..4),
    )
        .prop_map(
            |(
                (name, comment, build, managed, provision_method),
                (domain_id, environment_id, hostgroup_id, operating_system_id),
                interfaces,
            )| {
                let mut host = Host::new(name);
                host.comment = comment;
                host.build = build;
                host.managed = managed;
                host.provision_method = provision_method;
                host.domain_id = domain_id;
                host.environment_id = environment_id;
                host.hostgroup_id = hostgroup_id;
                host.operating_system_id = operating_system_id;
                host.interfaces = interfaces;
                host
            },
        )
}

fn encode(host: &Host) -> Value {
    serde_json::to_value(host).expect("host encoding")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the write-side payload is always a single-key wrapper
    #[test]
    fn prop_encode_wraps_under_host_key(host in arbitrary_host()) {
        let wire = encode(&host);
        let object = wire.as_object().expect("top-level object");

        prop_assert_eq!(object.len(), 1);
        prop_assert!(object.contains_key("host"));
    }

    /// Property: a foreign-key attribute is never encoded as a bare zero
    ///
    /// Each reference key is absent (unset), null (clear), or a positive
    /// number (set). A literal 0 would read remotely as "reference to
    /// record 0".
    #[test]
    fn prop_encode_never_emits_zero_reference(host in arbitrary_host()) {
        let wire = encode(&host);
        let attributes = wire["host"].as_object().expect("host attributes");

        for key in REFERENCE_KEYS {
            match attributes.get(key) {
                None | Some(Value::Null) => {}
                Some(Value::Number(n)) => {
                    prop_assert!(n.as_f64().expect("numeric reference") > 0.0);
                }
                Some(other) => prop_assert!(false, "unexpected {} encoding: {}", key, other),
            }
        }
    }

    /// Property: the interface list key is present exactly when the list
    /// is non-empty
    #[test]
    fn prop_interfaces_key_present_iff_non_empty(host in arbitrary_host()) {
        let wire = encode(&host);
        let attributes = wire["host"].as_object().expect("host attributes");

        prop_assert_eq!(
            attributes.contains_key("interfaces_attributes"),
            !host.interfaces.is_empty()
        );
    }

    /// Property: the removal marker appears on the wire exactly when set
    #[test]
    fn prop_removal_marker_presence(interface in interface_attachment()) {
        let wire = serde_json::to_value(&interface).expect("interface encoding");

        prop_assert_eq!(wire.get("_destroy").is_some(), interface.destroy);
        if interface.destroy {
            prop_assert_eq!(wire.get("_destroy").cloned(), Some(Value::Bool(true)));
        }
    }

    /// Property: decoding the write-side attributes recovers every field
    /// present in both directions
    ///
    /// The reply from the server is a bare object, so the wrapper is
    /// stripped first. `Clear` has no read-side representation beyond
    /// null, so references are compared by their record id.
    #[test]
    fn prop_decode_recovers_shared_fields(host in arbitrary_host()) {
        let attributes = encode(&host)["host"].clone();
        let decoded: Host = serde_json::from_value(attributes).expect("host decoding");

        prop_assert_eq!(decoded.name, host.name);
        prop_assert_eq!(decoded.comment, host.comment);
        prop_assert_eq!(decoded.build, host.build);
        prop_assert_eq!(decoded.managed, host.managed);
        prop_assert_eq!(decoded.provision_method, host.provision_method);
        prop_assert_eq!(decoded.pxe_loader, host.pxe_loader);
        prop_assert_eq!(decoded.domain_id.id(), host.domain_id.id());
        prop_assert_eq!(decoded.environment_id.id(), host.environment_id.id());
        prop_assert_eq!(decoded.hostgroup_id.id(), host.hostgroup_id.id());
        prop_assert_eq!(decoded.operating_system_id.id(), host.operating_system_id.id());
    }
}
