// Copyright (c) 2025 - Cowboy AI, Inc.

//! Association Reference Value Object
//!
//! Foreman distinguishes three intents when a host payload carries a
//! foreign-key attribute: leave the association untouched, clear it, or
//! point it at a specific record. A bare integer cannot express the first
//! two, so the reference is modeled explicitly.

use serde_json::Value;

/// A reference to an associated Foreman record (domain, hostgroup, ...)
///
/// # Wire semantics
///
/// - `Unset` — the key is omitted from the outbound payload; the server
///   keeps whatever association it has.
/// - `Clear` — the key is sent as JSON `null`; the server drops the
///   association.
/// - `Set(id)` — the key is sent as the bare record id.
///
/// On inbound payloads the server reports either a number or nothing;
/// an absent, null, or zero value decodes as `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceRef {
    /// No intent; leave the remote association unchanged
    #[default]
    Unset,
    /// Explicitly remove the remote association
    Clear,
    /// Associate with the record carrying this id
    Set(u32),
}

impl ResourceRef {
    /// Build a reference from a plain id, treating 0 as "no reference"
    pub fn from_id(id: u32) -> Self {
        if id == 0 {
            ResourceRef::Unset
        } else {
            ResourceRef::Set(id)
        }
    }

    /// The referenced record id, if one is set
    pub fn id(&self) -> Option<u32> {
        match self {
            ResourceRef::Set(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether this reference should appear in an outbound payload
    pub fn is_unset(&self) -> bool {
        matches!(self, ResourceRef::Unset)
    }

    /// Outbound wire form for the states that appear on the wire
    ///
    /// `Unset` has no wire form (the caller omits the key entirely), so
    /// this returns `None` for it.
    pub fn to_wire(&self) -> Option<Value> {
        match self {
            ResourceRef::Unset => None,
            ResourceRef::Clear => Some(Value::Null),
            ResourceRef::Set(id) => Some(Value::from(*id)),
        }
    }

    /// Decode an inbound wire value
    ///
    /// Foreman reports numeric attributes in floating-point form; anything
    /// absent, non-numeric, or zero decodes as `Unset`.
    pub fn from_wire(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_f64) {
            Some(n) if n != 0.0 => ResourceRef::Set(n as u32),
            _ => ResourceRef::Unset,
        }
    }
}
