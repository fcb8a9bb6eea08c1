// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! This module contains property-based tests using proptest to verify
//! wire-encoding invariants of the host payload adapter.

mod host_encoding;
