// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # topograph-observability
//!
//! Logging setup shared by topograph binaries and test harnesses, with
//! per-crate debug flag support (`--debug-topograph-dump`, `TOPOGRAPH_DEBUG=all`).

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known topograph crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "topograph",
    "topograph-config",
    "topograph-layout",
    "topograph-connectivity",
    "topograph-dump",
];
