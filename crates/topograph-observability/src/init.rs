// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Console logging initialization

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Install a global fmt subscriber filtered by `debug_flags` over `base_level`
///
/// `RUST_LOG`, when set, takes precedence over both. Fails if a global
/// subscriber is already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, base_level: &str) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid RUST_LOG directives: {}", directives))?,
        Err(_) => {
            let directives = debug_flags.to_filter_string(base_level);
            EnvFilter::try_new(&directives)
                .with_context(|| format!("Invalid log filter: {}", directives))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Initialize logging for tests; repeated calls are no-ops
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
