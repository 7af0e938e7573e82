// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-crate debug flags
//!
//! Flags come from `--debug-<crate>` arguments (`--debug-all` for every
//! workspace crate) and from `TOPOGRAPH_DEBUG`, a comma-separated crate list
//! or `all`.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Crates whose log level is raised to `debug`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    enabled: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Collect `--debug-*` flags; other arguments are ignored
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = Self::default();
        for arg in args {
            match arg.strip_prefix("--debug-") {
                Some("all") => flags.enable_all(),
                Some(name) if !name.is_empty() => flags.enable(name),
                _ => {}
            }
        }
        flags
    }

    /// Merge a `TOPOGRAPH_DEBUG` value into the flags
    pub fn merge_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            self.enable(name);
        }
    }

    pub fn enable(&mut self, crate_name: &str) {
        self.enabled.insert(crate_name.to_string());
    }

    fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enable(crate_name);
        }
    }

    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled.contains(crate_name)
    }

    /// `EnvFilter` directives, e.g. `"topograph_dump=debug,info"`
    ///
    /// Tracing targets are module paths, so hyphens become underscores.
    /// `base_level` applies to every other target.
    pub fn to_filter_string(&self, base_level: &str) -> String {
        self.enabled
            .iter()
            .map(|name| format!("{}=debug", name.replace('-', "_")))
            .chain(std::iter::once(base_level.to_lowercase()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Debug flags from the process arguments and `TOPOGRAPH_DEBUG`
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());
    if let Ok(value) = env::var("TOPOGRAPH_DEBUG") {
        flags.merge_env_value(&value);
    }
    flags
}
