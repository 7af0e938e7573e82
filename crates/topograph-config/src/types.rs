// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `topograph.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TopographConfig {
    pub system: SystemConfig,
    pub synapse: SynapseConfig,
    pub connectivity: ConnectivityConfig,
    pub dump: DumpConfig,
}

/// System-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Parameter defaults handed to the built-in synapse models
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SynapseConfig {
    pub default_weight: f64,
    pub default_delay: f64,
}

impl Default for SynapseConfig {
    fn default() -> Self {
        Self {
            default_weight: 1.0,
            default_delay: 1.0,
        }
    }
}

/// Defaults for connection spec flags left unset
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    pub allow_autapses: bool,
    pub allow_multapses: bool,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            allow_autapses: true,
            allow_multapses: true,
        }
    }
}

/// Dump output configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Directory relative dump file names resolve against (empty = cwd)
    pub data_path: PathBuf,
    /// Refuse to replace an existing file when false
    pub overwrite_files: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::new(),
            overwrite_files: true,
        }
    }
}

impl DumpConfig {
    /// Resolve `file_name` against `data_path`; absolute names pass through
    pub fn resolve(&self, file_name: impl AsRef<Path>) -> PathBuf {
        let file_name = file_name.as_ref();
        if file_name.is_absolute() || self.data_path.as_os_str().is_empty() {
            file_name.to_path_buf()
        } else {
            self.data_path.join(file_name)
        }
    }
}
