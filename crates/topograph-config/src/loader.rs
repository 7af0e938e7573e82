// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{validate_config, ConfigError, ConfigResult, TopographConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "topograph.toml";

/// Find the topograph configuration file
///
/// Search order:
/// 1. `TOPOGRAPH_CONFIG_PATH` environment variable
/// 2. Current working directory: `./topograph.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("TOPOGRAPH_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by TOPOGRAPH_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Configuration file '{}' not found in any of these locations:\n{}\n\nSet TOPOGRAPH_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<TopographConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: TopographConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `TOPOGRAPH_LOG_LEVEL` -> `system.log_level`
/// - `TOPOGRAPH_DATA_PATH` -> `dump.data_path`
/// - `TOPOGRAPH_DEFAULT_WEIGHT` -> `synapse.default_weight`
/// - `TOPOGRAPH_DEFAULT_DELAY` -> `synapse.default_delay`
pub fn apply_environment_overrides(config: &mut TopographConfig) {
    if let Ok(value) = env::var("TOPOGRAPH_LOG_LEVEL") {
        config.system.log_level = value;
    }
    if let Ok(value) = env::var("TOPOGRAPH_DATA_PATH") {
        config.dump.data_path = PathBuf::from(value);
    }
    if let Ok(value) = env::var("TOPOGRAPH_DEFAULT_WEIGHT") {
        if let Ok(weight) = value.parse::<f64>() {
            config.synapse.default_weight = weight;
        }
    }
    if let Ok(value) = env::var("TOPOGRAPH_DEFAULT_DELAY") {
        if let Ok(delay) = value.parse::<f64>() {
            config.synapse.default_delay = delay;
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"data_path": "/tmp/out", "default_delay": "0.5"}`)
pub fn apply_cli_overrides(config: &mut TopographConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("log_level") {
        config.system.log_level = value.clone();
    }
    if let Some(value) = cli_args.get("data_path") {
        config.dump.data_path = PathBuf::from(value);
    }
    if let Some(value) = cli_args.get("default_weight") {
        if let Ok(weight) = value.parse::<f64>() {
            config.synapse.default_weight = weight;
        }
    }
    if let Some(value) = cli_args.get("default_delay") {
        if let Ok(delay) = value.parse::<f64>() {
            config.synapse.default_delay = delay;
        }
    }
}
