// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Ensures configuration values are within valid ranges before they reach
//! the network manager.

use crate::{ConfigError, ConfigResult, TopographConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Every problem is collected and reported in a single
/// `ConfigError::ValidationError`.
pub fn validate_config(config: &TopographConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_log_level(config, &mut errors);
    validate_synapse_defaults(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_log_level(config: &TopographConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.system.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "system.log_level".to_string(),
            reason: format!("'{}' is not one of {}", config.system.log_level, LOG_LEVELS.join(", ")),
        });
    }
}

fn validate_synapse_defaults(config: &TopographConfig, errors: &mut Vec<ConfigValidationError>) {
    if !config.synapse.default_weight.is_finite() {
        errors.push(ConfigValidationError::InvalidValue {
            field: "synapse.default_weight".to_string(),
            reason: "must be finite".to_string(),
        });
    }
    let delay = config.synapse.default_delay;
    if !delay.is_finite() || delay <= 0.0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "synapse.default_delay".to_string(),
            reason: format!("must be finite and positive, got {}", delay),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_delay_and_level_together() {
        let mut config = TopographConfig::default();
        config.synapse.default_delay = 0.0;
        config.system.log_level = "verbose".to_string();

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("synapse.default_delay"));
                assert!(msg.contains("system.log_level"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = TopographConfig::default();
        config.system.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_nan_weight() {
        let mut config = TopographConfig::default();
        config.synapse.default_weight = f64::NAN;
        assert!(validate_config(&config).is_err());
    }
}
