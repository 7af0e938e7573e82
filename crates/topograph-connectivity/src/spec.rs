// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Connection specifications.

A [`ConnectionSpec`] is the user-facing description of a connect call. It is
validated against the synapse model registry into a [`ResolvedSpec`] before
any connection is created.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::synapse_models::{
    check_delay, check_weight, SynapseModelId, SynapseModelRegistry, DEFAULT_SYNAPSE_MODEL,
};
use crate::types::{ConnectivityError, ConnectivityResult};

/// How source and target nodes are paired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Each source node fans out to the target nodes (source-major order)
    Divergent,
    /// Each target node collects from the source nodes (target-major order)
    Convergent,
}

impl ConnectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionType::Divergent => "divergent",
            ConnectionType::Convergent => "convergent",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = ConnectivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "divergent" => Ok(ConnectionType::Divergent),
            "convergent" => Ok(ConnectionType::Convergent),
            other => Err(ConnectivityError::UnsupportedConnectionType(other.to_string())),
        }
    }
}

/// Description of one connect call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSpec {
    pub connection_type: ConnectionType,
    /// Defaults to [`DEFAULT_SYNAPSE_MODEL`]
    pub synapse_model: Option<String>,
    /// Defaults to the synapse model's weight
    pub weight: Option<f64>,
    /// Defaults to the synapse model's delay
    pub delay: Option<f64>,
    pub allow_autapses: Option<bool>,
    pub allow_multapses: Option<bool>,
}

impl ConnectionSpec {
    pub fn new(connection_type: ConnectionType) -> Self {
        Self {
            connection_type,
            synapse_model: None,
            weight: None,
            delay: None,
            allow_autapses: None,
            allow_multapses: None,
        }
    }

    pub fn divergent() -> Self {
        Self::new(ConnectionType::Divergent)
    }

    pub fn convergent() -> Self {
        Self::new(ConnectionType::Convergent)
    }

    pub fn with_synapse_model(mut self, name: impl Into<String>) -> Self {
        self.synapse_model = Some(name.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_autapses(mut self, allow: bool) -> Self {
        self.allow_autapses = Some(allow);
        self
    }

    pub fn with_multapses(mut self, allow: bool) -> Self {
        self.allow_multapses = Some(allow);
        self
    }

    /// Build a spec from a string-keyed option dictionary
    ///
    /// Recognized keys: `connection_type` (required), `synapse_model`,
    /// `weight`, `delay`, `allow_autapses`, `allow_multapses`. Any other key
    /// is rejected.
    pub fn from_options(options: &Map<String, Value>) -> ConnectivityResult<Self> {
        let connection_type = match options.get("connection_type") {
            Some(Value::String(s)) => s.parse::<ConnectionType>()?,
            Some(other) => return Err(invalid("connection_type", "expected a string", other)),
            None => {
                return Err(ConnectivityError::InvalidOption {
                    key: "connection_type".to_string(),
                    reason: "missing".to_string(),
                })
            }
        };

        let mut spec = Self::new(connection_type);
        for (key, value) in options {
            match key.as_str() {
                "connection_type" => {}
                "synapse_model" => match value {
                    Value::String(s) => spec.synapse_model = Some(s.clone()),
                    other => return Err(invalid(key, "expected a string", other)),
                },
                "weight" => match value.as_f64() {
                    Some(v) => spec.weight = Some(v),
                    None => return Err(invalid(key, "expected a number", value)),
                },
                "delay" => match value.as_f64() {
                    Some(v) => spec.delay = Some(v),
                    None => return Err(invalid(key, "expected a number", value)),
                },
                "allow_autapses" => match value {
                    Value::Bool(b) => spec.allow_autapses = Some(*b),
                    other => return Err(invalid(key, "expected a boolean", other)),
                },
                "allow_multapses" => match value {
                    Value::Bool(b) => spec.allow_multapses = Some(*b),
                    other => return Err(invalid(key, "expected a boolean", other)),
                },
                unknown => return Err(ConnectivityError::UnknownOption(unknown.to_string())),
            }
        }
        Ok(spec)
    }

    /// Resolve names and defaults; no state is touched
    pub fn resolve(
        &self,
        registry: &SynapseModelRegistry,
        defaults: &ConnectionDefaults,
    ) -> ConnectivityResult<ResolvedSpec> {
        let name = self.synapse_model.as_deref().unwrap_or(DEFAULT_SYNAPSE_MODEL);
        let synapse_model = registry.resolve(name)?;
        let model = registry
            .get(synapse_model)
            .ok_or_else(|| ConnectivityError::UnknownSynapseModel(name.to_string()))?;

        Ok(ResolvedSpec {
            connection_type: self.connection_type,
            synapse_model,
            weight: check_weight(self.weight.unwrap_or(model.weight))?,
            delay: check_delay(self.delay.unwrap_or(model.delay))?,
            allow_autapses: self.allow_autapses.unwrap_or(defaults.allow_autapses),
            allow_multapses: self.allow_multapses.unwrap_or(defaults.allow_multapses),
        })
    }
}

fn invalid(key: &str, reason: &str, value: &Value) -> ConnectivityError {
    ConnectivityError::InvalidOption {
        key: key.to_string(),
        reason: format!("{}, got {}", reason, value),
    }
}

/// Flag defaults for specs that leave them unset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDefaults {
    pub allow_autapses: bool,
    pub allow_multapses: bool,
}

impl Default for ConnectionDefaults {
    fn default() -> Self {
        Self {
            allow_autapses: true,
            allow_multapses: true,
        }
    }
}

/// Fully resolved connect parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSpec {
    pub connection_type: ConnectionType,
    pub synapse_model: SynapseModelId,
    pub weight: f64,
    pub delay: f64,
    pub allow_autapses: bool,
    pub allow_multapses: bool,
}
