// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Synapse model registry.

Synapse models are named labels with default parameters. Names are resolved
to a compact [`SynapseModelId`] once, when a connection spec is validated;
connection records only carry the id.
*/

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ConnectivityError, ConnectivityResult};

/// Model used when a connection spec names none
pub const DEFAULT_SYNAPSE_MODEL: &str = "static_synapse";

/// Most models a registry can hold, built-ins included
pub const MAX_SYNAPSE_MODELS: usize = u16::MAX as usize + 1;

/// Behavior family of a synapse model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynapseKind {
    Static,
    StaticHomogeneous,
    Stdp,
    StdpHomogeneous,
    Tsodyks,
    HillTononi,
}

impl SynapseKind {
    /// Built-in models and the name each registers under
    pub const BUILTINS: [(&'static str, SynapseKind); 6] = [
        ("static_synapse", SynapseKind::Static),
        ("static_synapse_hom_w", SynapseKind::StaticHomogeneous),
        ("stdp_synapse", SynapseKind::Stdp),
        ("stdp_synapse_hom", SynapseKind::StdpHomogeneous),
        ("tsodyks_synapse", SynapseKind::Tsodyks),
        ("ht_synapse", SynapseKind::HillTononi),
    ];

    /// Plastic models change their weight during simulation
    pub fn is_plastic(self) -> bool {
        matches!(
            self,
            SynapseKind::Stdp | SynapseKind::StdpHomogeneous | SynapseKind::Tsodyks | SynapseKind::HillTononi
        )
    }
}

/// Compact synapse model handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynapseModelId(pub u16);

/// A registered synapse model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynapseModel {
    pub name: String,
    pub kind: SynapseKind,
    pub weight: f64,
    pub delay: f64,
    pub builtin: bool,
}

pub(crate) fn check_weight(weight: f64) -> ConnectivityResult<f64> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(ConnectivityError::InvalidOption {
            key: "weight".to_string(),
            reason: format!("must be finite, got {}", weight),
        })
    }
}

pub(crate) fn check_delay(delay: f64) -> ConnectivityResult<f64> {
    if delay.is_finite() && delay > 0.0 {
        Ok(delay)
    } else {
        Err(ConnectivityError::InvalidOption {
            key: "delay".to_string(),
            reason: format!("must be finite and positive, got {}", delay),
        })
    }
}

/// Name → model table
#[derive(Debug, Clone)]
pub struct SynapseModelRegistry {
    models: Vec<SynapseModel>,
    by_name: AHashMap<String, SynapseModelId>,
    default_weight: f64,
    default_delay: f64,
}

impl Default for SynapseModelRegistry {
    fn default() -> Self {
        Self::with_builtins(1.0, 1.0)
    }
}

impl SynapseModelRegistry {
    /// Registry holding the built-in models with the given parameter defaults
    pub fn with_builtins(default_weight: f64, default_delay: f64) -> Self {
        let mut registry = Self {
            models: Vec::new(),
            by_name: AHashMap::new(),
            default_weight,
            default_delay,
        };
        registry.install_builtins();
        registry
    }

    // Runs on an empty table; the built-in ids are their BUILTINS offsets.
    fn install_builtins(&mut self) {
        for (offset, (name, kind)) in SynapseKind::BUILTINS.into_iter().enumerate() {
            let model = SynapseModel {
                name: name.to_string(),
                kind,
                weight: self.default_weight,
                delay: self.default_delay,
                builtin: true,
            };
            self.insert(SynapseModelId(offset as u16), model);
        }
    }

    /// Id the next registered model receives
    fn next_id(&self) -> ConnectivityResult<SynapseModelId> {
        u16::try_from(self.models.len())
            .map(SynapseModelId)
            .map_err(|_| ConnectivityError::SynapseModelLimit(MAX_SYNAPSE_MODELS))
    }

    fn insert(&mut self, id: SynapseModelId, model: SynapseModel) -> SynapseModelId {
        self.by_name.insert(model.name.clone(), id);
        self.models.push(model);
        id
    }

    /// Drop every custom model, keeping the built-ins
    pub fn reset(&mut self) {
        self.models.clear();
        self.by_name.clear();
        self.install_builtins();
    }

    pub fn resolve(&self, name: &str) -> ConnectivityResult<SynapseModelId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ConnectivityError::UnknownSynapseModel(name.to_string()))
    }

    pub fn get(&self, id: SynapseModelId) -> Option<&SynapseModel> {
        self.models.get(id.0 as usize)
    }

    pub fn name(&self, id: SynapseModelId) -> Option<&str> {
        self.get(id).map(|m| m.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.models.iter().map(|m| m.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Register `new_name` as a copy of `base`, optionally overriding its defaults
    pub fn copy_model(
        &mut self,
        base: &str,
        new_name: &str,
        weight: Option<f64>,
        delay: Option<f64>,
    ) -> ConnectivityResult<SynapseModelId> {
        if self.contains(new_name) {
            return Err(ConnectivityError::DuplicateSynapseModel(new_name.to_string()));
        }
        let base_id = self.resolve(base)?;
        let id = self.next_id()?;
        let base_model = &self.models[base_id.0 as usize];

        let model = SynapseModel {
            name: new_name.to_string(),
            kind: base_model.kind,
            weight: check_weight(weight.unwrap_or(base_model.weight))?,
            delay: check_delay(delay.unwrap_or(base_model.delay))?,
            builtin: false,
        };
        debug!("[SYNAPSE] Registered '{}' as copy of '{}'", new_name, base);
        Ok(self.insert(id, model))
    }
}
