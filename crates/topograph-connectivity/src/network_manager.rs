// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
NetworkManager - explicit simulation context for spatial networks.

Owns every piece of mutable network state:
- Layers and their nodes (via [`LayerArena`])
- Synapse models (via [`SynapseModelRegistry`])
- Connections (via [`ConnectionRegistry`])

## Design Principles

- **No global state**: every operation goes through a `NetworkManager`
  value, so independent networks can coexist in one process.
- **All-or-nothing**: layer descriptors and connection specs are validated
  before any state is mutated; a failed call leaves the manager unchanged.
- **Reset**: [`NetworkManager::reset`] re-initializes the context. Node ids
  restart at 1 and custom synapse models are dropped.
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use topograph_config::TopographConfig;
use topograph_layout::{LayerArena, LayerId, LayerRecord, NodeId, Position, Positions};

use crate::registry::{Connection, ConnectionRegistry};
use crate::rules::candidate_pairs;
use crate::spec::{ConnectionDefaults, ConnectionSpec};
use crate::synapse_models::{SynapseModelId, SynapseModelRegistry};
use crate::types::ConnectivityResult;

/// Defaults a NetworkManager is created with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkDefaults {
    pub weight: f64,
    pub delay: f64,
    pub connection: ConnectionDefaults,
}

impl Default for NetworkDefaults {
    fn default() -> Self {
        Self {
            weight: 1.0,
            delay: 1.0,
            connection: ConnectionDefaults::default(),
        }
    }
}

impl From<&TopographConfig> for NetworkDefaults {
    fn from(config: &TopographConfig) -> Self {
        Self {
            weight: config.synapse.default_weight,
            delay: config.synapse.default_delay,
            connection: ConnectionDefaults {
                allow_autapses: config.connectivity.allow_autapses,
                allow_multapses: config.connectivity.allow_multapses,
            },
        }
    }
}

/// Aggregate counters of a network (diagnostics only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelStatus {
    pub num_layers: usize,
    pub num_nodes: usize,
    pub num_connections: usize,
    pub synapse_models: Vec<String>,
}

/// Central manager for layers, synapse models and connections
#[derive(Debug)]
pub struct NetworkManager {
    arena: LayerArena,
    synapse_models: SynapseModelRegistry,
    connections: ConnectionRegistry,
    defaults: NetworkDefaults,
}

impl Default for NetworkManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkManager {
    pub fn new() -> Self {
        Self::with_defaults(NetworkDefaults::default())
    }

    pub fn with_defaults(defaults: NetworkDefaults) -> Self {
        Self {
            arena: LayerArena::new(),
            synapse_models: SynapseModelRegistry::with_builtins(defaults.weight, defaults.delay),
            connections: ConnectionRegistry::new(),
            defaults,
        }
    }

    pub fn from_config(config: &TopographConfig) -> Self {
        Self::with_defaults(NetworkDefaults::from(config))
    }

    /// Discard all layers, nodes, connections and custom synapse models
    pub fn reset(&mut self) {
        self.arena.clear();
        self.connections.clear();
        self.synapse_models.reset();
        info!("[NETWORK] Reset");
    }

    // ======================================================================
    // Layers
    // ======================================================================

    /// Create a layer of `model` nodes placed according to `positions`
    pub fn create_layer(
        &mut self,
        model: &str,
        positions: impl Into<Positions>,
    ) -> ConnectivityResult<LayerId> {
        let positions = positions.into();
        let id = self.arena.add_layer(model, &positions)?;
        info!(
            "[NETWORK] Created {} ({}, {} nodes)",
            id,
            model,
            self.arena.layer(id)?.len()
        );
        Ok(id)
    }

    pub fn layer(&self, id: LayerId) -> ConnectivityResult<&LayerRecord> {
        Ok(self.arena.layer(id)?)
    }

    pub fn layer_nodes(&self, id: LayerId) -> ConnectivityResult<Vec<NodeId>> {
        Ok(self.arena.layer(id)?.node_ids().collect())
    }

    pub fn arena(&self) -> &LayerArena {
        &self.arena
    }

    // ======================================================================
    // Spatial queries
    // ======================================================================

    pub fn position(&self, node: NodeId) -> ConnectivityResult<Position> {
        Ok(self.arena.position(node)?)
    }

    pub fn layer_of(&self, node: NodeId) -> ConnectivityResult<LayerId> {
        Ok(self.arena.layer_of(node)?)
    }

    /// Displacement from `from` to `to` under the boundary policy of `from`'s layer
    pub fn displacement(&self, from: NodeId, to: NodeId) -> ConnectivityResult<Position> {
        Ok(self.arena.displacement(from, to)?)
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> ConnectivityResult<f64> {
        Ok(self.displacement(from, to)?.norm())
    }

    /// Node nearest to the layer center (ties: lowest id)
    pub fn find_center_element(&self, layer: LayerId) -> ConnectivityResult<NodeId> {
        let center = self.arena.layer(layer)?.geometry.center;
        Ok(self.arena.nearest_node(layer, center)?)
    }

    /// Node of `layer` nearest to `position` (ties: lowest id)
    pub fn find_nearest_element(
        &self,
        layer: LayerId,
        position: Position,
    ) -> ConnectivityResult<NodeId> {
        Ok(self.arena.nearest_node(layer, position)?)
    }

    // ======================================================================
    // Synapse models
    // ======================================================================

    pub fn synapse_models(&self) -> &SynapseModelRegistry {
        &self.synapse_models
    }

    /// Register a derived synapse model
    pub fn copy_synapse_model(
        &mut self,
        base: &str,
        new_name: &str,
        weight: Option<f64>,
        delay: Option<f64>,
    ) -> ConnectivityResult<SynapseModelId> {
        self.synapse_models.copy_model(base, new_name, weight, delay)
    }

    // ======================================================================
    // Connections
    // ======================================================================

    /// Connect `source` layer nodes to `target` layer nodes
    ///
    /// The spec and both layers are validated first; on error nothing is
    /// created. Returns the number of connections created.
    pub fn connect(
        &mut self,
        source: LayerId,
        target: LayerId,
        spec: &ConnectionSpec,
    ) -> ConnectivityResult<usize> {
        let resolved = spec.resolve(&self.synapse_models, &self.defaults.connection)?;
        let source_nodes = self.layer_nodes(source)?;
        let target_nodes = self.layer_nodes(target)?;

        let existing = if resolved.allow_multapses {
            None
        } else {
            Some(self.connections.pairs_for_model(resolved.synapse_model))
        };

        let batch: Vec<Connection> =
            candidate_pairs(resolved.connection_type, &source_nodes, &target_nodes)
                .into_iter()
                .filter(|(s, t)| resolved.allow_autapses || s != t)
                .filter(|pair| existing.as_ref().map_or(true, |set| !set.contains(pair)))
                .map(|(source, target)| Connection {
                    source,
                    target,
                    synapse_model: resolved.synapse_model,
                    weight: resolved.weight,
                    delay: resolved.delay,
                })
                .collect();

        let created = batch.len();
        self.connections.extend(batch);

        debug!(
            "[NETWORK] {} {} -> {} via '{}': {} connections",
            resolved.connection_type,
            source,
            target,
            self.synapse_models
                .name(resolved.synapse_model)
                .unwrap_or_default(),
            created
        );
        Ok(created)
    }

    pub fn connection_registry(&self) -> &ConnectionRegistry {
        &self.connections
    }

    /// Connections from `source` to `target` layer with `synapse_model`, in creation order
    pub fn connections(
        &self,
        source: LayerId,
        target: LayerId,
        synapse_model: &str,
    ) -> ConnectivityResult<Vec<&Connection>> {
        let model = self.synapse_models.resolve(synapse_model)?;
        let source = self.arena.layer(source)?;
        let target = self.arena.layer(target)?;
        Ok(self.connections.select(source, target, model).collect())
    }

    pub fn kernel_status(&self) -> KernelStatus {
        KernelStatus {
            num_layers: self.arena.layer_count(),
            num_nodes: self.arena.node_count(),
            num_connections: self.connections.len(),
            synapse_models: self.synapse_models.names(),
        }
    }
}
