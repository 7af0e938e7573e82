// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Connection registry - append-only store of connection records in creation order.
*/

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use topograph_layout::{LayerRecord, NodeId};

use crate::synapse_models::SynapseModelId;

/// One directed connection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
    pub synapse_model: SynapseModelId,
    pub weight: f64,
    pub delay: f64,
}

#[derive(Debug, Default, Clone)]
pub struct ConnectionRegistry {
    connections: Vec<Connection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub(crate) fn extend(&mut self, batch: Vec<Connection>) {
        self.connections.extend(batch);
    }

    pub(crate) fn clear(&mut self) {
        self.connections.clear();
    }

    /// Existing (source, target) pairs carrying `synapse_model`
    pub(crate) fn pairs_for_model(&self, synapse_model: SynapseModelId) -> AHashSet<(NodeId, NodeId)> {
        self.connections
            .iter()
            .filter(|c| c.synapse_model == synapse_model)
            .map(|c| (c.source, c.target))
            .collect()
    }

    /// Connections from `source` layer nodes to `target` layer nodes with
    /// `synapse_model`, in creation order
    pub fn select<'a>(
        &'a self,
        source: &'a LayerRecord,
        target: &'a LayerRecord,
        synapse_model: SynapseModelId,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections.iter().filter(move |c| {
            c.synapse_model == synapse_model && source.contains(c.source) && target.contains(c.target)
        })
    }
}
