// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Node arena with layer-owned contiguous ranges.

Nodes of all layers share one position store. A layer owns the half-open
offset range its nodes were appended into, so membership tests and position
lookups are O(1) and node ids stay flat and sequential across layers.
*/

use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::coordinates::Position;
use crate::grid::{LayerGeometry, Positions};
use crate::types::{LayerId, LayoutError, LayoutResult, NodeId};

/// Metadata of one layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerRecord {
    pub id: LayerId,
    /// Opaque neuron model label the layer was created with
    pub model: String,
    pub geometry: LayerGeometry,
    nodes: Range<usize>,
}

impl LayerRecord {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.clone().map(NodeId::from_offset)
    }

    pub fn first_node(&self) -> NodeId {
        NodeId::from_offset(self.nodes.start)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.offset().is_some_and(|o| self.nodes.contains(&o))
    }

    pub(crate) fn offsets(&self) -> Range<usize> {
        self.nodes.clone()
    }
}

/// Storage for layers and their nodes
#[derive(Debug, Default)]
pub struct LayerArena {
    positions: Vec<Position>,
    owners: Vec<LayerId>,
    layers: Vec<LayerRecord>,
}

impl LayerArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layer, appending its nodes after all existing nodes
    ///
    /// The descriptor is fully validated before anything is stored.
    pub fn add_layer(&mut self, model: &str, positions: &Positions) -> LayoutResult<LayerId> {
        let (geometry, node_positions) = positions.materialize()?;

        let id = LayerId(self.layers.len() as u32);
        let start = self.positions.len();
        let end = start + node_positions.len();

        self.positions.extend(node_positions);
        self.owners.resize(end, id);
        self.layers.push(LayerRecord {
            id,
            model: model.to_string(),
            geometry,
            nodes: start..end,
        });

        debug!(
            "[LAYOUT] Created {} with {} nodes (ids {}..={})",
            id,
            end - start,
            start + 1,
            end
        );
        Ok(id)
    }

    pub fn layer(&self, id: LayerId) -> LayoutResult<&LayerRecord> {
        self.layers
            .get(id.0 as usize)
            .ok_or(LayoutError::UnknownLayer(id.0))
    }

    pub fn layers(&self) -> impl Iterator<Item = &LayerRecord> {
        self.layers.iter()
    }

    pub fn position(&self, node: NodeId) -> LayoutResult<Position> {
        node.offset()
            .and_then(|o| self.positions.get(o).copied())
            .ok_or(LayoutError::UnknownNode(node.0))
    }

    pub fn layer_of(&self, node: NodeId) -> LayoutResult<LayerId> {
        node.offset()
            .and_then(|o| self.owners.get(o).copied())
            .ok_or(LayoutError::UnknownNode(node.0))
    }

    /// Positions of a layer's nodes, in node-id order
    pub fn layer_positions(&self, id: LayerId) -> LayoutResult<&[Position]> {
        let record = self.layer(id)?;
        Ok(&self.positions[record.offsets()])
    }

    /// Displacement from `from` to `to` under the boundary policy of the layer owning `from`
    pub fn displacement(&self, from: NodeId, to: NodeId) -> LayoutResult<Position> {
        let geometry = self.layer(self.layer_of(from)?)?.geometry;
        Ok(geometry.displacement(self.position(from)?, self.position(to)?))
    }

    /// Node of `layer` nearest to `target` under the layer's boundary policy (ties: lowest id)
    pub fn nearest_node(&self, layer: LayerId, target: Position) -> LayoutResult<NodeId> {
        let record = self.layer(layer)?;
        let mut best: Option<(NodeId, f64)> = None;
        for (node, position) in record.node_ids().zip(&self.positions[record.offsets()]) {
            let distance = record.geometry.displacement(target, *position).norm();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((node, distance));
            }
        }
        best.map(|(node, _)| node)
            .ok_or_else(|| LayoutError::InvalidLayout(format!("{} has no nodes", layer)))
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Discard all layers and nodes; ids restart at 1
    pub fn clear(&mut self) {
        self.positions.clear();
        self.owners.clear();
        self.layers.clear();
    }
}
