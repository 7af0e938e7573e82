// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Divergent rule - every source node fans out to every target node.
*/

use topograph_layout::NodeId;

/// Source-major all-to-all pairing
pub fn syn_divergent(sources: &[NodeId], targets: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::with_capacity(sources.len() * targets.len());
    for &source in sources {
        for &target in targets {
            pairs.push((source, target));
        }
    }
    pairs
}
