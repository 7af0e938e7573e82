// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Convergent rule - every target node collects from every source node.
*/

use topograph_layout::NodeId;

/// Target-major all-to-all pairing
pub fn syn_convergent(sources: &[NodeId], targets: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::with_capacity(sources.len() * targets.len());
    for &target in targets {
        for &source in sources {
            pairs.push((source, target));
        }
    }
    pairs
}
