// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Connection rules.

Each rule turns the node lists of a source and a target layer into the
ordered candidate pairs for one connect call. Filtering (autapses,
multapses) happens afterwards in the network manager.
*/

pub mod convergent;
pub mod divergent;

pub use convergent::syn_convergent;
pub use divergent::syn_divergent;

use topograph_layout::NodeId;

use crate::spec::ConnectionType;

/// Candidate (source, target) pairs for `connection_type`, in emission order
pub fn candidate_pairs(
    connection_type: ConnectionType,
    sources: &[NodeId],
    targets: &[NodeId],
) -> Vec<(NodeId, NodeId)> {
    match connection_type {
        ConnectionType::Divergent => syn_divergent(sources, targets),
        ConnectionType::Convergent => syn_convergent(sources, targets),
    }
}
