// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Node dump: one `<id> <x> <y>` line per node in ascending id order.

use std::io::Write;
use std::path::Path;

use topograph_connectivity::NetworkManager;
use topograph_layout::LayerId;
use tracing::info;

use crate::format::Real;
use crate::target::DumpTarget;
use crate::Result;

/// Write the node lines of `layer` to `writer`, returning the line count
pub fn write_layer_nodes<W: Write>(
    writer: &mut W,
    network: &NetworkManager,
    layer: LayerId,
) -> Result<usize> {
    let record = network.layer(layer)?;
    let positions = network.arena().layer_positions(layer)?;

    for (node, position) in record.node_ids().zip(positions) {
        writeln!(writer, "{} {} {}", node, Real(position.x), Real(position.y))?;
    }
    Ok(positions.len())
}

/// Dump the nodes of `layer` to `path` (created or truncated)
pub fn dump_layer_nodes(
    network: &NetworkManager,
    layer: LayerId,
    path: impl AsRef<Path>,
) -> Result<usize> {
    DumpTarget::default().dump_layer_nodes(network, layer, path)
}

impl DumpTarget {
    /// Dump the nodes of `layer` to `file_name` under the data path
    pub fn dump_layer_nodes(
        &self,
        network: &NetworkManager,
        layer: LayerId,
        file_name: impl AsRef<Path>,
    ) -> Result<usize> {
        network.layer(layer)?;
        let path = self.resolve(file_name);
        let lines = self.write_with(&path, |w| write_layer_nodes(w, network, layer))?;
        info!("[DUMP] Wrote {} nodes of {} to {}", lines, layer, path.display());
        Ok(lines)
    }
}
