// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Connection dump: one `<source> <target> <weight> <delay> <dx> <dy>` line per
//! matching connection, in creation order.
//!
//! A connection matches when its synapse model equals the requested one, its
//! source belongs to the source layer and its target to the target layer.
//! The displacement uses the source layer's extent and boundary policy.

use std::io::Write;
use std::path::Path;

use topograph_connectivity::{Connection, NetworkManager};
use topograph_layout::LayerId;
use tracing::info;

use crate::format::Real;
use crate::target::DumpTarget;
use crate::Result;

fn write_records<W: Write>(
    writer: &mut W,
    network: &NetworkManager,
    source_layer: LayerId,
    records: &[&Connection],
) -> Result<usize> {
    let geometry = network.layer(source_layer)?.geometry;
    let arena = network.arena();

    for conn in records {
        let d = geometry.displacement(arena.position(conn.source)?, arena.position(conn.target)?);
        writeln!(
            writer,
            "{} {} {} {} {} {}",
            conn.source,
            conn.target,
            Real(conn.weight),
            Real(conn.delay),
            Real(d.x),
            Real(d.y)
        )?;
    }
    Ok(records.len())
}

/// Write the connection lines from `source` to `target` with `synapse_model`
pub fn write_layer_connections<W: Write>(
    writer: &mut W,
    network: &NetworkManager,
    source: LayerId,
    target: LayerId,
    synapse_model: &str,
) -> Result<usize> {
    let records = network.connections(source, target, synapse_model)?;
    write_records(writer, network, source, &records)
}

/// Dump connections from `source` to `target` with `synapse_model` to `path`
pub fn dump_layer_connections(
    network: &NetworkManager,
    source: LayerId,
    target: LayerId,
    synapse_model: &str,
    path: impl AsRef<Path>,
) -> Result<usize> {
    DumpTarget::default().dump_layer_connections(network, source, target, synapse_model, path)
}

impl DumpTarget {
    /// Dump matching connections to `file_name` under the data path
    ///
    /// Layers and synapse model are resolved before the file is opened.
    pub fn dump_layer_connections(
        &self,
        network: &NetworkManager,
        source: LayerId,
        target: LayerId,
        synapse_model: &str,
        file_name: impl AsRef<Path>,
    ) -> Result<usize> {
        let records = network.connections(source, target, synapse_model)?;
        let path = self.resolve(file_name);
        let lines = self.write_with(&path, |w| write_records(w, network, source, &records))?;
        info!(
            "[DUMP] Wrote {} '{}' connections {} -> {} to {}",
            lines,
            synapse_model,
            source,
            target,
            path.display()
        );
        Ok(lines)
    }
}
