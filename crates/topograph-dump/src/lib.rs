// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Topograph Dump
//!
//! Plain-text serialization of spatial networks for external analysis tools.
//!
//! ## Formats
//! Both formats are newline-terminated lines of space-separated fields.
//!
//! ```text
//! node dump (.lyr):        <id> <x> <y>
//! connection dump (.cnn):  <source> <target> <weight> <delay> <dx> <dy>
//! ```
//!
//! Real numbers use the shortest decimal form that round-trips, always with
//! a fractional part (`1.0`, `-1.0`, `0.5`).
//!
//! ## Usage
//! ```ignore
//! use topograph_dump::{dump_layer_connections, dump_layer_nodes};
//!
//! dump_layer_nodes(&network, layer, "grid.lyr")?;
//! dump_layer_connections(&network, layer, layer, "static_synapse", "grid.cnn")?;
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use std::path::PathBuf;

use thiserror::Error;
use topograph_connectivity::ConnectivityError;
use topograph_layout::LayoutError;

mod connections;
mod format;
mod nodes;
mod target;

pub use connections::{dump_layer_connections, write_layer_connections};
pub use format::Real;
pub use nodes::{dump_layer_nodes, write_layer_nodes};
pub use target::DumpTarget;

/// Dump errors
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("Refusing to overwrite existing file: {}", .0.display())]
    FileExists(PathBuf),

    #[error("Unknown synapse model: {0}")]
    UnknownSynapseModel(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConnectivityError> for DumpError {
    fn from(err: ConnectivityError) -> Self {
        match err {
            ConnectivityError::UnknownSynapseModel(name) => DumpError::UnknownSynapseModel(name),
            ConnectivityError::Layout(e) => DumpError::Layout(e),
            other => DumpError::Internal(other.to_string()),
        }
    }
}

impl DumpError {
    /// Attach the output path to a bare write error
    pub(crate) fn at_path(self, path: &std::path::Path) -> Self {
        match self {
            DumpError::Write(source) => DumpError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DumpError>;
