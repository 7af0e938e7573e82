// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Core types for connectivity operations.
*/

use topograph_layout::LayoutError;

/// Result type for connectivity operations
pub type ConnectivityResult<T> = Result<T, ConnectivityError>;

/// Errors that can occur while building connections
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectivityError {
    #[error("Unsupported connection type: {0}")]
    UnsupportedConnectionType(String),

    #[error("Unknown synapse model: {0}")]
    UnknownSynapseModel(String),

    #[error("Synapse model already exists: {0}")]
    DuplicateSynapseModel(String),

    #[error("Synapse model registry is full ({0} models)")]
    SynapseModelLimit(usize),

    #[error("Unknown connection option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
