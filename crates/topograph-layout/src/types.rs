// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Core identifier and error types for layout operations.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat node identifier (1-based, assigned in creation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Node id for a 0-based arena offset
    pub fn from_offset(offset: usize) -> Self {
        NodeId(offset as u64 + 1)
    }

    /// 0-based arena offset, `None` for the reserved id 0
    pub fn offset(self) -> Option<usize> {
        self.0.checked_sub(1).map(|v| v as usize)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layer handle (index into the layer table of a [`crate::LayerArena`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u32);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur during layout operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Unknown layer: {0}")]
    UnknownLayer(u32),

    #[error("Unknown node: {0}")]
    UnknownNode(u64),
}
