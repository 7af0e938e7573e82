// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Topograph Layout

Spatial foundation for layered networks:
- Coordinate system (2-D positions and layer extents)
- Displacement between nodes under open or periodic (toroidal) boundaries
- Layer geometry (regular grids and free position lists)
- Node arena: layers own contiguous ranges of a shared node store

## Coordinate conventions

A grid layer is centered on its `center` (origin by default) and spans its
extent on each axis. Row 0 is the topmost row, so `y` decreases with the row
index while `x` increases with the column index:

```text
  (r=0,c=0)  (r=0,c=1)        y ▲
  (r=1,c=0)  (r=1,c=1)          └──▶ x
```

Node ids are exposed as flat, 1-based integers assigned in creation order
across all layers.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod arena;
pub mod coordinates;
pub mod grid;
pub mod types;

pub use arena::{LayerArena, LayerRecord};
pub use coordinates::{displacement, wrap_axis, Extent, Position};
pub use grid::{FreeSpec, GridSpec, LayerGeometry, LayerShape, Positions};
pub use types::{LayerId, LayoutError, LayoutResult, NodeId};
