// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Layer geometry: position descriptors and their materialization.

A [`Positions`] descriptor is validated and turned into a [`LayerGeometry`]
plus the ordered list of node positions. Grid positions are emitted in
row-major order, each centered in its cell.
*/

use serde::{Deserialize, Serialize};

use crate::coordinates::{displacement, Extent, Position};
use crate::types::{LayoutError, LayoutResult};

/// Padding factor applied to the bounding box of a free layer without extent
const FREE_EXTENT_PADDING: f64 = 1.02;

/// Regular grid descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
    pub extent: Extent,
    pub center: Position,
    pub edge_wrap: bool,
}

impl GridSpec {
    pub fn new(rows: usize, columns: usize, extent: impl Into<Extent>, edge_wrap: bool) -> Self {
        Self {
            rows,
            columns,
            extent: extent.into(),
            center: Position::ORIGIN,
            edge_wrap,
        }
    }

    /// Builder: place the grid center somewhere other than the origin
    pub fn with_center(mut self, center: impl Into<Position>) -> Self {
        self.center = center.into();
        self
    }

    fn validate(&self) -> LayoutResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LayoutError::InvalidLayout(format!(
                "grid needs at least one row and one column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if !self.extent.is_valid() {
            return Err(LayoutError::InvalidLayout(format!(
                "extent must be finite and positive, got [{}, {}]",
                self.extent.width, self.extent.height
            )));
        }
        if !self.center.is_finite() {
            return Err(LayoutError::InvalidLayout("center must be finite".to_string()));
        }
        Ok(())
    }

    /// Position of the cell at (row, column), both 0-indexed
    pub fn cell_position(&self, row: usize, column: usize) -> Position {
        let spacing_x = self.extent.width / self.columns as f64;
        let spacing_y = self.extent.height / self.rows as f64;
        Position::new(
            self.center.x - self.extent.width / 2.0 + spacing_x * (column as f64 + 0.5),
            self.center.y + self.extent.height / 2.0 - spacing_y * (row as f64 + 0.5),
        )
    }

    fn positions(&self) -> Vec<Position> {
        let mut out = Vec::with_capacity(self.rows * self.columns);
        for row in 0..self.rows {
            for column in 0..self.columns {
                out.push(self.cell_position(row, column));
            }
        }
        out
    }
}

/// Free layout descriptor: explicit positions in creation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSpec {
    pub positions: Vec<Position>,
    /// Defaults to the padded bounding box of `positions`
    pub extent: Option<Extent>,
    /// Defaults to the bounding box midpoint
    pub center: Option<Position>,
    pub edge_wrap: bool,
}

impl FreeSpec {
    pub fn new(positions: Vec<Position>, edge_wrap: bool) -> Self {
        Self {
            positions,
            extent: None,
            center: None,
            edge_wrap,
        }
    }

    pub fn with_extent(mut self, extent: impl Into<Extent>) -> Self {
        self.extent = Some(extent.into());
        self
    }

    pub fn with_center(mut self, center: impl Into<Position>) -> Self {
        self.center = Some(center.into());
        self
    }

    fn resolve_bounds(&self) -> LayoutResult<(Extent, Position)> {
        if self.positions.is_empty() {
            return Err(LayoutError::InvalidLayout(
                "free layout needs at least one position".to_string(),
            ));
        }
        if let Some(bad) = self.positions.iter().find(|p| !p.is_finite()) {
            return Err(LayoutError::InvalidLayout(format!(
                "position ({}, {}) is not finite",
                bad.x, bad.y
            )));
        }

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.positions {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let center = self
            .center
            .unwrap_or_else(|| Position::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0));

        let extent = match self.extent {
            Some(extent) => extent,
            None => {
                let span = |lo: f64, hi: f64, c: f64| {
                    let reach = 2.0 * (c - lo).abs().max((hi - c).abs());
                    if reach > 0.0 {
                        reach * FREE_EXTENT_PADDING
                    } else {
                        1.0
                    }
                };
                Extent::new(span(min_x, max_x, center.x), span(min_y, max_y, center.y))
            }
        };

        if !extent.is_valid() {
            return Err(LayoutError::InvalidLayout(format!(
                "extent must be finite and positive, got [{}, {}]",
                extent.width, extent.height
            )));
        }
        Ok((extent, center))
    }
}

/// Position descriptor accepted by layer creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Positions {
    Grid(GridSpec),
    Free(FreeSpec),
}

impl From<GridSpec> for Positions {
    fn from(spec: GridSpec) -> Self {
        Positions::Grid(spec)
    }
}

impl From<FreeSpec> for Positions {
    fn from(spec: FreeSpec) -> Self {
        Positions::Free(spec)
    }
}

impl Positions {
    /// Validate and expand into geometry plus ordered node positions
    pub fn materialize(&self) -> LayoutResult<(LayerGeometry, Vec<Position>)> {
        match self {
            Positions::Grid(spec) => {
                spec.validate()?;
                let geometry = LayerGeometry {
                    extent: spec.extent,
                    center: spec.center,
                    edge_wrap: spec.edge_wrap,
                    shape: LayerShape::Grid {
                        rows: spec.rows,
                        columns: spec.columns,
                    },
                };
                Ok((geometry, spec.positions()))
            }
            Positions::Free(spec) => {
                let (extent, center) = spec.resolve_bounds()?;
                let geometry = LayerGeometry {
                    extent,
                    center,
                    edge_wrap: spec.edge_wrap,
                    shape: LayerShape::Free,
                };
                if let Some(outside) = spec.positions.iter().find(|p| !geometry.contains(**p)) {
                    return Err(LayoutError::InvalidLayout(format!(
                        "position ({}, {}) lies outside the layer extent",
                        outside.x, outside.y
                    )));
                }
                Ok((geometry, spec.positions.clone()))
            }
        }
    }
}

/// Arrangement kind of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerShape {
    Grid { rows: usize, columns: usize },
    Free,
}

/// Extent and boundary metadata of a layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerGeometry {
    pub extent: Extent,
    pub center: Position,
    pub edge_wrap: bool,
    pub shape: LayerShape,
}

impl LayerGeometry {
    /// Lower-left corner of the layer
    pub fn lower_left(&self) -> Position {
        Position::new(
            self.center.x - self.extent.width / 2.0,
            self.center.y - self.extent.height / 2.0,
        )
    }

    /// Whether `p` lies in the half-open box `[center - extent/2, center + extent/2)`
    pub fn contains(&self, p: Position) -> bool {
        let ll = self.lower_left();
        p.x >= ll.x
            && p.x < ll.x + self.extent.width
            && p.y >= ll.y
            && p.y < ll.y + self.extent.height
    }

    /// Displacement from `from` to `to` under this layer's boundary policy
    pub fn displacement(&self, from: Position, to: Position) -> Position {
        displacement(from, to, self.extent, self.edge_wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_3x3_positions() {
        let (geometry, positions) = Positions::from(GridSpec::new(3, 3, [2.0, 2.0], true))
            .materialize()
            .unwrap();
        assert_eq!(positions.len(), 9);
        assert_eq!(geometry.shape, LayerShape::Grid { rows: 3, columns: 3 });
        for p in &positions {
            assert!(p.x >= -1.0 && p.x < 1.0);
            assert!(p.y >= -1.0 && p.y < 1.0);
        }
        // Middle cell sits on the origin; row 0 is topmost
        assert!(positions[4].norm() < 1e-12);
        assert!(positions[0].y > positions[3].y);
        assert!(positions[0].x < positions[1].x);
    }

    #[test]
    fn test_grid_1x2_positions() {
        let spec = GridSpec::new(1, 2, [2.0, 2.0], true);
        assert_eq!(spec.cell_position(0, 0), Position::new(-0.5, 0.0));
        assert_eq!(spec.cell_position(0, 1), Position::new(0.5, 0.0));
    }

    #[test]
    fn test_grid_with_center() {
        let spec = GridSpec::new(1, 1, [2.0, 2.0], false).with_center([3.0, -1.0]);
        assert_eq!(spec.cell_position(0, 0), Position::new(3.0, -1.0));
    }

    #[test]
    fn test_grid_rejects_zero_dimensions() {
        for (rows, columns) in [(0, 3), (3, 0), (0, 0)] {
            let result = Positions::from(GridSpec::new(rows, columns, [2.0, 2.0], true)).materialize();
            assert!(matches!(result, Err(LayoutError::InvalidLayout(_))));
        }
    }

    #[test]
    fn test_grid_rejects_bad_extent() {
        let result = Positions::from(GridSpec::new(2, 2, [0.0, 2.0], true)).materialize();
        assert!(matches!(result, Err(LayoutError::InvalidLayout(_))));
    }

    #[test]
    fn test_free_layout_default_bounds() {
        let spec = FreeSpec::new(
            vec![Position::new(-1.0, 0.0), Position::new(1.0, 0.5)],
            false,
        );
        let (geometry, positions) = Positions::from(spec).materialize().unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(geometry.center, Position::new(0.0, 0.25));
        for p in positions {
            assert!(geometry.contains(p));
        }
    }

    #[test]
    fn test_free_layout_rejects_outside_positions() {
        let spec = FreeSpec::new(vec![Position::new(1.0, 0.0)], true).with_extent([2.0, 2.0]).with_center([0.0, 0.0]);
        let result = Positions::from(spec).materialize();
        assert!(matches!(result, Err(LayoutError::InvalidLayout(_))));
    }

    #[test]
    fn test_free_layout_rejects_empty() {
        let result = Positions::from(FreeSpec::new(Vec::new(), false)).materialize();
        assert!(matches!(result, Err(LayoutError::InvalidLayout(_))));
    }
}
