// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Coordinate system and displacement calculator.

Displacement on a periodic layer is the shortest signed difference around the
torus, normalized per axis into `[-extent/2, extent/2)`.
*/

use serde::{Deserialize, Serialize};

/// 2-D position (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm, treating the position as a vector
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Position::new(value[0], value[1])
    }
}

impl From<(f64, f64)> for Position {
    fn from(value: (f64, f64)) -> Self {
        Position::new(value.0, value.1)
    }
}

/// Spatial extent of a layer (width along x, height along y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both components finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl From<[f64; 2]> for Extent {
    fn from(value: [f64; 2]) -> Self {
        Extent::new(value[0], value[1])
    }
}

/// Fold a raw axis difference into `[-span/2, span/2)`
///
/// Values already inside the interval are returned untouched so that exact
/// differences keep their exact representation.
pub fn wrap_axis(delta: f64, span: f64) -> f64 {
    let half = span / 2.0;
    if (-half..half).contains(&delta) {
        return delta;
    }
    if delta >= half && delta < half + span {
        return delta - span;
    }
    if delta < -half && delta >= -half - span {
        return delta + span;
    }

    // Far outside (layers of differing extents): reduce modulo span
    let folded = (delta + half).rem_euclid(span) - half;
    if folded >= half {
        folded - span
    } else {
        folded
    }
}

/// Signed displacement from `from` to `to`
///
/// With `edge_wrap` each axis is folded independently by [`wrap_axis`];
/// otherwise this is the plain Euclidean difference.
pub fn displacement(from: Position, to: Position, extent: Extent, edge_wrap: bool) -> Position {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if !edge_wrap {
        return Position::new(dx, dy);
    }
    Position::new(wrap_axis(dx, extent.width), wrap_axis(dy, extent.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_open_boundary_is_plain_difference() {
        let d = displacement(
            Position::new(-0.5, 0.0),
            Position::new(0.5, 0.0),
            Extent::new(2.0, 2.0),
            false,
        );
        assert_eq!(d, Position::new(1.0, 0.0));
    }

    #[test]
    fn test_wrap_at_half_extent_goes_negative() {
        // +extent/2 is outside the half-open interval
        let d = displacement(
            Position::new(-0.5, 0.0),
            Position::new(0.5, 0.0),
            Extent::new(2.0, 2.0),
            true,
        );
        assert_eq!(d, Position::new(-1.0, 0.0));

        let back = displacement(
            Position::new(0.5, 0.0),
            Position::new(-0.5, 0.0),
            Extent::new(2.0, 2.0),
            true,
        );
        assert_eq!(back, Position::new(-1.0, 0.0));
    }

    #[test]
    fn test_coincident_positions() {
        let p = Position::new(0.25, -0.75);
        for wrap in [true, false] {
            assert_eq!(displacement(p, p, Extent::new(2.0, 2.0), wrap), Position::ORIGIN);
        }
    }

    #[test]
    fn test_wrap_keeps_in_range_values_exact() {
        assert_eq!(wrap_axis(0.3, 2.0), 0.3);
        assert_eq!(wrap_axis(-1.0, 2.0), -1.0);
    }

    #[test]
    fn test_wrap_far_outside() {
        assert_eq!(wrap_axis(5.0, 2.0), -1.0);
        assert_eq!(wrap_axis(-4.5, 2.0), -0.5);
    }

    #[test]
    fn test_extent_validation() {
        assert!(Extent::new(2.0, 2.0).is_valid());
        assert!(!Extent::new(0.0, 2.0).is_valid());
        assert!(!Extent::new(2.0, f64::NAN).is_valid());
    }

    proptest! {
        #[test]
        fn prop_wrapped_displacement_bounded(
            ax in -10.0f64..10.0, ay in -10.0f64..10.0,
            bx in -10.0f64..10.0, by in -10.0f64..10.0,
            w in 0.1f64..20.0, h in 0.1f64..20.0,
        ) {
            let d = displacement(Position::new(ax, ay), Position::new(bx, by), Extent::new(w, h), true);
            prop_assert!(d.x >= -w / 2.0 && d.x < w / 2.0);
            prop_assert!(d.y >= -h / 2.0 && d.y < h / 2.0);
        }
    }
}
