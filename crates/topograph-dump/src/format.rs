// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Numeric field formatting shared by both dump formats.

use std::fmt;

/// Real-valued dump field
///
/// Shortest round-trip decimal with a fractional part; negative zero is
/// written as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{:?}", value)
    }
}
