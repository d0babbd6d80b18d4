// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid definitions.

extern crate alloc;

use alloc::vec::Vec;

/// Gridline direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridPlacement {
    /// Full-width lines, one per tick, positioned like LEFT/RIGHT axis ticks.
    Horizontal,
    /// Full-height lines, one per tick, positioned like TOP/BOTTOM axis ticks.
    Vertical,
}

/// A set of gridlines spanning the inner viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct GridDefinition {
    placement: GridPlacement,
    ticks: Vec<f64>,
}

impl GridDefinition {
    /// Creates an empty grid.
    pub fn new(placement: GridPlacement) -> Self {
        Self {
            placement,
            ticks: Vec::new(),
        }
    }

    /// Line direction.
    pub fn placement(&self) -> GridPlacement {
        self.placement
    }

    /// Appends a gridline at `fraction`.
    pub fn add_tick(&mut self, fraction: f64) -> &mut Self {
        self.ticks.push(fraction);
        self
    }

    /// Appends several gridlines.
    pub fn add_ticks(&mut self, fractions: impl IntoIterator<Item = f64>) -> &mut Self {
        self.ticks.extend(fractions);
        self
    }

    /// Gridline fractions in insertion order.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}
