// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved stroke styles handed through to the surface.
//!
//! The layout engine never resolves colors: callers (usually the document layer) build these
//! values up front and the layout passes them along with every stroke.

use peniko::Brush;
use peniko::color::palette::css;

/// A paint + width pair for stroked lines (baselines, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in canvas units.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: 1.0,
            },
        }
    }
}

/// Strokes used by [`PlotLayout`](crate::PlotLayout) for axes and grids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutStyle {
    /// Axis baselines and tick marks.
    pub axis: StrokeStyle,
    /// Gridlines.
    pub grid: GridStyle,
}

impl LayoutStyle {
    /// Sets the axis stroke.
    pub fn with_axis(mut self, axis: StrokeStyle) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the grid style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }
}
