// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas rectangle and the padding reserved around the inner plot area.

use kurbo::{Insets, Rect};

/// Space reserved on each canvas edge, in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Space above the inner viewport.
    pub top: f64,
    /// Space to the right of the inner viewport.
    pub right: f64,
    /// Space below the inner viewport.
    pub bottom: f64,
    /// Space to the left of the inner viewport.
    pub left: f64,
}

impl Padding {
    /// Creates a padding record from explicit per-edge values.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same padding on all four edges.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl From<Padding> for Insets {
    fn from(p: Padding) -> Self {
        Self::new(p.left, p.top, p.right, p.bottom)
    }
}

/// An outer canvas size plus the padding that carves out the inner viewport.
///
/// A viewport is transient: [`PlotLayout`](crate::PlotLayout) builds a fresh one for every
/// arrange pass and commits its padding exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    outer_width: f64,
    outer_height: f64,
    padding: Padding,
}

impl Viewport {
    /// Creates a viewport with zero padding.
    pub fn new(outer_width: f64, outer_height: f64) -> Self {
        Self {
            outer_width,
            outer_height,
            padding: Padding::default(),
        }
    }

    /// Replaces the padding.
    ///
    /// # Panics
    ///
    /// Panics if the padding would leave a negative inner width or height.
    pub fn set_padding(&mut self, padding: Padding) {
        assert!(
            padding.left + padding.right <= self.outer_width,
            "horizontal padding {} + {} exceeds viewport width {}",
            padding.left,
            padding.right,
            self.outer_width
        );
        assert!(
            padding.top + padding.bottom <= self.outer_height,
            "vertical padding {} + {} exceeds viewport height {}",
            padding.top,
            padding.bottom,
            self.outer_height
        );
        self.padding = padding;
    }

    /// The current padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Outer (canvas) width.
    pub fn outer_width(&self) -> f64 {
        self.outer_width
    }

    /// Outer (canvas) height.
    pub fn outer_height(&self) -> f64 {
        self.outer_height
    }

    /// Width left over after the left and right padding.
    pub fn inner_width(&self) -> f64 {
        self.outer_width - self.padding.left - self.padding.right
    }

    /// Height left over after the top and bottom padding.
    pub fn inner_height(&self) -> f64 {
        self.outer_height - self.padding.top - self.padding.bottom
    }

    /// Padding on the top edge.
    pub fn padding_top(&self) -> f64 {
        self.padding.top
    }

    /// Padding on the right edge.
    pub fn padding_right(&self) -> f64 {
        self.padding.right
    }

    /// Padding on the bottom edge.
    pub fn padding_bottom(&self) -> f64 {
        self.padding.bottom
    }

    /// Padding on the left edge.
    pub fn padding_left(&self) -> f64 {
        self.padding.left
    }

    /// The outer canvas rectangle, anchored at the origin.
    pub fn outer_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.outer_width, self.outer_height)
    }

    /// The inner viewport rectangle in canvas coordinates.
    pub fn inner_rect(&self) -> Rect {
        self.outer_rect() - Insets::from(self.padding)
    }
}
