// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed band sizes used when reserving axis padding.
//!
//! Labels and titles are not measured; each present element reserves a constant band. This
//! keeps padding a pure function of which elements exist, so pass 1 never needs font metrics.

/// Band sizes for the axis padding computation, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Gap reserved before every axis, including axes with no labels or title.
    pub axis_padding: f64,
    /// Length of tick marks.
    ///
    /// LEFT/RIGHT labels are also pushed `2 * tick_length` away from their band edge.
    pub tick_length: f64,
    /// Label band thickness for TOP and BOTTOM axes.
    pub label_height: f64,
    /// Label band thickness for LEFT and RIGHT axes.
    pub label_width: f64,
    /// Title band thickness on every edge.
    pub title_length: f64,
}

impl LayoutMetrics {
    /// The default metrics.
    pub const DEFAULT: Self = Self {
        axis_padding: 0.0,
        tick_length: 5.0,
        label_height: 25.0,
        label_width: 50.0,
        title_length: 20.0,
    };

    /// Set the inter-axis gap.
    pub fn with_axis_padding(mut self, axis_padding: f64) -> Self {
        self.axis_padding = axis_padding;
        self
    }

    /// Set the tick length.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    /// Set the TOP/BOTTOM label band.
    pub fn with_label_height(mut self, label_height: f64) -> Self {
        self.label_height = label_height;
        self
    }

    /// Set the LEFT/RIGHT label band.
    pub fn with_label_width(mut self, label_width: f64) -> Self {
        self.label_width = label_width;
        self
    }

    /// Set the title band.
    pub fn with_title_length(mut self, title_length: f64) -> Self {
        self.title_length = title_length;
        self
    }

    /// Minimum padding for the top and bottom edges.
    ///
    /// Half a label band, so that labels centered on the first/last tick of a LEFT/RIGHT axis
    /// are not clipped by the canvas edge.
    pub fn vertical_floor(&self) -> f64 {
        self.label_height * 0.5
    }

    /// Minimum padding for the left and right edges.
    pub fn horizontal_floor(&self) -> f64 {
        self.label_width * 0.5
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}
