// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis definitions.
//!
//! An axis is pure data: an edge, an optional title, labels and ticks. Positions along the axis
//! are *fractions* of the inner viewport span, already resolved by whatever scale produced
//! them. The layout engine neither validates nor clamps them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::LayoutMetrics;

/// The canvas edge an axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    /// A horizontal axis above the inner viewport.
    Top,
    /// A vertical axis right of the inner viewport.
    Right,
    /// A horizontal axis below the inner viewport.
    Bottom,
    /// A vertical axis left of the inner viewport.
    Left,
}

impl AxisPosition {
    /// Whether the axis runs horizontally (TOP or BOTTOM).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Thickness of the label band on this edge.
    pub fn label_band(self, metrics: &LayoutMetrics) -> f64 {
        if self.is_horizontal() {
            metrics.label_height
        } else {
            metrics.label_width
        }
    }
}

/// A labelled position along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// Position along the inner span, `0` = start and `1` = end.
    pub fraction: f64,
    /// Label text, drawn unshaped.
    pub text: String,
}

/// One axis: edge placement, optional title, labels and tick positions.
///
/// Labels and ticks are independent lists; a tick does not need a label at the same fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisDefinition {
    position: AxisPosition,
    title: Option<String>,
    labels: Vec<AxisLabel>,
    ticks: Vec<f64>,
}

impl AxisDefinition {
    /// Creates an empty axis on the given edge.
    pub fn new(position: AxisPosition) -> Self {
        Self {
            position,
            title: None,
            labels: Vec::new(),
            ticks: Vec::new(),
        }
    }

    /// The edge this axis is attached to.
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Clears the title.
    pub fn clear_title(&mut self) -> &mut Self {
        self.title = None;
        self
    }

    /// The title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether a title is set.
    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    /// Appends a label at `fraction`.
    pub fn add_label(&mut self, fraction: f64, text: impl Into<String>) -> &mut Self {
        self.labels.push(AxisLabel {
            fraction,
            text: text.into(),
        });
        self
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    /// Whether at least one label is present.
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Appends a tick at `fraction`.
    pub fn add_tick(&mut self, fraction: f64) -> &mut Self {
        self.ticks.push(fraction);
        self
    }

    /// Appends several ticks.
    pub fn add_ticks(&mut self, fractions: impl IntoIterator<Item = f64>) -> &mut Self {
        self.ticks.extend(fractions);
        self
    }

    /// Tick fractions in insertion order.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Space this axis reserves on its edge: the gap, plus a label band and a title band
    /// when those elements are present.
    pub fn reserved_band(&self, metrics: &LayoutMetrics) -> f64 {
        let mut band = metrics.axis_padding;
        if self.has_labels() {
            band += self.position.label_band(metrics);
        }
        if self.has_title() {
            band += metrics.title_length;
        }
        band
    }
}
