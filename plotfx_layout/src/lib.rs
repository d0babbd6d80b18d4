// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot layout engine for `PlotFX`.
//!
//! Given a canvas size and a set of axis and grid definitions, this crate works out how much
//! padding every canvas edge needs, derives the inner viewport, and then emits stroke and text
//! primitives against an abstract [`Surface`].
//!
//! Layout runs in two explicit passes:
//! - **Arrange**: accumulate per-edge padding from the axes (stacked in insertion order),
//!   enforce the corner floors, commit the padding to a [`Viewport`].
//! - **Render**: draw axes (titles, labels, ticks, baselines) and then grids inside the
//!   committed viewport.
//!
//! Parsing, font lookup, text shaping, color resolution and encoding are all out of scope;
//! positions arrive as already-resolved fractions and labels as plain strings.

#![no_std]

mod axis;
mod grid;
mod layout;
mod metrics;
mod style;
mod surface;
mod viewport;

pub use axis::{AxisDefinition, AxisLabel, AxisPosition};
pub use grid::{GridDefinition, GridPlacement};
pub use layout::{ArrangedLayout, AxisPlacement, PlotLayout};
pub use metrics::LayoutMetrics;
pub use style::{GridStyle, LayoutStyle, StrokeStyle};
pub use surface::{
    Primitive, RecordingSurface, Surface, TextAnchor, TextBaseline, TextRole, TextRun,
};
pub use viewport::{Padding, Viewport};
