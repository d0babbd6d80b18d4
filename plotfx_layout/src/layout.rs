// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-pass plot layout.
//!
//! - **Arrange** ([`PlotLayout::arrange`]): walk the axes in insertion order, record where each
//!   one starts on its edge, accumulate per-edge padding, apply the corner floors and commit the
//!   padding to a fresh [`Viewport`].
//! - **Render** ([`ArrangedLayout::render_axes`], [`ArrangedLayout::render_grids`]): emit
//!   primitives using only the arranged placements and the committed viewport.
//!
//! Rendering never recomputes offsets, so what is drawn always matches what was reserved.
//! Axes on the same edge stack outward-in by insertion order: the first axis added sits
//! closest to the canvas edge.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Point};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    AxisDefinition, AxisPosition, GridDefinition, GridPlacement, LayoutMetrics, LayoutStyle,
    Padding, Surface, TextAnchor, TextBaseline, TextRole, TextRun, Viewport,
};

/// Rotation applied to LEFT and RIGHT axis titles.
const VERTICAL_TITLE_ANGLE: f64 = 270.0;

/// Owns the axes and grids of one plot and lays them out on a canvas.
#[derive(Clone, Debug)]
pub struct PlotLayout {
    width: f64,
    height: f64,
    metrics: LayoutMetrics,
    style: LayoutStyle,
    axes: Vec<AxisDefinition>,
    grids: Vec<GridDefinition>,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotLayout {
    /// Default canvas width.
    pub const DEFAULT_WIDTH: f64 = 800.0;
    /// Default canvas height.
    pub const DEFAULT_HEIGHT: f64 = 320.0;

    /// Creates an empty 800×320 layout with default metrics and style.
    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            metrics: LayoutMetrics::default(),
            style: LayoutStyle::default(),
            axes: Vec::new(),
            grids: Vec::new(),
        }
    }

    /// Sets the band metrics.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the stroke styles.
    pub fn with_style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    /// Band metrics.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Stroke styles.
    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// Sets the canvas size.
    ///
    /// Each dimension is only updated if it is strictly positive; anything else keeps the
    /// previous value.
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        if width > 0.0 {
            self.width = width;
        }
        if height > 0.0 {
            self.height = height;
        }
    }

    /// Canvas width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Adds an empty axis on `position` and returns it for the caller to populate.
    pub fn add_axis(&mut self, position: AxisPosition) -> &mut AxisDefinition {
        let index = self.axes.len();
        self.axes.push(AxisDefinition::new(position));
        &mut self.axes[index]
    }

    /// Adds an empty grid and returns it for the caller to populate.
    pub fn add_grid(&mut self, placement: GridPlacement) -> &mut GridDefinition {
        let index = self.grids.len();
        self.grids.push(GridDefinition::new(placement));
        &mut self.grids[index]
    }

    /// Axes in insertion order.
    pub fn axes(&self) -> &[AxisDefinition] {
        &self.axes
    }

    /// Grids in insertion order.
    pub fn grids(&self) -> &[GridDefinition] {
        &self.grids
    }

    /// Pass 1: reserve padding for every axis and commit it to a new viewport.
    ///
    /// # Panics
    ///
    /// Panics if the reserved padding does not fit in the canvas (see
    /// [`Viewport::set_padding`]).
    pub fn arrange(&self) -> ArrangedLayout<'_> {
        let mut viewport = Viewport::new(self.width, self.height);
        let mut padding = viewport.padding();
        let mut placements = EdgePlacements::default();

        for (index, axis) in self.axes.iter().enumerate() {
            let position = axis.position();
            let edge = padding_edge_mut(&mut padding, position);
            trace!(index, ?position, offset = *edge, "placing axis");
            placements.edge_mut(position).push(AxisPlacement {
                axis: index,
                offset: *edge,
            });
            *edge += axis.reserved_band(&self.metrics);
        }

        padding.top = padding.top.max(self.metrics.vertical_floor());
        padding.bottom = padding.bottom.max(self.metrics.vertical_floor());
        padding.left = padding.left.max(self.metrics.horizontal_floor());
        padding.right = padding.right.max(self.metrics.horizontal_floor());

        debug!(
            top = padding.top,
            right = padding.right,
            bottom = padding.bottom,
            left = padding.left,
            axes = self.axes.len(),
            "committing plot padding"
        );
        viewport.set_padding(padding);

        ArrangedLayout {
            layout: self,
            viewport,
            placements,
        }
    }

    /// Arranges the layout, then draws all axes followed by all grids.
    ///
    /// Each call starts from scratch; nothing is cached between calls.
    pub fn render(&self, surface: &mut impl Surface) -> Viewport {
        let arranged = self.arrange();
        arranged.render_axes(surface);
        arranged.render_grids(surface);
        arranged.viewport
    }
}

/// Where one axis begins on its edge, as reserved by [`PlotLayout::arrange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPlacement {
    /// Index into [`PlotLayout::axes`].
    pub axis: usize,
    /// Distance from the canvas edge at which this axis' band starts.
    pub offset: f64,
}

#[derive(Clone, Debug, Default)]
struct EdgePlacements {
    top: SmallVec<[AxisPlacement; 2]>,
    right: SmallVec<[AxisPlacement; 2]>,
    bottom: SmallVec<[AxisPlacement; 2]>,
    left: SmallVec<[AxisPlacement; 2]>,
}

impl EdgePlacements {
    fn edge(&self, position: AxisPosition) -> &[AxisPlacement] {
        match position {
            AxisPosition::Top => &self.top,
            AxisPosition::Right => &self.right,
            AxisPosition::Bottom => &self.bottom,
            AxisPosition::Left => &self.left,
        }
    }

    fn edge_mut(&mut self, position: AxisPosition) -> &mut SmallVec<[AxisPlacement; 2]> {
        match position {
            AxisPosition::Top => &mut self.top,
            AxisPosition::Right => &mut self.right,
            AxisPosition::Bottom => &mut self.bottom,
            AxisPosition::Left => &mut self.left,
        }
    }
}

fn padding_edge_mut(padding: &mut Padding, position: AxisPosition) -> &mut f64 {
    match position {
        AxisPosition::Top => &mut padding.top,
        AxisPosition::Right => &mut padding.right,
        AxisPosition::Bottom => &mut padding.bottom,
        AxisPosition::Left => &mut padding.left,
    }
}

/// The result of pass 1: a committed viewport plus per-edge axis placements.
///
/// Rendering methods only read this value, so they can be called in any order and any number
/// of times without affecting the layout.
#[derive(Clone, Debug)]
pub struct ArrangedLayout<'a> {
    layout: &'a PlotLayout,
    viewport: Viewport,
    placements: EdgePlacements,
}

impl ArrangedLayout<'_> {
    /// The viewport with its padding committed.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Placements on `position`, in insertion order (innermost band last).
    pub fn placements(&self, position: AxisPosition) -> &[AxisPlacement] {
        self.placements.edge(position)
    }

    /// X coordinate of a TOP/BOTTOM fraction.
    pub fn x_at(&self, fraction: f64) -> f64 {
        self.viewport.padding_left() + self.viewport.inner_width() * fraction
    }

    /// Y coordinate of a LEFT/RIGHT fraction; `0` maps to the bottom of the inner viewport.
    pub fn y_at(&self, fraction: f64) -> f64 {
        self.viewport.padding_top() + self.viewport.inner_height() * (1.0 - fraction)
    }

    /// Pass 2: draw every axis, edge by edge (top, right, bottom, left).
    pub fn render_axes(&self, surface: &mut impl Surface) {
        for position in [
            AxisPosition::Top,
            AxisPosition::Right,
            AxisPosition::Bottom,
            AxisPosition::Left,
        ] {
            for placement in self.placements(position) {
                let axis = &self.layout.axes[placement.axis];
                match position {
                    AxisPosition::Top => self.render_top(surface, axis, placement.offset),
                    AxisPosition::Right => self.render_right(surface, axis, placement.offset),
                    AxisPosition::Bottom => self.render_bottom(surface, axis, placement.offset),
                    AxisPosition::Left => self.render_left(surface, axis, placement.offset),
                }
            }
        }
    }

    /// Pass 2: draw every grid across the inner viewport.
    pub fn render_grids(&self, surface: &mut impl Surface) {
        let inner = self.viewport.inner_rect();
        let stroke = &self.layout.style.grid.stroke;
        for grid in &self.layout.grids {
            match grid.placement() {
                GridPlacement::Horizontal => {
                    for &tick in grid.ticks() {
                        let y = self.y_at(tick);
                        surface.stroke_line(Line::new((inner.x0, y), (inner.x1, y)), stroke);
                    }
                }
                GridPlacement::Vertical => {
                    for &tick in grid.ticks() {
                        let x = self.x_at(tick);
                        surface.stroke_line(Line::new((x, inner.y0), (x, inner.y1)), stroke);
                    }
                }
            }
        }
    }

    fn render_top(&self, surface: &mut impl Surface, axis: &AxisDefinition, mut top: f64) {
        let m = &self.layout.metrics;
        let stroke = &self.layout.style.axis;
        let inner = self.viewport.inner_rect();

        top += m.axis_padding;

        if let Some(title) = axis.title() {
            surface.draw_text(&TextRun::new(
                title,
                Point::new(inner.center().x, top),
                TextAnchor::Middle,
                TextBaseline::Hanging,
                TextRole::Title,
            ));
            top += m.title_length;
        }

        if axis.has_labels() {
            top += m.label_height;
            for label in axis.labels() {
                surface.draw_text(&TextRun::new(
                    &label.text,
                    Point::new(self.x_at(label.fraction), top - m.label_height * 0.5),
                    TextAnchor::Middle,
                    TextBaseline::Middle,
                    TextRole::Label,
                ));
            }
        }

        for &tick in axis.ticks() {
            let x = self.x_at(tick);
            surface.stroke_line(Line::new((x, top), (x, top + m.tick_length)), stroke);
        }

        surface.stroke_line(Line::new((inner.x0, top), (inner.x1, top)), stroke);
    }

    fn render_right(&self, surface: &mut impl Surface, axis: &AxisDefinition, mut right: f64) {
        let m = &self.layout.metrics;
        let stroke = &self.layout.style.axis;
        let inner = self.viewport.inner_rect();
        let width = self.viewport.outer_width();

        right += m.axis_padding;

        // The rotated title hangs towards the canvas edge, so it is anchored on the inner
        // side of its band.
        if let Some(title) = axis.title() {
            right += m.title_length;
            surface.draw_text(
                &TextRun::new(
                    title,
                    Point::new(width - right, inner.center().y),
                    TextAnchor::Middle,
                    TextBaseline::Hanging,
                    TextRole::Title,
                )
                .with_angle(VERTICAL_TITLE_ANGLE),
            );
        }

        if axis.has_labels() {
            right += m.label_width;
            for label in axis.labels() {
                surface.draw_text(&TextRun::new(
                    &label.text,
                    Point::new(
                        width - right + m.tick_length * 2.0,
                        self.y_at(label.fraction),
                    ),
                    TextAnchor::Start,
                    TextBaseline::Middle,
                    TextRole::Label,
                ));
            }
        }

        let x = width - right;
        for &tick in axis.ticks() {
            let y = self.y_at(tick);
            surface.stroke_line(Line::new((x, y), (x - m.tick_length, y)), stroke);
        }

        surface.stroke_line(Line::new((x, inner.y0), (x, inner.y1)), stroke);
    }

    fn render_bottom(&self, surface: &mut impl Surface, axis: &AxisDefinition, mut bottom: f64) {
        let m = &self.layout.metrics;
        let stroke = &self.layout.style.axis;
        let inner = self.viewport.inner_rect();
        let height = self.viewport.outer_height();

        bottom += m.axis_padding;

        if let Some(title) = axis.title() {
            surface.draw_text(&TextRun::new(
                title,
                Point::new(inner.center().x, height - bottom),
                TextAnchor::Middle,
                TextBaseline::Alphabetic,
                TextRole::Title,
            ));
            bottom += m.title_length;
        }

        if axis.has_labels() {
            bottom += m.label_height;
            for label in axis.labels() {
                surface.draw_text(&TextRun::new(
                    &label.text,
                    Point::new(
                        self.x_at(label.fraction),
                        height - bottom + m.label_height * 0.5,
                    ),
                    TextAnchor::Middle,
                    TextBaseline::Middle,
                    TextRole::Label,
                ));
            }
        }

        let y = height - bottom;
        for &tick in axis.ticks() {
            let x = self.x_at(tick);
            surface.stroke_line(Line::new((x, y), (x, y - m.tick_length)), stroke);
        }

        surface.stroke_line(Line::new((inner.x0, y), (inner.x1, y)), stroke);
    }

    fn render_left(&self, surface: &mut impl Surface, axis: &AxisDefinition, mut left: f64) {
        let m = &self.layout.metrics;
        let stroke = &self.layout.style.axis;
        let inner = self.viewport.inner_rect();

        left += m.axis_padding;

        if let Some(title) = axis.title() {
            surface.draw_text(
                &TextRun::new(
                    title,
                    Point::new(left, inner.center().y),
                    TextAnchor::Middle,
                    TextBaseline::Hanging,
                    TextRole::Title,
                )
                .with_angle(VERTICAL_TITLE_ANGLE),
            );
            left += m.title_length;
        }

        if axis.has_labels() {
            left += m.label_width;
            for label in axis.labels() {
                surface.draw_text(&TextRun::new(
                    &label.text,
                    Point::new(left - m.tick_length * 2.0, self.y_at(label.fraction)),
                    TextAnchor::End,
                    TextBaseline::Middle,
                    TextRole::Label,
                ));
            }
        }

        for &tick in axis.ticks() {
            let y = self.y_at(tick);
            surface.stroke_line(Line::new((left, y), (left + m.tick_length, y)), stroke);
        }

        surface.stroke_line(Line::new((left, inner.y0), (left, inner.y1)), stroke);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{Primitive, RecordingSurface};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_line(actual: Line, expected: Line) {
        assert_close(actual.p0.x, expected.p0.x);
        assert_close(actual.p0.y, expected.p0.y);
        assert_close(actual.p1.x, expected.p1.x);
        assert_close(actual.p1.y, expected.p1.y);
    }

    fn assert_point(actual: Point, expected: (f64, f64)) {
        assert_close(actual.x, expected.0);
        assert_close(actual.y, expected.1);
    }

    fn text_at(
        surface: &RecordingSurface,
        index: usize,
    ) -> (&str, Point, TextAnchor, TextBaseline, f64) {
        match &surface.primitives()[index] {
            Primitive::Text {
                text,
                pos,
                anchor,
                baseline,
                angle,
                ..
            } => (text.as_str(), *pos, *anchor, *baseline, *angle),
            Primitive::Line { .. } => panic!("primitive {index} is a line"),
        }
    }

    fn line_at(surface: &RecordingSurface, index: usize) -> Line {
        match &surface.primitives()[index] {
            Primitive::Line { line, .. } => *line,
            Primitive::Text { text, .. } => panic!("primitive {index} is text {text:?}"),
        }
    }

    fn record(layout: &PlotLayout) -> (Viewport, RecordingSurface) {
        let mut surface = RecordingSurface::new();
        let viewport = layout.render(&mut surface);
        (viewport, surface)
    }

    #[test]
    fn empty_layout_draws_nothing_and_applies_floors() {
        let layout = PlotLayout::new();
        let m = *layout.metrics();
        let (vp, surface) = record(&layout);

        assert!(surface.primitives().is_empty());
        assert_close(vp.padding_top(), m.label_height * 0.5);
        assert_close(vp.padding_bottom(), m.label_height * 0.5);
        assert_close(vp.padding_left(), m.label_width * 0.5);
        assert_close(vp.padding_right(), m.label_width * 0.5);
        assert_close(vp.outer_width(), 800.0);
        assert_close(vp.outer_height(), 320.0);
    }

    #[test]
    fn bottom_axis_with_title_labels_and_ticks() {
        let mut layout = PlotLayout::new();
        layout
            .add_axis(AxisPosition::Bottom)
            .set_title("X")
            .add_label(0.0, "0")
            .add_label(1.0, "100")
            .add_ticks([0.0, 0.5, 1.0]);
        let m = *layout.metrics();
        let (vp, surface) = record(&layout);

        let bottom = m.axis_padding + m.label_height + m.title_length;
        assert_close(vp.padding_bottom(), bottom);

        let pl = vp.padding_left();
        let iw = vp.inner_width();
        let y = 320.0 - bottom;

        let lines: Vec<Line> = surface.lines().collect();
        assert_eq!(lines.len(), 4, "three ticks plus the baseline");
        assert_line(lines[0], Line::new((pl, y), (pl, y - m.tick_length)));
        assert_line(
            lines[1],
            Line::new((pl + iw * 0.5, y), (pl + iw * 0.5, y - m.tick_length)),
        );
        assert_line(lines[2], Line::new((pl + iw, y), (pl + iw, y - m.tick_length)));
        assert_line(lines[3], Line::new((pl, y), (pl + iw, y)));

        let texts: Vec<(&str, Point)> = surface.texts().collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].0, "X");
        assert_close(texts[0].1.x, pl + iw * 0.5);
        assert_close(texts[0].1.y, 320.0 - m.axis_padding);
        let (_, _, anchor, baseline, angle) = text_at(&surface, 0);
        assert_eq!(anchor, TextAnchor::Middle);
        assert_eq!(baseline, TextBaseline::Alphabetic);
        assert_close(angle, 0.0);
        assert_eq!(texts[2].0, "100");
        assert_close(texts[2].1.x, pl + iw);
        assert_close(texts[2].1.y, y + m.label_height * 0.5);
    }

    #[test]
    fn top_axis_geometry() {
        let mut layout = PlotLayout::new();
        layout
            .add_axis(AxisPosition::Top)
            .set_title("T")
            .add_label(0.5, "t")
            .add_tick(0.5);
        let (vp, surface) = record(&layout);

        // 20 title + 25 labels; left and right fall back to the floors.
        assert_close(vp.padding_top(), 45.0);
        assert_close(vp.padding_left(), 25.0);
        assert_eq!(surface.primitives().len(), 4);

        let (text, pos, anchor, baseline, angle) = text_at(&surface, 0);
        assert_eq!(text, "T");
        assert_point(pos, (400.0, 0.0));
        assert_eq!((anchor, baseline), (TextAnchor::Middle, TextBaseline::Hanging));
        assert_close(angle, 0.0);

        let (text, pos, anchor, baseline, _) = text_at(&surface, 1);
        assert_eq!(text, "t");
        assert_point(pos, (400.0, 32.5));
        assert_eq!((anchor, baseline), (TextAnchor::Middle, TextBaseline::Middle));

        // Ticks hang down into the plot area from the baseline.
        assert_line(line_at(&surface, 2), Line::new((400.0, 45.0), (400.0, 50.0)));
        assert_line(line_at(&surface, 3), Line::new((25.0, 45.0), (775.0, 45.0)));
    }

    #[test]
    fn left_axis_geometry() {
        let mut layout = PlotLayout::new();
        layout
            .add_axis(AxisPosition::Left)
            .set_title("L")
            .add_label(0.25, "l")
            .add_tick(0.25);
        let (vp, surface) = record(&layout);

        // 20 title + 50 labels; top and bottom fall back to the floors.
        assert_close(vp.padding_left(), 70.0);
        assert_close(vp.padding_top(), 12.5);
        assert_close(vp.inner_height(), 295.0);
        assert_eq!(surface.primitives().len(), 4);

        let (text, pos, anchor, baseline, angle) = text_at(&surface, 0);
        assert_eq!(text, "L");
        assert_point(pos, (0.0, 160.0));
        assert_eq!((anchor, baseline), (TextAnchor::Middle, TextBaseline::Hanging));
        assert_close(angle, 270.0);

        let (text, pos, anchor, baseline, angle) = text_at(&surface, 1);
        assert_eq!(text, "l");
        assert_point(pos, (60.0, 233.75));
        assert_eq!((anchor, baseline), (TextAnchor::End, TextBaseline::Middle));
        assert_close(angle, 0.0);

        // Ticks point right, into the plot area.
        assert_line(line_at(&surface, 2), Line::new((70.0, 233.75), (75.0, 233.75)));
        assert_line(line_at(&surface, 3), Line::new((70.0, 12.5), (70.0, 307.5)));
    }

    #[test]
    fn top_and_left_axes_share_the_inner_viewport() {
        let mut layout = PlotLayout::new();
        layout
            .add_axis(AxisPosition::Top)
            .set_title("T")
            .add_label(0.5, "t")
            .add_tick(0.5);
        layout
            .add_axis(AxisPosition::Left)
            .set_title("L")
            .add_label(0.25, "l")
            .add_tick(0.25);
        let (_, surface) = record(&layout);

        assert_point(text_at(&surface, 0).1, (422.5, 0.0));
        assert_point(text_at(&surface, 1).1, (422.5, 32.5));
        assert_line(line_at(&surface, 2), Line::new((422.5, 45.0), (422.5, 50.0)));
        assert_line(line_at(&surface, 3), Line::new((70.0, 45.0), (775.0, 45.0)));
        assert_point(text_at(&surface, 4).1, (0.0, 176.25));
        assert_point(text_at(&surface, 5).1, (60.0, 241.875));
        assert_line(line_at(&surface, 6), Line::new((70.0, 241.875), (75.0, 241.875)));
        assert_line(line_at(&surface, 7), Line::new((70.0, 45.0), (70.0, 307.5)));
    }

    #[test]
    fn right_axis_inverts_label_fraction() {
        let mut layout = PlotLayout::new();
        layout.add_axis(AxisPosition::Right).add_label(0.25, "q");
        let m = *layout.metrics();
        let (vp, surface) = record(&layout);

        let (text, pos) = surface.texts().next().expect("label");
        assert_eq!(text, "q");
        assert_close(pos.y, vp.padding_top() + vp.inner_height() * 0.75);
        assert_close(pos.x, 800.0 - vp.padding_right() + m.tick_length * 2.0);

        let Primitive::Text {
            anchor, baseline, ..
        } = &surface.primitives()[0]
        else {
            panic!("expected the label first");
        };
        assert_eq!(*anchor, TextAnchor::Start);
        assert_eq!(*baseline, TextBaseline::Middle);
    }

    #[test]
    fn stacked_axes_start_where_the_previous_band_ends() {
        let mut layout =
            PlotLayout::new().with_metrics(LayoutMetrics::default().with_axis_padding(3.0));
        layout
            .add_axis(AxisPosition::Top)
            .set_title("outer")
            .add_label(0.5, "a");
        layout.add_axis(AxisPosition::Top).add_label(0.5, "b");
        let m = *layout.metrics();

        let arranged = layout.arrange();
        let first_band = layout.axes()[0].reserved_band(&m);
        let second_band = layout.axes()[1].reserved_band(&m);
        let top = arranged.placements(AxisPosition::Top);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].axis, 0);
        assert_close(top[0].offset, 0.0);
        assert_eq!(top[1].axis, 1);
        assert_close(top[1].offset, top[0].offset + first_band);
        assert_close(arranged.viewport().padding_top(), first_band + second_band);

        // Each baseline sits at the inner edge of its own band.
        let mut surface = RecordingSurface::new();
        arranged.render_axes(&mut surface);
        let baselines: Vec<Line> = surface.lines().collect();
        assert_eq!(baselines.len(), 2);
        assert_close(baselines[0].p0.y, first_band);
        assert_close(baselines[1].p0.y, first_band + second_band);
    }

    #[test]
    fn bare_axis_reserves_gap_and_still_draws() {
        let metrics = LayoutMetrics::default().with_axis_padding(8.0);
        let mut layout = PlotLayout::new().with_metrics(metrics);
        layout.add_axis(AxisPosition::Left).add_ticks([0.0, 1.0]);
        let (vp, surface) = record(&layout);

        // The gap alone is below the floor.
        assert_close(vp.padding_left(), metrics.horizontal_floor());

        let lines: Vec<Line> = surface.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_line(
            lines[0],
            Line::new(
                (8.0, vp.padding_top() + vp.inner_height()),
                (8.0 + metrics.tick_length, vp.padding_top() + vp.inner_height()),
            ),
        );
        assert_line(
            lines[2],
            Line::new((8.0, vp.padding_top()), (8.0, vp.padding_top() + vp.inner_height())),
        );
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn floors_are_minimums_not_increments() {
        let metrics = LayoutMetrics::default().with_axis_padding(5.0);
        let mut layout = PlotLayout::new().with_metrics(metrics);
        layout.add_axis(AxisPosition::Top);
        layout.add_axis(AxisPosition::Bottom).add_label(0.0, "0");
        let arranged = layout.arrange();
        let vp = arranged.viewport();
        assert_close(vp.padding_top(), metrics.vertical_floor());
        assert_close(vp.padding_bottom(), 5.0 + metrics.label_height);
    }

    #[test]
    fn padding_and_inner_size_add_up_to_canvas() {
        let mut layout = PlotLayout::new();
        layout.set_dimensions(640.0, 480.0);
        layout.add_axis(AxisPosition::Left).set_title("y").add_label(0.0, "0");
        layout.add_axis(AxisPosition::Left).add_label(1.0, "1");
        layout.add_axis(AxisPosition::Right).set_title("y2");
        layout.add_axis(AxisPosition::Top).add_tick(0.3);
        layout.add_axis(AxisPosition::Bottom).set_title("x").add_label(0.5, "m");

        let (vp, _) = record(&layout);
        assert_close(vp.padding_left() + vp.inner_width() + vp.padding_right(), 640.0);
        assert_close(vp.padding_top() + vp.inner_height() + vp.padding_bottom(), 480.0);
    }

    #[test]
    fn tick_mapping_is_monotonic() {
        let layout = PlotLayout::new();
        let arranged = layout.arrange();
        let fractions = [0.0, 0.1, 0.5, 0.9, 1.0];
        for pair in fractions.windows(2) {
            assert!(arranged.x_at(pair[0]) < arranged.x_at(pair[1]));
            assert!(arranged.y_at(pair[0]) > arranged.y_at(pair[1]));
        }
    }

    #[test]
    fn render_is_repeatable() {
        let mut layout = PlotLayout::new();
        layout
            .add_axis(AxisPosition::Left)
            .set_title("Y")
            .add_label(0.5, "half")
            .add_tick(0.5);
        layout.add_grid(GridPlacement::Horizontal).add_ticks([0.25, 0.75]);

        let (vp_a, a) = record(&layout);
        let (vp_b, b) = record(&layout);
        assert_eq!(vp_a, vp_b);
        assert_eq!(a.primitives(), b.primitives());
    }

    #[test]
    fn grids_span_the_inner_viewport_after_axes() {
        let mut layout = PlotLayout::new();
        layout.add_axis(AxisPosition::Bottom).add_tick(0.5);
        layout.add_grid(GridPlacement::Horizontal).add_tick(0.25);
        layout.add_grid(GridPlacement::Vertical).add_tick(0.5);
        let (vp, surface) = record(&layout);
        let inner = vp.inner_rect();

        let prims = surface.primitives();
        assert_eq!(prims.len(), 4);
        let Primitive::Line { style, .. } = &prims[2] else {
            panic!("expected a gridline");
        };
        assert_eq!(style, &layout.style().grid.stroke);

        let lines: Vec<Line> = surface.lines().collect();
        let y = vp.padding_top() + vp.inner_height() * 0.75;
        assert_line(lines[2], Line::new((inner.x0, y), (inner.x1, y)));
        let x = vp.padding_left() + vp.inner_width() * 0.5;
        assert_line(lines[3], Line::new((x, inner.y0), (x, inner.y1)));
    }

    #[test]
    fn vertical_titles_are_rotated() {
        let mut layout = PlotLayout::new();
        layout.add_axis(AxisPosition::Left).set_title("left");
        layout.add_axis(AxisPosition::Right).set_title("right");
        let m = *layout.metrics();
        let (vp, surface) = record(&layout);

        let titles: Vec<&Primitive> = surface
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Text { .. }))
            .collect();
        assert_eq!(titles.len(), 2);
        for title in &titles {
            let Primitive::Text {
                role, angle, pos, ..
            } = title
            else {
                unreachable!();
            };
            assert_eq!(*role, TextRole::Title);
            assert_close(*angle, 270.0);
            assert_close(pos.y, vp.padding_top() + vp.inner_height() * 0.5);
        }

        // Right is emitted before left; its title is anchored on the inner side of its band.
        let Primitive::Text { text, pos, .. } = titles[0] else {
            unreachable!();
        };
        assert_eq!(text, "right");
        assert_close(pos.x, 800.0 - (m.axis_padding + m.title_length));
    }

    #[test]
    fn non_positive_dimensions_are_ignored() {
        let mut layout = PlotLayout::new();
        layout.set_dimensions(0.0, -5.0);
        assert_close(layout.width(), 800.0);
        assert_close(layout.height(), 320.0);

        layout.set_dimensions(1024.0, 0.0);
        assert_close(layout.width(), 1024.0);
        assert_close(layout.height(), 320.0);
    }

    #[test]
    fn out_of_range_fractions_are_not_clamped() {
        let mut layout = PlotLayout::new();
        layout.add_axis(AxisPosition::Bottom).add_tick(1.5);
        let (vp, surface) = record(&layout);
        let tick = surface.lines().next().expect("tick");
        assert!(tick.p0.x > vp.outer_width() - vp.padding_right());
    }

    #[test]
    #[should_panic(expected = "exceeds viewport")]
    fn canvas_smaller_than_floors_panics() {
        let mut layout = PlotLayout::new();
        layout.set_dimensions(30.0, 30.0);
        let _ = layout.arrange();
    }
}
