// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The abstract drawing surface the layout emits primitives into.
//!
//! Only two primitives exist: a stroked line and a run of unshaped text. Text placement is
//! symbolic (anchor + baseline + rotation) so that surfaces with real shaping can position the
//! glyphs themselves. Surfaces must apply primitives in the order they are issued.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::StrokeStyle;

/// Horizontal text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The text starts at the position.
    Start,
    /// The text is centered on the position.
    Middle,
    /// The text ends at the position.
    End,
}

impl TextAnchor {
    /// The SVG `text-anchor` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The top edge of the text sits on the position (`text-before-edge`).
    Hanging,
    /// The text is vertically centered on the position (`central`).
    Middle,
    /// The alphabetic baseline sits on the position (`no-change`).
    Alphabetic,
}

impl TextBaseline {
    /// The SVG `dominant-baseline` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hanging => "text-before-edge",
            Self::Middle => "central",
            Self::Alphabetic => "no-change",
        }
    }
}

/// What a piece of text is, so surfaces can pick a font size or weight for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// An axis title.
    Title,
    /// A tick label.
    Label,
}

impl TextRole {
    /// Role tag string (`"title"` or `"label"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Label => "label",
        }
    }
}

/// A text primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRun<'a> {
    /// Unshaped text.
    pub text: &'a str,
    /// Anchor position in canvas coordinates.
    pub pos: Point,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Style lookup tag.
    pub role: TextRole,
    /// Rotation around `pos`, in degrees.
    pub angle: f64,
}

impl<'a> TextRun<'a> {
    /// Creates an unrotated text run.
    pub fn new(
        text: &'a str,
        pos: Point,
        anchor: TextAnchor,
        baseline: TextBaseline,
        role: TextRole,
    ) -> Self {
        Self {
            text,
            pos,
            anchor,
            baseline,
            role,
            angle: 0.0,
        }
    }

    /// Sets the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// A sink for drawing primitives.
pub trait Surface {
    /// Strokes a straight line segment.
    fn stroke_line(&mut self, line: Line, style: &StrokeStyle);

    /// Draws a run of text.
    fn draw_text(&mut self, run: &TextRun<'_>);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        (**self).stroke_line(line, style);
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        (**self).draw_text(run);
    }
}

/// An owned copy of a primitive, as captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A stroked line.
    Line {
        /// The segment.
        line: Line,
        /// The stroke it was issued with.
        style: StrokeStyle,
    },
    /// A text run.
    Text {
        /// Text content.
        text: String,
        /// Anchor position.
        pos: Point,
        /// Horizontal alignment.
        anchor: TextAnchor,
        /// Vertical alignment.
        baseline: TextBaseline,
        /// Style lookup tag.
        role: TextRole,
        /// Rotation in degrees.
        angle: f64,
    },
}

/// A surface that records primitives in emission order.
///
/// Useful for tests and for replaying a layout onto several backends.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Consumes the recording.
    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    /// Recorded lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line { line, .. } => Some(*line),
            Primitive::Text { .. } => None,
        })
    }

    /// Recorded texts as `(text, position)`, in order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, pos, .. } => Some((text.as_str(), *pos)),
            Primitive::Line { .. } => None,
        })
    }

    /// Replays the recording onto another surface.
    pub fn replay(&self, target: &mut impl Surface) {
        for p in &self.primitives {
            match p {
                Primitive::Line { line, style } => target.stroke_line(*line, style),
                Primitive::Text {
                    text,
                    pos,
                    anchor,
                    baseline,
                    role,
                    angle,
                } => target.draw_text(
                    &TextRun::new(text, *pos, *anchor, *baseline, *role).with_angle(*angle),
                ),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        self.primitives.push(Primitive::Line {
            line,
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        self.primitives.push(Primitive::Text {
            text: run.text.into(),
            pos: run.pos,
            anchor: run.anchor,
            baseline: run.baseline,
            role: run.role,
            angle: run.angle,
        });
    }
}
