// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output for `plotfx_layout`.
//!
//! [`SvgSurface`] implements [`Surface`] by appending one SVG element per primitive, in
//! emission order, so later primitives paint over earlier ones. Text runs are styled by their
//! [`TextRole`] using an [`SvgStyle`]; this is the only place where roles turn into fonts.

use kurbo::{BezPath, Line};
use peniko::Brush;
use peniko::color::palette::css;
use plotfx_layout::{StrokeStyle, Surface, TextRole, TextRun};
use tracing::trace;

/// Document-level styling applied by [`SvgSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    /// Canvas background; `None` leaves the background transparent.
    pub background: Option<Brush>,
    /// Fill for all text.
    pub text_fill: Brush,
    /// CSS font family list.
    pub font_family: String,
    /// Font size for [`TextRole::Label`] text.
    pub label_font_size: f64,
    /// Font size for [`TextRole::Title`] text.
    pub title_font_size: f64,
    /// CSS font weight for titles.
    pub title_font_weight: u16,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: Some(Brush::Solid(css::WHITE)),
            text_fill: Brush::Solid(css::BLACK),
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            label_font_size: 12.0,
            title_font_size: 14.0,
            title_font_weight: 700,
        }
    }
}

impl SvgStyle {
    fn font_for(&self, role: TextRole) -> (f64, Option<u16>) {
        match role {
            TextRole::Title => (self.title_font_size, Some(self.title_font_weight)),
            TextRole::Label => (self.label_font_size, None),
        }
    }
}

/// A [`Surface`] that renders into an SVG document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    style: SvgStyle,
    body: String,
    elements: usize,
}

impl SvgSurface {
    /// Creates an empty surface of the given size.
    pub fn new(width: f64, height: f64, style: SvgStyle) -> Self {
        Self {
            width,
            height,
            style,
            body: String::new(),
            elements: 0,
        }
    }

    /// Surface width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of primitives drawn so far.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Serialises the surface into a standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height,
        ));
        out.push('\n');
        if let Some(background) = &self.style.background {
            out.push_str(&format!(
                r#"<rect x="0" y="0" width="{}" height="{}""#,
                self.width, self.height
            ));
            write_paint_attr(&mut out, "fill", background);
            out.push_str("/>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        trace!(?line, "svg stroke");
        let mut path = BezPath::new();
        path.move_to(line.p0);
        path.line_to(line.p1);
        self.body
            .push_str(&format!(r#"<path d="{}" fill="none""#, path.to_svg()));
        write_paint_attr(&mut self.body, "stroke", &style.brush);
        self.body
            .push_str(&format!(r#" stroke-width="{}""#, style.stroke_width));
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        trace!(text = run.text, role = run.role.as_str(), "svg text");
        let (font_size, weight) = self.style.font_for(run.role);
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" class="{}" font-family=""#,
            run.pos.x,
            run.pos.y,
            run.role.as_str(),
        ));
        push_escaped(&mut self.body, &self.style.font_family);
        self.body.push_str(&format!(r#"" font-size="{font_size}""#));
        if let Some(weight) = weight {
            self.body.push_str(&format!(r#" font-weight="{weight}""#));
        }
        self.body.push_str(&format!(
            r#" text-anchor="{}" dominant-baseline="{}""#,
            run.anchor.as_str(),
            run.baseline.as_str(),
        ));
        if run.angle != 0.0 {
            self.body.push_str(&format!(
                r#" transform="rotate({} {} {})""#,
                run.angle, run.pos.x, run.pos.y
            ));
        }
        write_paint_attr(&mut self.body, "fill", &self.style.text_fill);
        self.body.push('>');
        push_escaped(&mut self.body, run.text);
        self.body.push_str("</text>\n");
        self.elements += 1;
    }
}

/// Appends ` name="#rrggbb"`, plus ` name-opacity` when the color is not opaque.
///
/// Only solid brushes have a flat SVG paint; anything else is written as `none`.
fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let Brush::Solid(color) = brush else {
        out.push_str(&format!(r#" {name}="none""#));
        return;
    };
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != u8::MAX {
        let opacity = f64::from(rgba.a) / f64::from(u8::MAX);
        out.push_str(&format!(r#" {name}-opacity="{opacity}""#));
    }
}

/// Appends `text` with the XML special characters replaced by entities.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&apos;",
            _ => {
                out.push(c);
                continue;
            }
        };
        out.push_str(entity);
    }
}
