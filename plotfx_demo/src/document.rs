// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document: global styling, the root plot and output dispatch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use peniko::{Brush, Color};
use plotfx_layout::{GridStyle, LayoutStyle, PlotLayout, StrokeStyle, Surface, Viewport};
use plotfx_svg::{SvgStyle, SvgSurface};
use thiserror::Error;
use tracing::{debug, info};

/// Converts a size in points to canvas units at `dpi`.
pub(crate) fn from_pt(pt: f64, dpi: f64) -> f64 {
    pt * dpi / 72.0
}

/// Errors reported by the document layer.
#[derive(Debug, Error)]
pub(crate) enum DocumentError {
    /// The requested output format is not supported.
    #[error("invalid output format: {0}")]
    InvalidFormat(String),
    /// No root plot was configured.
    #[error("document has no root - empty configuration?")]
    EmptyDocument,
    /// Writing the rendered output failed.
    #[error("unable to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// Short machine-readable code for the error class.
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "EARG",
            Self::EmptyDocument => "ERROR",
            Self::Io { .. } => "EIO",
        }
    }
}

/// Output encodings the document can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Svg,
}

impl FromStr for OutputFormat {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            other => Err(DocumentError::InvalidFormat(other.to_string())),
        }
    }
}

/// Document-level style plus the root plot.
#[derive(Clone, Debug)]
pub(crate) struct Document {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) background_color: Color,
    pub(crate) text_color: Color,
    pub(crate) border_color: Color,
    /// Resolution used to convert point sizes to canvas units.
    pub(crate) dpi: f64,
    /// Label font size in points.
    pub(crate) font_size_pt: f64,
    root: Option<PlotLayout>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 480.0,
            background_color: Color::from_rgb8(255, 255, 255),
            text_color: Color::from_rgb8(51, 51, 51),
            border_color: Color::from_rgb8(168, 168, 168),
            dpi: 96.0,
            font_size_pt: 11.0,
            root: None,
        }
    }
}

impl Document {
    /// Installs `layout` as the root plot, sized to the document and stroked with the
    /// document's border color.
    pub(crate) fn set_root(&mut self, layout: PlotLayout) {
        let mut layout = layout.with_style(self.layout_style());
        layout.set_dimensions(self.width, self.height);
        self.root = Some(layout);
    }

    /// Label font size in canvas units.
    pub(crate) fn font_size(&self) -> f64 {
        from_pt(self.font_size_pt, self.dpi)
    }

    pub(crate) fn layout_style(&self) -> LayoutStyle {
        LayoutStyle::default()
            .with_axis(StrokeStyle::solid(self.border_color, 1.0))
            .with_grid(GridStyle {
                stroke: StrokeStyle::solid(self.border_color.with_alpha(0.5), 1.0),
            })
    }

    pub(crate) fn svg_style(&self) -> SvgStyle {
        let font_size = self.font_size();
        SvgStyle {
            background: Some(Brush::Solid(self.background_color)),
            text_fill: Brush::Solid(self.text_color),
            label_font_size: font_size,
            title_font_size: font_size * 1.2,
            ..SvgStyle::default()
        }
    }

    /// Draws the root plot onto `surface`.
    pub(crate) fn render_to(&self, surface: &mut impl Surface) -> Result<Viewport, DocumentError> {
        let root = self.root.as_ref().ok_or(DocumentError::EmptyDocument)?;
        let viewport = root.render(surface);
        debug!(inner = ?viewport.inner_rect(), "rendered root plot");
        Ok(viewport)
    }

    /// Renders the document as SVG markup.
    pub(crate) fn render_svg(&self) -> Result<String, DocumentError> {
        let mut surface = SvgSurface::new(self.width, self.height, self.svg_style());
        self.render_to(&mut surface)?;
        Ok(surface.to_svg_string())
    }

    /// Renders the document in `format` and writes it to `path`.
    pub(crate) fn render(&self, format: &str, path: &Path) -> Result<(), DocumentError> {
        let bytes = match format.parse::<OutputFormat>()? {
            OutputFormat::Svg => self.render_svg()?,
        };
        info!(format, path = %path.display(), bytes = bytes.len(), "writing document");
        fs::write(path, bytes).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
