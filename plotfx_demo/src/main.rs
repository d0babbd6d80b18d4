// Copyright 2025 the PlotFX Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample plot with axes on all four edges.

mod document;

use std::path::PathBuf;

use plotfx_layout::{AxisPosition, GridPlacement, PlotLayout};

use crate::document::Document;

fn sample_plot() -> PlotLayout {
    let mut layout = PlotLayout::new();
    let steps = [0.0, 0.25, 0.5, 0.75, 1.0];

    let bottom = layout.add_axis(AxisPosition::Bottom);
    bottom.set_title("time (s)").add_ticks(steps);
    for (i, f) in steps.iter().enumerate() {
        bottom.add_label(*f, (i * 15).to_string());
    }

    let left = layout.add_axis(AxisPosition::Left);
    left.set_title("latency (ms)").add_ticks(steps);
    for f in steps {
        left.add_label(f, format!("{:.0}", f * 400.0));
    }

    layout
        .add_axis(AxisPosition::Right)
        .add_label(0.0, "low")
        .add_label(1.0, "high")
        .add_ticks([0.0, 1.0]);
    layout.add_axis(AxisPosition::Top).set_title("Request latency");

    layout.add_grid(GridPlacement::Horizontal).add_ticks(steps);
    layout.add_grid(GridPlacement::Vertical).add_ticks(steps);
    layout
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "plotfx_demo.svg".to_string()));
    let format = args.next().unwrap_or_else(|| "svg".to_string());

    let mut doc = Document::default();
    doc.set_root(sample_plot());
    doc.render(&format, &path).map_err(|err| {
        let code = err.code();
        anyhow::Error::new(err).context(format!("[{code}] rendering {} failed", path.display()))
    })?;

    println!("wrote {}", path.display());
    Ok(())
}
