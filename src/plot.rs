//! Scatter plots of density profiles.

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use crate::error::{BecError, Result};

const FIGURE_SIZE: (u32, u32) = (800, 600);

#[derive(Debug, Clone, Copy)]
pub struct PlotOptions<'a> {
    pub title: Option<&'a str>,
    pub fontsize: u32,
    /// Write an SVG here instead of returning the document.
    pub save_to: Option<&'a Path>,
}

impl Default for PlotOptions<'_> {
    fn default() -> Self {
        Self { title: None, fontsize: 16, save_to: None }
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> BecError {
    BecError::Plot(e.to_string())
}

/// Padded (min, max) of `values`, (0, 1) when empty.
fn axis_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 0.5 };
    (lo - pad, hi + pad)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    x: &[f64],
    psi: &[f64],
    options: &PlotOptions,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_min, x_max) = axis_range(x);
    let (y_min, y_max) = axis_range(psi);

    let mut builder = ChartBuilder::on(root);
    builder.margin(15).x_label_area_size(45).y_label_area_size(55);
    if let Some(title) = options.title {
        builder.caption(title, ("sans-serif", options.fontsize + 4));
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("ψ")
        .axis_desc_style(("sans-serif", options.fontsize))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            x.iter()
                .zip(psi.iter())
                .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Plot a wave function profile ψ(x) as a scatter plot.
///
/// With `options.save_to` the figure is written there as SVG and `None` is
/// returned; otherwise the SVG document is returned for display.
pub fn plot_wave_function(x: &[f64], psi: &[f64], options: &PlotOptions) -> Result<Option<String>> {
    if x.len() != psi.len() {
        return Err(BecError::Plot(format!(
            "x has {} points but psi has {}",
            x.len(),
            psi.len()
        )));
    }

    match options.save_to {
        Some(path) => {
            let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
            draw(&root, x, psi, options)?;
            info!("Figure saved to {}", path.display());
            Ok(None)
        }
        None => {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
                draw(&root, x, psi, options)?;
            }
            Ok(Some(svg))
        }
    }
}
