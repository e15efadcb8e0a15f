// Example: plot_price_surface.rs
// Builds the call and put surfaces for a config and renders each as an SVG
// heatmap (x = volatility, y = asset price, colour = option price).
//
// Usage:
//     cargo run --example plot_price_surface -- [config.toml]
//
// Writes call_surface.svg and put_surface.svg to the working directory.

use std::error::Error;

use bsm_surface::{build_surfaces, OptionKind, PriceSurface, SurfaceConfig};
use plotters::prelude::*;

/// Red for the cheapest cell through yellow to green for the most expensive.
fn price_colour(price: f64, lo: f64, hi: f64) -> HSLColor {
    let t = if hi > lo {
        ((price - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    HSLColor(t * 120.0 / 360.0, 0.75, 0.5)
}

/// Cell edges around each sample, halfway to its neighbours.
fn cell_edges(samples: &[f64]) -> Vec<(f64, f64)> {
    let n = samples.len();
    (0..n)
        .map(|i| {
            let left = if i == 0 {
                samples[0]
            } else {
                0.5 * (samples[i - 1] + samples[i])
            };
            let right = if i + 1 == n {
                samples[n - 1]
            } else {
                0.5 * (samples[i] + samples[i + 1])
            };
            (left, right)
        })
        .collect()
}

fn axis_range(samples: &[f64]) -> (f64, f64) {
    let lo = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

fn plot_surface(surface: &PriceSurface, path: &str) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = axis_range(&surface.volatilities);
    let (y_min, y_max) = axis_range(&surface.asset_prices);
    let (lo, hi) = (surface.min_price(), surface.max_price());

    let root = SVGBackend::new(path, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "{} Option Price | range ${:.2} .. ${:.2}",
                surface.kind, lo, hi
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Volatility")
        .y_desc("Asset Price")
        .draw()?;

    let x_edges = cell_edges(&surface.volatilities);
    let y_edges = cell_edges(&surface.asset_prices);

    chart.draw_series(surface.values.iter().enumerate().flat_map(|(i, row)| {
        let (y0, y1) = y_edges[i];
        let x_edges = &x_edges;
        row.iter().enumerate().map(move |(j, &price)| {
            let (x0, x1) = x_edges[j];
            Rectangle::new([(x0, y0), (x1, y1)], price_colour(price, lo, hi).filled())
        })
    }))?;

    root.present()?;
    println!("Chart saved to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SurfaceConfig::from_file(path)?,
        None => SurfaceConfig::high_resolution(),
    };

    let pair = build_surfaces(&config)?;
    for kind in OptionKind::ALL {
        let path = format!("{}_surface.svg", kind.label().to_lowercase());
        plot_surface(pair.get(kind), &path)?;
    }

    Ok(())
}
