//! CSV export of price surfaces in long format.
//!
//! One record per cell with columns `asset_price,volatility,price`, in the
//! same row-major order as [`PriceSurface::cells`].

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::PriceSurface;

#[derive(Debug, Serialize)]
struct CsvCell {
    asset_price: f64,
    volatility: f64,
    price: f64,
}

/// Write every cell of `surface` to `writer`.
pub fn write_csv<W: io::Write>(surface: &PriceSurface, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (asset_price, volatility, price) in surface.cells() {
        wtr.serialize(CsvCell {
            asset_price,
            volatility,
            price,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `surface` to a CSV file at `path`, replacing any existing file.
pub fn write_csv_file<P: AsRef<Path>>(surface: &PriceSurface, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating surface export {}", path.display()))?;
    write_csv(surface, io::BufWriter::new(file))
        .with_context(|| format!("writing {} surface to {}", surface.kind, path.display()))
}
