// Writes the call and put surfaces of a config to CSV.
//
// Usage:
//     cargo run --example export_surface_csv -- [config.toml] [output_dir]
//
// Produces call_surface.csv and put_surface.csv with columns
// asset_price,volatility,price.

use std::path::PathBuf;

use anyhow::Result;
use bsm_surface::surface::export::write_csv_file;
use bsm_surface::{build_surfaces, OptionKind, SurfaceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SurfaceConfig::from_file(path)?,
        None => SurfaceConfig::standard(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    let pair = build_surfaces(&config)?;
    for kind in OptionKind::ALL {
        let surface = pair.get(kind);
        let path = out_dir.join(format!("{}_surface.csv", kind.label().to_lowercase()));
        write_csv_file(surface, &path)?;
        info!(
            path = %path.display(),
            cells = surface.rows() * surface.cols(),
            "surface exported"
        );
    }

    Ok(())
}
