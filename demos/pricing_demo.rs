// demos/pricing_demo.rs

//! Console walk-through of one pricing request
//!
//! Loads a config (TOML path as the first argument, dashboard defaults
//! otherwise), prints the input table, the call and put values and a few
//! slices of both surfaces.
//!
//! Usage:
//!     cargo run --example pricing_demo -- [config.toml]

use anyhow::Result;
use bsm_surface::{OptionKind, PricingReport, SurfaceConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SurfaceConfig::from_file(path)?,
        None => SurfaceConfig::standard(),
    };

    println!("Black-Scholes Pricing Model");
    println!("===========================");

    let report = PricingReport::build(&config)?;

    println!("\nInputs:");
    for (label, value) in &report.inputs {
        println!("  {:<22} {:>10}", label, value);
    }

    println!("\n  CALL Value: {}", report.call_display());
    println!("  PUT Value:  {}", report.put_display());

    for kind in OptionKind::ALL {
        let surface = report.surfaces.get(kind);
        println!(
            "\n{} surface: {} asset prices x {} volatilities, price range [{:.2}, {:.2}]",
            kind,
            surface.rows(),
            surface.cols(),
            surface.min_price(),
            surface.max_price()
        );

        print!("{:>10}", "S \\ vol");
        for vol in &surface.volatilities {
            print!("{:>9.2}", vol);
        }
        println!();
        println!("{}", "-".repeat(10 + 9 * surface.cols()));

        // Print about five rows per surface
        let stride = (surface.rows() / 5).max(1);
        for (s, row) in surface
            .asset_prices
            .iter()
            .zip(&surface.values)
            .step_by(stride)
        {
            print!("{:>10.2}", s);
            for price in row {
                print!("{:>9.2}", price);
            }
            println!();
        }
    }

    Ok(())
}
