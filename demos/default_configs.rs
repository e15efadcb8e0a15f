use bsm_surface::{build_surfaces, default_configs, SurfaceConfig};

fn describe(name: &str, config: &SurfaceConfig, use_case: &str) {
    println!("{}:", name);
    println!(
        "   Volatility axis: {:.2} .. {:.2} ({} samples)",
        config.volatility_axis.min, config.volatility_axis.max, config.volatility_axis.count
    );
    println!(
        "   Asset price axis: {:.2} .. {:.2} ({} samples)",
        config.asset_price_axis.min, config.asset_price_axis.max, config.asset_price_axis.count
    );
    println!(
        "   Cells per surface: {}",
        config.volatility_axis.count * config.asset_price_axis.count
    );
    println!("   Use case: {}\n", use_case);
}

fn main() {
    println!("bsm-surface Default Configuration Examples\n");

    describe(
        "1. Standard Configuration",
        &default_configs::standard(),
        "Dashboard surfaces",
    );
    describe(
        "2. High Resolution Configuration",
        &default_configs::high_resolution(),
        "Smooth rendering, publication plots",
    );
    describe(
        "3. Minimal Configuration",
        &default_configs::minimal(),
        "Quick checks, debugging",
    );

    println!("Standard configuration as TOML:\n");
    match default_configs::standard().to_toml_string() {
        Ok(text) => println!("{}", text),
        Err(e) => println!("❌ Serialization failed: {:#}", e),
    }

    println!("Building surfaces with the minimal config...");
    match build_surfaces(&default_configs::minimal()) {
        Ok(pair) => {
            println!("✅ Surfaces built!");
            println!("   Call: {:?}", pair.call.values);
            println!("   Put:  {:?}", pair.put.values);
        }
        Err(e) => {
            println!("❌ Surface build failed: {}", e);
        }
    }
}
