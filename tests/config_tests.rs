use bsm_surface::{default_configs, PricingReport, SurfaceConfig};

/// A full TOML document overrides every default.
#[test]
fn test_full_toml_config() {
    let text = r#"
        [contract]
        current_price = 50.0
        strike = 50.0
        time_to_maturity = 0.5
        volatility = 0.3
        interest_rate = 0.0

        [volatility_axis]
        min = 0.1
        max = 0.6
        count = 6

        [asset_price_axis]
        min = 25.0
        max = 75.0
        count = 11
    "#;
    let config = SurfaceConfig::from_toml_str(text).expect("config parses");
    assert_eq!(config.volatility_axis.count, 6);
    assert_eq!(config.asset_price_axis.max, 75.0);

    let report = PricingReport::build(&config).unwrap();
    assert_eq!(report.call_display(), report.put_display());
    assert_eq!(report.call_display(), "$4.22");
    assert_eq!(report.surfaces.call.rows(), 11);
    assert_eq!(report.surfaces.call.cols(), 6);
}

/// Config files load from disk and report their path on failure.
#[test]
fn test_config_from_file() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("bsm_surface_config_{}.toml", std::process::id()));
    std::fs::write(&path, default_configs::high_resolution().to_toml_string().unwrap()).unwrap();

    let loaded = SurfaceConfig::from_file(&path).unwrap();
    assert_eq!(loaded, default_configs::high_resolution());
    std::fs::remove_file(&path).unwrap();

    let err = SurfaceConfig::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("bsm_surface_config_"));
}

/// Input table mirrors the contract in display order.
#[test]
fn test_report_input_table() {
    let report = PricingReport::build(&default_configs::standard()).unwrap();
    let labels: Vec<&str> = report.inputs.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec![
            "Current Asset Price",
            "Strike Price",
            "Time to Maturity",
            "Volatility",
            "Interest Rate"
        ]
    );
    assert_eq!(report.inputs[4].1, "0.05");
}

/// Invalid contracts in a config are caught by validation.
#[test]
fn test_invalid_contract_in_toml() {
    let config = SurfaceConfig::from_toml_str("[contract]\ntime_to_maturity = -1.0").unwrap();
    assert!(config.validate().is_err());
    assert!(PricingReport::build(&config).is_err());
}
