// crates/solbuild-config/tests/roundtrip.rs
// ============================================================================
// Module: Config Round-Trip Tests
// Description: Validate serialization round-trips of the loaded record.
// Purpose: Ensure the record survives its wire forms structurally unchanged.
// ============================================================================

//! Serialization round-trip tests for solbuild-config.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use solbuild_config::BuildConfig;
use solbuild_config::config_toml_example;

type TestResult = Result<(), String>;

#[test]
fn example_round_trips_through_toml() -> TestResult {
    let config = BuildConfig::from_toml_str(config_toml_example()).map_err(|err| err.to_string())?;
    let rendered = toml::to_string(&config).map_err(|err| err.to_string())?;
    let reparsed = BuildConfig::from_toml_str(&rendered).map_err(|err| err.to_string())?;
    if reparsed != config {
        return Err("record must round-trip through TOML unchanged".to_string());
    }
    Ok(())
}

#[test]
fn multi_network_record_round_trips_through_toml() -> TestResult {
    let toml = r#"
[networks.development]
host = "localhost"
port = 9545
network_id = "*"

[networks.mainnet]
host = "mainnet.example"
port = 8545
network_id = "1"

[solc.optimizer]
enabled = true
runs = 900
"#;
    let config = BuildConfig::from_toml_str(toml).map_err(|err| err.to_string())?;
    let rendered = toml::to_string(&config).map_err(|err| err.to_string())?;
    let reparsed = BuildConfig::from_toml_str(&rendered).map_err(|err| err.to_string())?;
    if reparsed != config {
        return Err("multi-network record must round-trip unchanged".to_string());
    }
    Ok(())
}

#[test]
fn default_record_round_trips_through_toml() -> TestResult {
    let config = BuildConfig::default();
    let rendered = toml::to_string(&config).map_err(|err| err.to_string())?;
    let reparsed = BuildConfig::from_toml_str(&rendered).map_err(|err| err.to_string())?;
    if reparsed != config {
        return Err("default record must round-trip unchanged".to_string());
    }
    Ok(())
}

#[test]
fn integer_network_id_normalizes_once() -> TestResult {
    let toml = "[networks.development]\nnetwork_id = 5777\n";
    let config = BuildConfig::from_toml_str(toml).map_err(|err| err.to_string())?;
    let rendered = toml::to_string(&config).map_err(|err| err.to_string())?;
    let reparsed = BuildConfig::from_toml_str(&rendered).map_err(|err| err.to_string())?;
    if reparsed != config {
        return Err("normalized record must be a serialization fixed point".to_string());
    }
    if !rendered.contains("network_id = \"5777\"") {
        return Err(format!("expected decimal string wire form, got: {rendered}"));
    }
    Ok(())
}
