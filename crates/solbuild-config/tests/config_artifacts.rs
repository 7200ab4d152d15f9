// crates/solbuild-config/tests/config_artifacts.rs
// ============================================================================
// Module: Config Artifact Validation Tests
// Description: Validate config schema, example, and docs generators.
// Purpose: Prevent drift between config model and generated artifacts.
// Dependencies: solbuild-config, jsonschema, toml
// ============================================================================

//! Config artifact validation tests for solbuild-config.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use jsonschema::Draft;
use serde_json::json;
use solbuild_config::BuildConfig;
use solbuild_config::config_docs_markdown;
use solbuild_config::config_schema;
use solbuild_config::config_toml_example;
use solbuild_core::NetworkId;

type TestResult = Result<(), String>;

#[test]
fn config_schema_accepts_minimal_and_example_configs() -> TestResult {
    let schema = config_schema();
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| err.to_string())?;

    let minimal = json!({});
    if !validator.is_valid(&minimal) {
        return Err("minimal config should be valid".to_string());
    }

    let toml_str = config_toml_example();
    let toml_value: toml::Value = toml::from_str(toml_str).map_err(|err| err.to_string())?;
    let json_value = serde_json::to_value(toml_value).map_err(|err| err.to_string())?;
    if !validator.is_valid(&json_value) {
        return Err("example config should validate".to_string());
    }
    Ok(())
}

#[test]
fn config_schema_rejects_unknown_top_level_keys() -> TestResult {
    let schema = config_schema();
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| err.to_string())?;

    let unknown = json!({ "compilers": {} });
    if validator.is_valid(&unknown) {
        return Err("unknown top-level keys should be rejected".to_string());
    }
    Ok(())
}

#[test]
fn config_example_parses_and_validates() -> TestResult {
    let config = BuildConfig::from_toml_str(config_toml_example()).map_err(|err| err.to_string())?;
    let development = &config.networks.development;
    if development.host != "localhost" || development.port != 9545 {
        return Err("example development endpoint drifted".to_string());
    }
    if development.network_id != NetworkId::Any {
        return Err("example network id must be the wildcard".to_string());
    }
    if !config.solc.optimizer.enabled || config.solc.optimizer.runs != 900 {
        return Err("example optimizer settings drifted".to_string());
    }
    Ok(())
}

#[test]
fn config_docs_generate_without_error() -> TestResult {
    let docs = config_docs_markdown().map_err(|err| err.to_string())?;
    if !docs.contains("# solbuild.toml Configuration") {
        return Err("docs missing title header".to_string());
    }
    if !docs.contains("[solc.optimizer]") || !docs.contains("network_id") {
        return Err("docs missing key reference sections".to_string());
    }
    Ok(())
}
