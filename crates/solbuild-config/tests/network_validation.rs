// crates/solbuild-config/tests/network_validation.rs
// =============================================================================
// Module: Network Config Validation Tests
// Description: Validate endpoint host, port, name, and network-id constraints.
// Purpose: Ensure network settings fail closed and enforce limits.
// =============================================================================

//! Network config validation tests for solbuild-config.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use solbuild_config::ConfigError;
use solbuild_config::NetworkConfig;
use solbuild_core::NetworkId;

mod common;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn rejects_empty_host() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.development.host = "   ".to_string();
    assert_invalid(config.validate(), "host must be non-empty")?;
    Ok(())
}

#[test]
fn rejects_host_with_whitespace() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.development.host = "local host".to_string();
    assert_invalid(config.validate(), "host must not contain whitespace")?;
    Ok(())
}

#[test]
fn rejects_zero_port() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.development.port = 0;
    assert_invalid(config.validate(), "port must be non-zero")?;
    Ok(())
}

#[test]
fn rejects_empty_network_id() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.development.network_id = NetworkId::Id(String::new());
    assert_invalid(config.validate(), "network id must be non-empty")?;
    Ok(())
}

#[test]
fn rejects_network_id_with_whitespace() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.development.network_id = NetworkId::Id("57 77".to_string());
    assert_invalid(config.validate(), "network id must not contain whitespace")?;
    Ok(())
}

#[test]
fn rejects_empty_network_name() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.additional.insert(String::new(), NetworkConfig::default());
    assert_invalid(config.validate(), "network name must be non-empty")?;
    Ok(())
}

#[test]
fn rejects_network_name_with_invalid_characters() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.additional.insert("Main Net".to_string(), NetworkConfig::default());
    assert_invalid(
        config.validate(),
        "network name must use lowercase ASCII letters, digits, '-' or '_'",
    )?;
    Ok(())
}

#[test]
fn rejects_overlong_network_name() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.additional.insert("a".repeat(65), NetworkConfig::default());
    assert_invalid(config.validate(), "network name exceeds max length")?;
    Ok(())
}

#[test]
fn rejects_duplicate_development_entry() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.additional.insert("development".to_string(), NetworkConfig::default());
    assert_invalid(config.validate(), "duplicate network name: development")?;
    Ok(())
}

#[test]
fn accepts_additional_named_network() -> TestResult {
    let toml = r#"
[networks.development]
host = "localhost"
port = 9545
network_id = "*"

[networks.goerli-fork]
host = "127.0.0.1"
port = 8545
network_id = 5
"#;
    let config = solbuild_config::BuildConfig::from_toml_str(toml).map_err(|err| err.to_string())?;
    let fork = config
        .networks
        .additional
        .get("goerli-fork")
        .ok_or_else(|| "missing additional network".to_string())?;
    if fork.network_id != NetworkId::Id("5".to_string()) {
        return Err(format!("unexpected network id: {}", fork.network_id));
    }
    Ok(())
}

#[test]
fn validates_additional_network_endpoints() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.networks.additional.insert(
        "mainnet".to_string(),
        NetworkConfig {
            host: String::new(),
            port: 8545,
            network_id: NetworkId::Any,
        },
    );
    assert_invalid(config.validate(), "network mainnet: host must be non-empty")?;
    Ok(())
}
