// crates/solbuild-core/tests/artifact.rs
// ============================================================================
// Module: Artifact Tests
// Description: Validate artifact JSON parsing, load guards, and code limits.
// Purpose: Ensure artifact input handling is strict and fail-closed.
// ============================================================================

//! Contract artifact tests for solbuild-core.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::io::Write;

use solbuild_core::ArtifactError;
use solbuild_core::ContractArtifact;
use solbuild_core::MAX_DEPLOYED_CODE_SIZE;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), ArtifactError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid artifact".to_string()),
    }
}

#[test]
fn parses_external_artifact_fields() -> TestResult {
    let json = r#"{
        "contractName": "Token",
        "abi": [],
        "bytecode": "0x6001600155",
        "deployedBytecode": "0x600155"
    }"#;
    let artifact = ContractArtifact::from_json_str(json).map_err(|err| err.to_string())?;
    if artifact.contract_name.as_deref() != Some("Token") {
        return Err(format!("unexpected name: {:?}", artifact.contract_name));
    }
    if artifact.bytecode.len() != 5 || artifact.deployed_bytecode.len() != 3 {
        return Err("unexpected bytecode lengths".to_string());
    }
    Ok(())
}

#[test]
fn parses_artifact_without_contract_name() -> TestResult {
    let json = r#"{"bytecode": "0x60", "deployedBytecode": "0x"}"#;
    let artifact = ContractArtifact::from_json_str(json).map_err(|err| err.to_string())?;
    if artifact.contract_name.is_some() {
        return Err("name should be absent".to_string());
    }
    Ok(())
}

#[test]
fn rejects_missing_bytecode_field() -> TestResult {
    let json = r#"{"contractName": "Token", "deployedBytecode": "0x"}"#;
    match ContractArtifact::from_json_str(json) {
        Err(ArtifactError::Parse(_)) => Ok(()),
        Err(err) => Err(format!("unexpected error: {err}")),
        Ok(_) => Err("expected parse failure".to_string()),
    }
}

#[test]
fn rejects_malformed_bytecode_hex() -> TestResult {
    let json = r#"{"bytecode": "0xzz", "deployedBytecode": "0x"}"#;
    match ContractArtifact::from_json_str(json) {
        Err(ArtifactError::Parse(message)) => {
            if message.contains("non-hexadecimal") {
                Ok(())
            } else {
                Err(format!("unexpected parse message: {message}"))
            }
        }
        Err(err) => Err(format!("unexpected error: {err}")),
        Ok(_) => Err("expected parse failure".to_string()),
    }
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    match ContractArtifact::from_file(file.path()) {
        Err(ArtifactError::Invalid(message)) => {
            if message.contains("utf-8") {
                Ok(())
            } else {
                Err(format!("unexpected message: {message}"))
            }
        }
        Err(err) => Err(format!("unexpected error: {err}")),
        Ok(_) => Err("expected invalid artifact load".to_string()),
    }
}

#[test]
fn load_reports_missing_file_as_io_error() -> TestResult {
    let missing = std::path::Path::new("does-not-exist.json");
    match ContractArtifact::from_file(missing) {
        Err(ArtifactError::Io(_)) => Ok(()),
        Err(err) => Err(format!("unexpected error: {err}")),
        Ok(_) => Err("expected io failure".to_string()),
    }
}

#[test]
fn validate_rejects_empty_creation_code() -> TestResult {
    let json = r#"{"bytecode": "0x", "deployedBytecode": "0x60"}"#;
    let artifact = ContractArtifact::from_json_str(json).map_err(|err| err.to_string())?;
    assert_invalid(artifact.validate(), "bytecode must be non-empty")?;
    Ok(())
}

#[test]
fn validate_rejects_oversized_runtime_code() -> TestResult {
    let oversized = format!("0x{}", "60".repeat(MAX_DEPLOYED_CODE_SIZE + 1));
    let json = format!(r#"{{"bytecode": "0x60", "deployedBytecode": "{oversized}"}}"#);
    let artifact = ContractArtifact::from_json_str(&json).map_err(|err| err.to_string())?;
    assert_invalid(artifact.validate(), "exceeds code size limit")?;
    Ok(())
}

#[test]
fn validate_accepts_runtime_code_at_limit() -> TestResult {
    let at_limit = format!("0x{}", "60".repeat(MAX_DEPLOYED_CODE_SIZE));
    let json = format!(r#"{{"bytecode": "0x60", "deployedBytecode": "{at_limit}"}}"#);
    let artifact = ContractArtifact::from_json_str(&json).map_err(|err| err.to_string())?;
    artifact.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn artifact_round_trips_through_json() -> TestResult {
    let json = r#"{"contractName": "Token", "bytecode": "0x6001", "deployedBytecode": "0x60"}"#;
    let artifact = ContractArtifact::from_json_str(json).map_err(|err| err.to_string())?;
    let rendered = serde_json::to_string(&artifact).map_err(|err| err.to_string())?;
    let reparsed = ContractArtifact::from_json_str(&rendered).map_err(|err| err.to_string())?;
    if reparsed != artifact {
        return Err("artifact must round-trip through its wire form".to_string());
    }
    Ok(())
}
