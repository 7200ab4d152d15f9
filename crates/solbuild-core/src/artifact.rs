// crates/solbuild-core/src/artifact.rs
// ============================================================================
// Module: Contract Artifacts
// Description: Compiled-contract artifact records produced by external tools.
// Purpose: Parse artifact JSON safely and validate code-size invariants.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The external build tool writes one JSON artifact per compiled contract.
//! solbuild reads only the wire fields it needs: the contract name, the
//! creation bytecode, and the deployed (runtime) bytecode. Wire keys keep
//! the external tool's camelCase spelling. Loading is fail closed: file
//! size and encoding are checked before any parsing happens, and the
//! validation step enforces the protocol code-size ceiling on runtime code.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::bytecode::Bytecode;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum allowed artifact file size in bytes.
pub const MAX_ARTIFACT_FILE_SIZE: usize = 16 * 1024 * 1024;
/// Maximum deployed code size in bytes (EIP-170).
pub const MAX_DEPLOYED_CODE_SIZE: usize = 24_576;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced while loading or validating contract artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// I/O error.
    #[error("artifact io error: {0}")]
    Io(String),
    /// Parse error.
    #[error("artifact parse error: {0}")]
    Parse(String),
    /// Invalid artifact contents.
    #[error("artifact invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Contract Artifact
// ============================================================================

/// Compiled-contract artifact record.
///
/// # Invariants
/// - `bytecode` is the creation code; `deployed_bytecode` is the runtime
///   code extracted by the external compiler.
/// - Wire keys match the external artifact format (`contractName`,
///   `bytecode`, `deployedBytecode`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    /// Contract name, when the artifact carries one.
    #[serde(rename = "contractName", default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    /// Creation bytecode.
    pub bytecode: Bytecode,
    /// Deployed (runtime) bytecode.
    #[serde(rename = "deployedBytecode")]
    pub deployed_bytecode: Bytecode,
}

impl ContractArtifact {
    /// Parses an artifact from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Parse`] when the JSON is malformed or a
    /// bytecode field fails hex decoding.
    pub fn from_json_str(content: &str) -> Result<Self, ArtifactError> {
        serde_json::from_str(content).map_err(|err| ArtifactError::Parse(err.to_string()))
    }

    /// Loads an artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] when reading fails, the file exceeds
    /// [`MAX_ARTIFACT_FILE_SIZE`], the file is not UTF-8, or parsing fails.
    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|err| ArtifactError::Io(err.to_string()))?;
        if bytes.len() > MAX_ARTIFACT_FILE_SIZE {
            return Err(ArtifactError::Invalid("artifact file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ArtifactError::Invalid("artifact file must be utf-8".to_string()))?;
        Self::from_json_str(content)
    }

    /// Validates artifact invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Invalid`] when the creation code is empty or
    /// the runtime code exceeds [`MAX_DEPLOYED_CODE_SIZE`].
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.bytecode.is_empty() {
            return Err(ArtifactError::Invalid("artifact bytecode must be non-empty".to_string()));
        }
        let deployed_len = self.deployed_bytecode.len();
        if deployed_len > MAX_DEPLOYED_CODE_SIZE {
            return Err(ArtifactError::Invalid(format!(
                "deployed bytecode exceeds code size limit ({deployed_len} > \
                 {MAX_DEPLOYED_CODE_SIZE})"
            )));
        }
        Ok(())
    }
}
