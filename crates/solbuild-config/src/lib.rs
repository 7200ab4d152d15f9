// crates/solbuild-config/src/lib.rs
// ============================================================================
// Module: Solbuild Config
// Description: Canonical build configuration model, loading, and validation.
// Purpose: Provide the solbuild.toml model plus schema/example/docs generators.
// Dependencies: serde, serde_json, solbuild-core, thiserror, toml
// ============================================================================

//! ## Overview
//! This crate owns the solbuild build configuration: the `networks` table of
//! named endpoints and the `solc.optimizer` compiler settings. The record is
//! immutable after load; it is read once and handed verbatim to external
//! tooling. Loading is fail closed: path, size, and encoding guards run
//! before parsing, and validation runs before the record is returned. The
//! crate also generates the JSON schema, the canonical example file, and the
//! reference documentation so the model and its artifacts cannot drift.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use solbuild_core::NetworkId;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default configuration filename.
pub const DEFAULT_CONFIG_NAME: &str = "solbuild.toml";
/// Environment variable override for the configuration path.
pub const CONFIG_ENV_VAR: &str = "SOLBUILD_CONFIG";
/// Maximum allowed configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 256 * 1024;
/// Maximum total path length for configuration paths.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum length of a network name.
pub const MAX_NETWORK_NAME_LENGTH: usize = 64;
/// Maximum accepted optimizer run count.
pub const MAX_OPTIMIZER_RUNS: u32 = 1_000_000_000;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default development endpoint host.
pub const DEFAULT_DEV_HOST: &str = "localhost";
/// Default development endpoint port.
pub const DEFAULT_DEV_PORT: u16 = 9545;
/// Default optimizer run count (external compiler default).
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Returns the default endpoint host for serde defaults.
fn default_host() -> String {
    DEFAULT_DEV_HOST.to_string()
}

/// Returns the default endpoint port for serde defaults.
const fn default_port() -> u16 {
    DEFAULT_DEV_PORT
}

/// Returns the default optimizer run count for serde defaults.
const fn default_optimizer_runs() -> u32 {
    DEFAULT_OPTIMIZER_RUNS
}

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Build configuration record.
///
/// # Invariants
/// - Immutable after load; consumers read it once and pass it verbatim to
///   external tooling.
/// - An empty document is a valid configuration; every field defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Named network endpoints.
    #[serde(default)]
    pub networks: NetworksConfig,
    /// External compiler settings.
    #[serde(default)]
    pub solc: SolcConfig,
}

/// Named network endpoints.
///
/// # Invariants
/// - `development` always exists (defaulted when absent).
/// - Additional entries are keyed by validated network names and kept in
///   deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworksConfig {
    /// Development endpoint used by local workflows.
    #[serde(default)]
    pub development: NetworkConfig,
    /// Additional named endpoints.
    #[serde(flatten)]
    pub additional: BTreeMap<String, NetworkConfig>,
}

impl NetworksConfig {
    /// Iterates all configured networks as `(name, config)` pairs, the
    /// development entry first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NetworkConfig)> {
        std::iter::once(("development", &self.development))
            .chain(self.additional.iter().map(|(name, network)| (name.as_str(), network)))
    }
}

/// A single network endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Endpoint hostname.
    #[serde(default = "default_host")]
    pub host: String,
    /// Endpoint port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Network identifier; `"*"` matches any network.
    #[serde(default)]
    pub network_id: NetworkId,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_DEV_PORT,
            network_id: NetworkId::Any,
        }
    }
}

/// External compiler settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcConfig {
    /// Optimizer settings passed through to the compiler.
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

/// Compiler optimizer settings.
///
/// # Invariants
/// - `runs` trades compile time for runtime gas efficiency; the unsigned
///   type enforces non-negativity at the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Whether the optimizer is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Optimizer iteration count.
    #[serde(default = "default_optimizer_runs")]
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Build configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("config io error: {0}")]
    Io(String),
    /// Parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration.
    #[error("config invalid: {0}")]
    Invalid(String),
    /// Documentation rendering error.
    #[error("config docs error: {0}")]
    Docs(String),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl BuildConfig {
    /// Loads a build configuration from disk.
    ///
    /// The path resolves from the explicit argument, then the
    /// [`CONFIG_ENV_VAR`] override, then [`DEFAULT_CONFIG_NAME`]. A missing
    /// file is an error; there is no silent default-on-missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when path guards fail, the file cannot be
    /// read, exceeds [`MAX_CONFIG_FILE_SIZE`], is not UTF-8, fails to
    /// parse, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates a build configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when any invariant fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.networks.additional.contains_key("development") {
            return Err(ConfigError::Invalid("duplicate network name: development".to_string()));
        }
        for name in self.networks.additional.keys() {
            validate_network_name(name)?;
        }
        for (name, network) in self.networks.iter() {
            validate_network(name, network)?;
        }
        if self.solc.optimizer.runs > MAX_OPTIMIZER_RUNS {
            return Err(ConfigError::Invalid(format!(
                "optimizer runs exceeds maximum ({} > {MAX_OPTIMIZER_RUNS})",
                self.solc.optimizer.runs
            )));
        }
        Ok(())
    }
}

/// Resolves the configuration path from explicit input or environment.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the configuration file path length and components.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates an additional network name.
fn validate_network_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Invalid("network name must be non-empty".to_string()));
    }
    if name.len() > MAX_NETWORK_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "network name exceeds max length: {name}"
        )));
    }
    if !name
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        return Err(ConfigError::Invalid(format!(
            "network name must use lowercase ASCII letters, digits, '-' or '_': {name}"
        )));
    }
    Ok(())
}

/// Validates a single network endpoint.
fn validate_network(name: &str, network: &NetworkConfig) -> Result<(), ConfigError> {
    if network.host.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("network {name}: host must be non-empty")));
    }
    if network.host.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!(
            "network {name}: host must not contain whitespace"
        )));
    }
    if network.port == 0 {
        return Err(ConfigError::Invalid(format!("network {name}: port must be non-zero")));
    }
    if let NetworkId::Id(id) = &network.network_id {
        if id.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "network {name}: network id must be non-empty"
            )));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "network {name}: network id must not contain whitespace"
            )));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Generated Artifacts
// ============================================================================

/// Returns the canonical example configuration file.
#[must_use]
pub const fn config_toml_example() -> &'static str {
    r#"# solbuild.toml
# Build configuration consumed by solbuild tooling.

[networks.development]
host = "localhost"
port = 9545
# "*" matches any network id.
network_id = "*"

[solc.optimizer]
enabled = true
runs = 900
"#
}

/// Returns the JSON schema (Draft 2020-12) for the configuration file.
#[must_use]
pub fn config_schema() -> Value {
    let network_schema = json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "host": { "type": "string", "minLength": 1 },
            "port": { "type": "integer", "minimum": 1, "maximum": 65_535 },
            "network_id": {
                "oneOf": [
                    { "type": "string", "minLength": 1 },
                    { "type": "integer", "minimum": 0 }
                ]
            }
        }
    });
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "solbuild.toml",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "networks": {
                "type": "object",
                "properties": {
                    "development": network_schema.clone()
                },
                "additionalProperties": network_schema
            },
            "solc": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "optimizer": {
                        "type": "object",
                        "additionalProperties": false,
                        "properties": {
                            "enabled": { "type": "boolean" },
                            "runs": {
                                "type": "integer",
                                "minimum": 0,
                                "maximum": MAX_OPTIMIZER_RUNS
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Renders the configuration reference documentation.
///
/// The defaults block is generated from the live [`BuildConfig::default`]
/// record so documentation cannot drift from the model.
///
/// # Errors
///
/// Returns [`ConfigError::Docs`] when default rendering fails.
pub fn config_docs_markdown() -> Result<String, ConfigError> {
    let defaults = toml::to_string_pretty(&BuildConfig::default())
        .map_err(|err| ConfigError::Docs(err.to_string()))?;
    let mut docs = String::new();
    docs.push_str("# solbuild.toml Configuration\n\n");
    docs.push_str(
        "The build configuration is read once at startup and passed verbatim \
         to external tooling. Every field defaults; an empty file is valid.\n\n",
    );
    docs.push_str("## [networks.<name>]\n\n");
    docs.push_str(
        "Named endpoint tables. The `development` entry always exists. \
         Additional names use lowercase ASCII letters, digits, `-` or `_`.\n\n",
    );
    docs.push_str("- `host` (string): endpoint hostname; non-empty, no whitespace.\n");
    docs.push_str("- `port` (integer): endpoint port; non-zero.\n");
    docs.push_str(
        "- `network_id` (string or integer): network selector; `\"*\"` matches \
         any network, integers normalize to decimal strings.\n\n",
    );
    docs.push_str("## [solc.optimizer]\n\n");
    docs.push_str("- `enabled` (boolean): whether the compiler optimizer runs.\n");
    docs.push_str(&format!(
        "- `runs` (integer): optimizer iteration count, trading compile time \
         for runtime gas efficiency; at most {MAX_OPTIMIZER_RUNS}.\n\n"
    ));
    docs.push_str("## Defaults\n\n");
    docs.push_str("```toml\n");
    docs.push_str(&defaults);
    docs.push_str("```\n\n");
    docs.push_str("## Example\n\n");
    docs.push_str("```toml\n");
    docs.push_str(config_toml_example());
    docs.push_str("```\n");
    Ok(docs)
}
