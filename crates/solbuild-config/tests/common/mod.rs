// crates/solbuild-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures for solbuild-config integration tests.
// Purpose: Provide a minimal valid configuration for mutation-based tests.
// ============================================================================

//! Shared helpers for solbuild-config tests.

use solbuild_config::BuildConfig;
use solbuild_config::ConfigError;

/// Parses the minimal (empty) configuration document.
pub fn minimal_config() -> Result<BuildConfig, ConfigError> {
    BuildConfig::from_toml_str("")
}
