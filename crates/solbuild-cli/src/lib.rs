// crates/solbuild-cli/src/lib.rs
// ============================================================================
// Module: Solbuild CLI Library
// Description: Shared CLI helpers exposed for the binary and its tests.
// Purpose: Host the i18n catalog and the `t!` macro behind a library target.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The solbuild binary keeps its command dispatch private; this library
//! target exposes the localization layer so user-facing strings stay
//! centralized and testable.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
