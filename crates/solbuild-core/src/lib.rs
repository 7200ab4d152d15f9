// crates/solbuild-core/src/lib.rs
// ============================================================================
// Module: Solbuild Core
// Description: Canonical domain types for solbuild configuration and artifacts.
// Purpose: Provide strongly typed network identifiers, bytecode, and artifacts.
// Dependencies: hex, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the canonical types shared across solbuild: the
//! [`NetworkId`] wildcard-capable network identifier, the [`Bytecode`] hex
//! wire type with metadata-trailer handling, and the [`ContractArtifact`]
//! record produced by external compilers. Types are permissive at
//! construction; invariants are enforced at validation boundaries.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod artifact;
pub mod bytecode;
pub mod network;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use artifact::ArtifactError;
pub use artifact::ContractArtifact;
pub use artifact::MAX_ARTIFACT_FILE_SIZE;
pub use artifact::MAX_DEPLOYED_CODE_SIZE;
pub use bytecode::Bytecode;
pub use bytecode::BytecodeError;
pub use bytecode::MetadataTrailer;
pub use network::NetworkId;
