// crates/solbuild-core/src/bytecode.rs
// ============================================================================
// Module: Contract Bytecode
// Description: Hex wire type for EVM bytecode with metadata-trailer handling.
// Purpose: Decode compiler output safely and strip metadata trailers.
// Dependencies: hex, serde
// ============================================================================

//! ## Overview
//! Compiled contract code travels as `0x`-prefixed hex strings. [`Bytecode`]
//! owns the decoded bytes and knows how to recognize the metadata trailer
//! appended by the external compiler: either the Swarm-hash form carrying a
//! `bzzr0` marker, or the legacy form ending in `JUMP` `STOP` followed by a
//! 32-byte hash. Stripping is lossless on miss: input without a recognized
//! trailer passes through unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Marker bytes identifying a Swarm-hash metadata trailer.
const SWARM_MARKER: &[u8] = b"bzzr0";
/// Number of bytes preceding the Swarm marker that belong to the trailer.
const SWARM_MARKER_LEAD: usize = 2;
/// Offset from the end of the code to the legacy trailer's `JUMP` opcode.
const LEGACY_TRAILER_OFFSET: usize = 34;
/// Length of the hash carried by the legacy trailer.
const LEGACY_HASH_LEN: usize = 32;
/// EVM `JUMP` opcode.
const OP_JUMP: u8 = 0x56;
/// EVM `STOP` opcode.
const OP_STOP: u8 = 0x00;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced while decoding bytecode wire forms.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BytecodeError {
    /// Hex input has an odd number of digits.
    #[error("bytecode hex has odd length ({len} digits)")]
    OddLength {
        /// Number of hex digits in the input.
        len: usize,
    },
    /// Hex input contains a non-hexadecimal character.
    #[error("bytecode hex has non-hexadecimal character {character:?} at digit {index}")]
    NonHexCharacter {
        /// Offending character.
        character: char,
        /// Zero-based digit position of the offending character.
        index: usize,
    },
}

// ============================================================================
// SECTION: Metadata Trailer
// ============================================================================

/// Metadata trailer recognized at the end of compiled code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataTrailer {
    /// Swarm-hash trailer carrying a `bzzr0` marker.
    Swarm {
        /// Byte offset where the trailer begins.
        offset: usize,
    },
    /// Legacy trailer: `JUMP` `STOP` followed by a 32-byte hash.
    Legacy,
}

// ============================================================================
// SECTION: Bytecode
// ============================================================================

/// Immutable EVM bytecode buffer.
///
/// # Invariants
/// - The buffer content is fixed after construction.
/// - The hex wire form is lowercase with a `0x` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytecode(Vec<u8>);

impl Bytecode {
    /// Creates bytecode from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decodes bytecode from a hex wire string.
    ///
    /// Surrounding whitespace is trimmed and a single `0x` prefix is
    /// stripped before decoding. The empty string decodes to empty bytecode.
    ///
    /// # Errors
    ///
    /// Returns [`BytecodeError`] when the input has odd length or contains
    /// non-hexadecimal characters.
    pub fn from_hex(input: &str) -> Result<Self, BytecodeError> {
        let digits = input.trim();
        let digits = digits.strip_prefix("0x").unwrap_or(digits);
        if digits.len() % 2 != 0 {
            return Err(BytecodeError::OddLength {
                len: digits.len(),
            });
        }
        match hex::decode(digits) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(hex::FromHexError::InvalidHexCharacter {
                c,
                index,
            }) => Err(BytecodeError::NonHexCharacter {
                character: c,
                index,
            }),
            Err(hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength) => {
                Err(BytecodeError::OddLength {
                    len: digits.len(),
                })
            }
        }
    }

    /// Returns the decoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the hex wire form (`0x`-prefixed, lowercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }

    /// Detects a metadata trailer at the end of the code.
    ///
    /// The Swarm form is matched first; the legacy form only applies when
    /// the code is long enough to carry the full trailer.
    #[must_use]
    pub fn trailer(&self) -> Option<MetadataTrailer> {
        if let Some(index) = find_subslice(&self.0, SWARM_MARKER)
            && index >= SWARM_MARKER_LEAD
        {
            return Some(MetadataTrailer::Swarm {
                offset: index - SWARM_MARKER_LEAD,
            });
        }
        if self.0.len() >= LEGACY_TRAILER_OFFSET
            && self.0[self.0.len() - LEGACY_TRAILER_OFFSET] == OP_JUMP
            && self.0[self.0.len() - LEGACY_TRAILER_OFFSET + 1] == OP_STOP
        {
            return Some(MetadataTrailer::Legacy);
        }
        None
    }

    /// Returns a copy of the code with any recognized metadata trailer
    /// removed.
    ///
    /// Code without a recognized trailer is returned unchanged.
    #[must_use]
    pub fn strip_metadata(&self) -> Self {
        match self.trailer() {
            Some(MetadataTrailer::Swarm {
                offset,
            }) => Self(self.0[..offset].to_vec()),
            Some(MetadataTrailer::Legacy) => {
                Self(self.0[..self.0.len() - LEGACY_HASH_LEN].to_vec())
            }
            None => self.clone(),
        }
    }
}

impl fmt::Display for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Bytecode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytecode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        Self::from_hex(&wire).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the index of the first occurrence of `needle` in `haystack`.
fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
