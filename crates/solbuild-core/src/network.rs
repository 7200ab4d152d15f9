// crates/solbuild-core/src/network.rs
// ============================================================================
// Module: Network Identifiers
// Description: Wildcard-capable network identifiers for build configurations.
// Purpose: Provide a stable wire form for network selection by external tools.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A network identifier selects which chain a configured endpoint belongs
//! to. The wildcard form `"*"` matches any network. Concrete identifiers are
//! opaque strings; numeric wire forms are accepted on input and normalized
//! to their decimal string rendering so a loaded record has exactly one
//! canonical shape.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Wire form of the wildcard network identifier.
pub const NETWORK_ID_WILDCARD: &str = "*";

// ============================================================================
// SECTION: Network Identifier
// ============================================================================

/// Network identifier for a configured endpoint.
///
/// # Invariants
/// - [`NetworkId::Any`] serializes as the string `"*"` and matches every
///   network.
/// - [`NetworkId::Id`] payloads are opaque; no normalization or validation
///   is applied by this type beyond decimal rendering of numeric input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum NetworkId {
    /// Wildcard identifier matching any network.
    #[default]
    Any,
    /// Concrete network identifier.
    Id(String),
}

impl NetworkId {
    /// Creates a network identifier from a wire string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == NETWORK_ID_WILDCARD { Self::Any } else { Self::Id(value) }
    }

    /// Returns the wire form of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => NETWORK_ID_WILDCARD,
            Self::Id(id) => id,
        }
    }

    /// Returns true when this identifier accepts the given concrete network.
    #[must_use]
    pub fn matches(&self, network: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => id == network,
        }
    }

    /// Returns true for the wildcard identifier.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NetworkIdVisitor)
    }
}

/// Serde visitor accepting string and non-negative integer wire forms.
struct NetworkIdVisitor;

impl Visitor<'_> for NetworkIdVisitor {
    type Value = NetworkId;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a network id string, \"*\", or a non-negative integer")
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(NetworkId::new(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(NetworkId::Id(value.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map(|id| NetworkId::Id(id.to_string()))
            .map_err(|_| E::custom("network id must be non-negative"))
    }
}
