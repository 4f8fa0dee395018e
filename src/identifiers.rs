//! EUI-64 addressing.
//!
//! Every endpoint in the mist network (cloud services, gateways, field
//! devices) is named by a 64-bit extended unique identifier. [`Eui64`] is a
//! thin newtype over `u64` whose canonical text form is exactly sixteen
//! uppercase hex digits, which is also the form used inside routing keys.
//!
//! # Reserved Values
//!
//! | Value | Meaning |
//! |-------|---------|
//! | [`Eui64::UNSET`] | Unset/default address |
//! | [`Eui64::BROADCAST`] | Broadcast, "any" gateway |
//!
//! # Example
//!
//! ```
//! use mist_connection::Eui64;
//!
//! let eui = Eui64::new(0x1122334455667788);
//! assert_eq!(eui.to_string(), "1122334455667788");
//! assert_eq!("1122334455667788".parse::<Eui64>().unwrap(), eui);
//! assert_eq!(eui, 0x1122334455667788_u64);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Number of hex digits in the canonical text form.
const HEX_LEN: usize = 16;

/// Number of bytes in the binary form.
const BYTE_LEN: usize = 8;

// ============================================================================
// Eui64
// ============================================================================

/// A 64-bit endpoint identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Eui64(u64);

impl Eui64 {
    /// The unset/default address.
    pub const UNSET: Self = Self(0);

    /// The broadcast address, also used as the "any gateway" routing token.
    pub const BROADCAST: Self = Self(u64::MAX);

    /// Creates an identifier from its integer value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the integer value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the 8-byte big-endian form.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BYTE_LEN] {
        self.0.to_be_bytes()
    }

    /// Returns `true` for [`Eui64::UNSET`].
    #[inline]
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for [`Eui64::BROADCAST`].
    #[inline]
    #[must_use]
    pub const fn is_broadcast(self) -> bool {
        self.0 == u64::MAX
    }

    /// Parses the canonical sixteen hex digit form. Either case is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] unless `text` is exactly sixteen
    /// hex digits.
    pub fn parse_hex(text: &str) -> Result<Self> {
        if text.len() != HEX_LEN {
            return Err(Error::invalid_identifier(text, "expected 16 hex digits"));
        }
        if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid_identifier(text, "non-hex character"));
        }

        u64::from_str_radix(text, 16)
            .map(Self)
            .map_err(|_| Error::invalid_identifier(text, "not a 64-bit value"))
    }

    /// Builds an identifier from an 8-byte big-endian buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `bytes` is not 8 bytes long.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; BYTE_LEN] = bytes.try_into().map_err(|_| {
            Error::invalid_identifier(format!("{} bytes", bytes.len()), "expected 8 bytes")
        })?;
        Ok(Self(u64::from_be_bytes(array)))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<u64> for Eui64 {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Eui64> for u64 {
    #[inline]
    fn from(eui: Eui64) -> Self {
        eui.0
    }
}

impl From<[u8; BYTE_LEN]> for Eui64 {
    #[inline]
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }
}

impl TryFrom<&[u8]> for Eui64 {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_be_slice(bytes)
    }
}

impl TryFrom<&str> for Eui64 {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::parse_hex(text)
    }
}

impl FromStr for Eui64 {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse_hex(text)
    }
}

// ============================================================================
// Comparison With Raw Integers
// ============================================================================

impl PartialEq<u64> for Eui64 {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Eui64> for u64 {
    #[inline]
    fn eq(&self, other: &Eui64) -> bool {
        *self == other.0
    }
}

impl PartialOrd<u64> for Eui64 {
    #[inline]
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialOrd<Eui64> for u64 {
    #[inline]
    fn partial_cmp(&self, other: &Eui64) -> Option<Ordering> {
        self.partial_cmp(&other.0)
    }
}

// ============================================================================
// Display / Serde
// ============================================================================

impl fmt::Display for Eui64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl Serialize for Eui64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Eui64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
