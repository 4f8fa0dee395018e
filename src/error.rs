//! Error types for the mist connection.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use mist_connection::{Eui64, Result};
//!
//! fn parse_gateway(text: &str) -> Result<Eui64> {
//!     let gateway: Eui64 = text.parse()?;
//!     Ok(gateway)
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`], [`Error::AlreadyConnected`] |
//! | Addressing | [`Error::InvalidIdentifier`] |
//! | Connection | [`Error::Connection`], [`Error::ConnectionClosed`], [`Error::Amqp`] |
//! | Codec | [`Error::Decode`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Transport errors never reach callers of `send` or `register_receiver`;
/// the connection loop logs them and backs off instead.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when the connection builder is missing a required value or
    /// a value fails validation.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// The connection loop is already running.
    #[error("Connection already started")]
    AlreadyConnected,

    // ========================================================================
    // Addressing Errors
    // ========================================================================
    /// Malformed EUI-64 text or byte buffer.
    #[error("Invalid identifier '{input}': {reason}")]
    InvalidIdentifier {
        /// The rejected input, rendered for diagnostics.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },

    // ========================================================================
    // Connection Errors
    // ========================================================================
    /// Broker connection failed.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// Broker link closed unexpectedly.
    #[error("Connection closed")]
    ConnectionClosed,

    /// AMQP client error.
    #[error("AMQP error: {0}")]
    Amqp(#[from] lapin::Error),

    // ========================================================================
    // Codec Errors
    // ========================================================================
    /// Frame body is not a valid mist message.
    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid identifier error.
    #[inline]
    pub fn invalid_identifier(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidIdentifier {
            input: input.into(),
            reason,
        }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a broker connection error.
    ///
    /// These are the failures the connection loop expects and answers by
    /// tearing the session down and reconnecting after a backoff delay.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::ConnectionClosed | Self::Amqp(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
