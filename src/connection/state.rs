//! Observable connection lifecycle.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

// ============================================================================
// ConnectionState
// ============================================================================

/// Where the connection loop currently is.
///
/// ```text
/// Disconnected ──connect()──► Connecting ──► Bound ──► Consuming
///                                 ▲                        │
///                                 └──── Backoff ◄── error ─┘
///
/// any state ──close()──► Closed
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    /// Not started.
    #[default]
    Disconnected,
    /// Opening a broker link.
    Connecting,
    /// Queue declared and bound; consumption not started yet.
    Bound,
    /// Exchanging messages.
    Consuming,
    /// Waiting before the next attempt.
    Backoff,
    /// Stopped by `close()`. Terminal.
    Closed,
}

impl ConnectionState {
    /// Returns `true` once the loop has stopped for good.
    #[inline]
    #[must_use]
    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Bound => "bound",
            Self::Consuming => "consuming",
            Self::Backoff => "backoff",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Tests
// ============================================================================
