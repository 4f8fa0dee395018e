//! Connection loop timing.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use mist_connection::ConnectionOptions;
//!
//! let options = ConnectionOptions::new()
//!     .with_poll_interval(Duration::from_millis(250))
//!     .with_backoff_ceiling(Duration::from_secs(30));
//!
//! assert_eq!(options.backoff_floor, Duration::from_secs(1));
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default wait for one inbound frame.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default first reconnect delay.
pub const DEFAULT_BACKOFF_FLOOR: Duration = Duration::from_secs(1);

/// Default upper bound on the reconnect delay.
pub const DEFAULT_BACKOFF_CEILING: Duration = Duration::from_secs(60);

// ============================================================================
// ConnectionOptions
// ============================================================================

/// Timing knobs for the connection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Maximum wait for one inbound frame. Also bounds outbound latency.
    pub poll_interval: Duration,

    /// Reconnect delay after the first failure.
    pub backoff_floor: Duration,

    /// Upper bound for the doubling reconnect delay.
    pub backoff_ceiling: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl ConnectionOptions {
    /// Creates options with the default timings.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            backoff_floor: DEFAULT_BACKOFF_FLOOR,
            backoff_ceiling: DEFAULT_BACKOFF_CEILING,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl ConnectionOptions {
    /// Sets the inbound poll interval.
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the first reconnect delay.
    #[inline]
    #[must_use]
    pub fn with_backoff_floor(mut self, floor: Duration) -> Self {
        self.backoff_floor = floor;
        self
    }

    /// Sets the reconnect delay cap.
    #[inline]
    #[must_use]
    pub fn with_backoff_ceiling(mut self, ceiling: Duration) -> Self {
        self.backoff_ceiling = ceiling;
        self
    }
}

// ============================================================================
// Validation
// ============================================================================

impl ConnectionOptions {
    /// Returns a description of the first invalid setting, if any.
    pub(crate) fn problem(&self) -> Option<&'static str> {
        if self.poll_interval.is_zero() {
            Some("poll interval must be non-zero")
        } else if self.backoff_floor.is_zero() {
            Some("backoff floor must be non-zero")
        } else if self.backoff_ceiling < self.backoff_floor {
            Some("backoff ceiling must not be below the floor")
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
