//! Reconnect delay policy.
//!
//! The delay starts at the floor, doubles after every failed attempt and is
//! capped at the ceiling. A successful connection resets it to the floor.
//! With the defaults the waits are 1, 2, 4, 8, 16, 32, 60, 60, ... seconds.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tokio_util::sync::CancellationToken;

// ============================================================================
// Backoff
// ============================================================================

/// Doubling, capped reconnect delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backoff {
    floor: Duration,
    ceiling: Duration,
    current: Duration,
}

impl Backoff {
    /// Creates a policy starting at `floor` and capped at `ceiling`.
    #[must_use]
    pub fn new(floor: Duration, ceiling: Duration) -> Self {
        Self {
            floor,
            ceiling,
            current: floor,
        }
    }

    /// The delay the next wait will use.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Duration {
        self.current
    }

    /// Resets to the floor after a successful connection.
    #[inline]
    pub fn reset(&mut self) {
        self.current = self.floor;
    }

    /// Doubles the delay, capped at the ceiling.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current.saturating_mul(2).min(self.ceiling);
    }

    /// Waits the current delay, then advances.
    ///
    /// Returns `false` without advancing if `cancel` fires first.
    pub async fn wait(&mut self, cancel: &CancellationToken) -> bool {
        tokio::select! {
            () = cancel.cancelled() => false,
            () = tokio::time::sleep(self.current) => {
                self.advance();
                true
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
