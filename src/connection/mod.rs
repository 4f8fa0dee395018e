//! Broker connection management.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConnectionManager`] | Owns the broker loop; `send` and `register_receiver` |
//! | [`ConnectionBuilder`] | Fluent configuration builder |
//! | [`ConnectionOptions`] | Poll and backoff timings |
//! | [`ConnectionState`] | Observable lifecycle state |
//! | [`Backoff`] | Reconnect delay policy |

// ============================================================================
// Submodules
// ============================================================================

/// Reconnect delay policy.
pub mod backoff;

/// Fluent builder pattern for connection configuration.
pub mod builder;

/// Core connection implementation.
pub mod core;

/// Loop timings.
pub mod options;

/// Lifecycle states.
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use backoff::Backoff;
pub use builder::ConnectionBuilder;
pub use core::ConnectionManager;
pub use options::ConnectionOptions;
pub use state::ConnectionState;
