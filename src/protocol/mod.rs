//! Mist protocol message types.
//!
//! This module defines the logical message, its protobuf wire form and the
//! rules that map messages onto broker routing keys.
//!
//! # Protocol Overview
//!
//! | Direction | Routing key | Body |
//! |-----------|-------------|------|
//! | Cloud → Gateway | `mist.<GW>.<DEST>` | [`MistMessage`] |
//! | Gateway → Cloud | `cloud.<GW>.<DEST>` | [`MistMessage`] |
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `envelope` | [`Envelope`] and its wire conversion |
//! | `routing` | [`Addressing`] and [`GatewayFilter`] |
//! | `wire` | Protobuf [`MistMessage`] |

// ============================================================================
// Submodules
// ============================================================================

/// Logical message and marshalling.
pub mod envelope;

/// Routing keys, bindings and queue names.
pub mod routing;

/// Protobuf wire message.
pub mod wire;

// ============================================================================
// Re-exports
// ============================================================================

pub use envelope::{Envelope, RSSI_UNKNOWN};
pub use routing::{Addressing, GatewayFilter};
pub use wire::MistMessage;
