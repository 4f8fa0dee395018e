//! Broker transport layer.
//!
//! This module holds the broker abstraction the connection loop runs
//! against, its AMQP and in-memory implementations, and the per-session
//! outbound buffer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐                         ┌─────────────────┐
//! │  ConnectionManager   │        AMQP 0-9-1       │  Broker         │
//! │                      │  publish mist.<GW>.<D>  │  (exchange)     │
//! │  Session → Outbox    │────────────────────────►│                 │
//! │  BrokerLink          │◄────────────────────────│  cloud.<GW>.<D> │
//! └──────────────────────┘   consume session queue └─────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `amqp` | `lapin` backed [`AmqpBroker`] |
//! | `broker` | [`Broker`] and [`BrokerLink`] traits |
//! | `memory` | In-process [`MemoryBroker`] |
//! | `session` | [`Session`] outbound buffer |

// ============================================================================
// Submodules
// ============================================================================

/// AMQP broker implementation.
pub mod amqp;

/// Broker traits.
pub mod broker;

/// In-process broker.
pub mod memory;

/// Per-epoch outbound buffer.
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

pub use amqp::AmqpBroker;
pub use broker::{Broker, BrokerLink, Frame};
pub use memory::{Binding, MemoryBroker, Published};
pub use session::{Outbox, Session};
