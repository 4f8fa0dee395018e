//! Broker abstraction.
//!
//! The connection loop talks to the message broker only through these two
//! traits. [`Broker`] opens links; a [`BrokerLink`] is one live broker
//! connection with an inbound (consume) channel and an outbound (publish)
//! channel.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

// ============================================================================
// Frame
// ============================================================================

/// One raw frame received from the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Routing key the frame was published with.
    pub routing_key: String,
    /// Encoded message body.
    pub body: Vec<u8>,
}

impl Frame {
    /// Creates a frame.
    #[inline]
    #[must_use]
    pub fn new(routing_key: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            routing_key: routing_key.into(),
            body: body.into(),
        }
    }
}

// ============================================================================
// Broker
// ============================================================================

/// Factory for broker links.
#[async_trait]
pub trait Broker: Send + Sync + 'static {
    /// Opens a new link using the connection string `uri`.
    ///
    /// # Errors
    ///
    /// Any transport or protocol failure; the caller backs off and retries.
    async fn open(&self, uri: &str) -> Result<Box<dyn BrokerLink>>;
}

// ============================================================================
// BrokerLink
// ============================================================================

/// One open broker connection.
///
/// Owned exclusively by the connection task.
#[async_trait]
pub trait BrokerLink: Send {
    /// Declares an auto-delete queue and returns its broker-assigned name.
    async fn declare_queue(&mut self, name: &str) -> Result<String>;

    /// Binds `queue` to `exchange` with `routing_key`.
    async fn bind_queue(&mut self, queue: &str, exchange: &str, routing_key: &str) -> Result<()>;

    /// Starts consuming `queue` without acknowledgements.
    async fn consume(&mut self, queue: &str) -> Result<()>;

    /// Waits up to `wait` for the next inbound frame.
    ///
    /// Returns `Ok(None)` if nothing arrived in time.
    async fn next_frame(&mut self, wait: Duration) -> Result<Option<Frame>>;

    /// Publishes `body` to `exchange` with `routing_key`.
    async fn publish(&mut self, exchange: &str, routing_key: &str, body: &[u8]) -> Result<()>;

    /// Closes the link. Closing an already closed link succeeds.
    async fn close(&mut self) -> Result<()>;
}
