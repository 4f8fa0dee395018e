//! AMQP 0-9-1 broker backed by `lapin`.
//!
//! Each link owns one `lapin::Connection` with two channels: one for the
//! consumer, one for publishing. Consumption uses no-ack, exclusive mode.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use lapin::options::{
    BasicConsumeOptions, BasicPublishOptions, QueueBindOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, Consumer};
use tokio::time::timeout;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{Error, Result};

use super::broker::{Broker, BrokerLink, Frame};

// ============================================================================
// Constants
// ============================================================================

/// AMQP reply code for a normal close.
const REPLY_SUCCESS: u16 = 200;

// ============================================================================
// AmqpBroker
// ============================================================================

/// Production [`Broker`] connecting to a real AMQP server.
#[derive(Clone, Default)]
pub struct AmqpBroker {
    properties: ConnectionProperties,
}

impl fmt::Debug for AmqpBroker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmqpBroker")
            .field("locale", &self.properties.locale)
            .finish_non_exhaustive()
    }
}

impl AmqpBroker {
    /// Creates a broker with default connection properties.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a broker with custom `lapin` connection properties.
    #[inline]
    #[must_use]
    pub fn with_properties(properties: ConnectionProperties) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl Broker for AmqpBroker {
    async fn open(&self, uri: &str) -> Result<Box<dyn BrokerLink>> {
        let connection = Connection::connect(uri, self.properties.clone()).await?;
        let incoming = connection.create_channel().await?;
        let outgoing = connection.create_channel().await?;

        debug!(
            incoming = incoming.id(),
            outgoing = outgoing.id(),
            "AMQP channels opened"
        );

        Ok(Box::new(AmqpLink {
            connection,
            incoming,
            outgoing,
            consumer: None,
        }))
    }
}

// ============================================================================
// AmqpLink
// ============================================================================

/// One live AMQP connection.
struct AmqpLink {
    connection: Connection,
    incoming: Channel,
    outgoing: Channel,
    consumer: Option<Consumer>,
}

#[async_trait]
impl BrokerLink for AmqpLink {
    async fn declare_queue(&mut self, name: &str) -> Result<String> {
        let options = QueueDeclareOptions {
            auto_delete: true,
            ..QueueDeclareOptions::default()
        };
        let queue = self
            .incoming
            .queue_declare(name, options, FieldTable::default())
            .await?;

        Ok(queue.name().as_str().to_owned())
    }

    async fn bind_queue(&mut self, queue: &str, exchange: &str, routing_key: &str) -> Result<()> {
        self.incoming
            .queue_bind(
                queue,
                exchange,
                routing_key,
                QueueBindOptions::default(),
                FieldTable::default(),
            )
            .await?;

        Ok(())
    }

    async fn consume(&mut self, queue: &str) -> Result<()> {
        let options = BasicConsumeOptions {
            no_ack: true,
            exclusive: true,
            ..BasicConsumeOptions::default()
        };
        let tag = format!("mist-{}", Uuid::new_v4());
        let consumer = self
            .incoming
            .basic_consume(queue, &tag, options, FieldTable::default())
            .await?;

        self.consumer = Some(consumer);
        Ok(())
    }

    async fn next_frame(&mut self, wait: Duration) -> Result<Option<Frame>> {
        let consumer = self
            .consumer
            .as_mut()
            .ok_or_else(|| Error::connection("next_frame called before consume"))?;

        match timeout(wait, consumer.next()).await {
            Err(_) => Ok(None),
            Ok(None) => Err(Error::ConnectionClosed),
            Ok(Some(Err(e))) => Err(e.into()),
            Ok(Some(Ok(delivery))) => Ok(Some(Frame {
                routing_key: delivery.routing_key.as_str().to_owned(),
                body: delivery.data,
            })),
        }
    }

    async fn publish(&mut self, exchange: &str, routing_key: &str, body: &[u8]) -> Result<()> {
        let confirm = self
            .outgoing
            .basic_publish(
                exchange,
                routing_key,
                BasicPublishOptions::default(),
                body,
                BasicProperties::default(),
            )
            .await?;

        // Without publisher confirms this resolves immediately.
        confirm.await?;
        trace!(routing_key, len = body.len(), "Published");
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.consumer = None;
        match self.connection.close(REPLY_SUCCESS, "closing").await {
            Ok(()) => Ok(()),
            Err(lapin::Error::InvalidConnectionState(state)) => {
                debug!(?state, "Connection already closed");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
