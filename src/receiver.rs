//! Inbound message receivers.
//!
//! Each application message id (amid) maps to at most one [`Receiver`].
//! A receiver is either a callback invoked on the connection task, or a
//! channel the envelope is pushed onto for the application to consume at
//! its own pace.
//!
//! # Example
//!
//! ```ignore
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Envelope>();
//! connection.register_receiver(0x0001, Receiver::invoke(|m| println!("{m}")));
//! connection.register_receiver(0x0002, tx);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tokio::sync::mpsc;
use tracing::{error, trace};

use crate::protocol::Envelope;

// ============================================================================
// Types
// ============================================================================

/// Callback type for [`Receiver::Invoke`].
///
/// Runs on the connection task, so it should return quickly.
pub type ReceiverFn = Arc<dyn Fn(Envelope) + Send + Sync>;

// ============================================================================
// Receiver
// ============================================================================

/// Delivery target for one amid.
#[derive(Clone)]
pub enum Receiver {
    /// Call the function with each envelope.
    Invoke(ReceiverFn),
    /// Push each envelope onto an unbounded channel.
    Enqueue(mpsc::UnboundedSender<Envelope>),
}

impl Receiver {
    /// Wraps a callback.
    #[inline]
    #[must_use]
    pub fn invoke(callback: impl Fn(Envelope) + Send + Sync + 'static) -> Self {
        Self::Invoke(Arc::new(callback))
    }

    /// Wraps a channel sender.
    #[inline]
    #[must_use]
    pub fn enqueue(sender: mpsc::UnboundedSender<Envelope>) -> Self {
        Self::Enqueue(sender)
    }
}

impl From<mpsc::UnboundedSender<Envelope>> for Receiver {
    fn from(sender: mpsc::UnboundedSender<Envelope>) -> Self {
        Self::Enqueue(sender)
    }
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke(_) => f.write_str("Receiver::Invoke"),
            Self::Enqueue(sender) => f
                .debug_struct("Receiver::Enqueue")
                .field("closed", &sender.is_closed())
                .finish(),
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// What happened to a dispatched envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No receiver registered for the amid; dropped.
    Unhandled,
    /// Callback invoked.
    Invoked,
    /// Pushed onto the channel.
    Enqueued,
    /// Channel receiver is gone; dropped.
    Rejected,
}

// ============================================================================
// ReceiverRegistry
// ============================================================================

/// Thread-safe amid → [`Receiver`] map.
///
/// Lookups clone the entry under a read lock and deliver after releasing
/// it, so callbacks may register or remove receivers themselves.
#[derive(Default)]
pub struct ReceiverRegistry {
    receivers: RwLock<FxHashMap<u32, Receiver>>,
}

impl ReceiverRegistry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `receiver` for `amid`, replacing any previous one.
    pub fn register(&self, amid: u32, receiver: impl Into<Receiver>) {
        self.receivers.write().insert(amid, receiver.into());
    }

    /// Removes the receiver for `amid`, returning it if present.
    pub fn unregister(&self, amid: u32) -> Option<Receiver> {
        self.receivers.write().remove(&amid)
    }

    /// Returns the number of registered receivers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.receivers.read().len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receivers.read().is_empty()
    }

    /// Delivers `envelope` to the receiver registered for its amid.
    pub fn dispatch(&self, envelope: Envelope) -> Dispatch {
        let receiver = self.receivers.read().get(&envelope.amid).cloned();

        match receiver {
            None => {
                trace!(amid = envelope.amid, "No receiver registered");
                Dispatch::Unhandled
            }
            Some(Receiver::Invoke(callback)) => {
                callback(envelope);
                Dispatch::Invoked
            }
            Some(Receiver::Enqueue(sender)) => {
                let amid = envelope.amid;
                match sender.send(envelope) {
                    Ok(()) => Dispatch::Enqueued,
                    Err(_) => {
                        error!(amid, "Receiver channel closed, envelope dropped");
                        Dispatch::Rejected
                    }
                }
            }
        }
    }
}

impl fmt::Debug for ReceiverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiverRegistry")
            .field("count", &self.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
