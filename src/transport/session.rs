//! Per-epoch outbound buffering.
//!
//! A [`Session`] exists for exactly one broker-connected epoch. Opening it
//! yields the receiving half, kept by the connection task, and an
//! [`Outbox`], installed where `send` can reach it. When the epoch ends the
//! outbox is withdrawn first and whatever is still buffered is discarded.

// ============================================================================
// Imports
// ============================================================================

use tokio::sync::mpsc;

use crate::protocol::Envelope;

// ============================================================================
// Outbox
// ============================================================================

/// Sending half of a session buffer.
#[derive(Debug)]
pub struct Outbox {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl Outbox {
    /// Appends `envelope` without blocking.
    ///
    /// # Errors
    ///
    /// Gives the envelope back if the session has already ended.
    pub fn push(&self, envelope: Envelope) -> Result<(), Envelope> {
        self.tx.send(envelope).map_err(|e| e.0)
    }
}

// ============================================================================
// Session
// ============================================================================

/// Receiving half of a session buffer, owned by the connection task.
#[derive(Debug)]
pub struct Session {
    epoch: u64,
    rx: mpsc::UnboundedReceiver<Envelope>,
}

impl Session {
    /// Opens a fresh, empty buffer for `epoch`.
    #[must_use]
    pub fn open(epoch: u64) -> (Self, Outbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { epoch, rx }, Outbox { tx })
    }

    /// Epoch number.
    #[inline]
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Pops the next queued envelope, if any.
    pub fn pop(&mut self) -> Option<Envelope> {
        self.rx.try_recv().ok()
    }

    /// Ends the session, returning how many envelopes were discarded.
    ///
    /// The matching [`Outbox`] should be withdrawn before calling this so
    /// that no sender can append concurrently.
    pub fn discard(mut self) -> usize {
        self.rx.close();
        let mut discarded = 0;
        while self.rx.try_recv().is_ok() {
            discarded += 1;
        }
        discarded
    }
}

// ============================================================================
// Tests
// ============================================================================
