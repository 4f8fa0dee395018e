//! Logical mist message.
//!
//! An [`Envelope`] carries addressing, an application payload and the radio
//! metadata reported by the gateway. It converts to and from the protobuf
//! [`MistMessage`] and the raw frame body.
//!
//! # Example
//!
//! ```
//! use mist_connection::Envelope;
//!
//! let envelope = Envelope::new()
//!     .with_source(1_u64)
//!     .with_destination(2_u64)
//!     .with_amid(0x1234)
//!     .with_payload(b"HelloWorld!".to_vec());
//!
//! assert_eq!(
//!     envelope.to_string(),
//!     "0000000000000001->0000000000000002[1234]: 48656C6C6F576F726C6421"
//! );
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::SystemTime;

use prost::Message;

use crate::error::Result;
use crate::identifiers::Eui64;

use super::wire::{
    MistMessage, millis_to_system_time, system_time_to_millis, timestamp_from_millis,
    timestamp_to_millis,
};

// ============================================================================
// Constants
// ============================================================================

/// RSSI value meaning "not measured".
pub const RSSI_UNKNOWN: i32 = -128;

// ============================================================================
// Envelope
// ============================================================================

/// One mist message.
///
/// Address fields are always [`Eui64`]; the `with_*` setters accept anything
/// convertible, including raw `u64` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Originating endpoint. Unset means "this connection" when sending.
    pub source: Eui64,
    /// Target endpoint.
    pub destination: Eui64,
    /// Gateway to route through. Unset means "use the connection default".
    pub gateway: Eui64,
    /// Application message id, used to pick a receiver.
    pub amid: u32,
    /// Application payload.
    pub payload: Vec<u8>,
    /// Received signal strength, [`RSSI_UNKNOWN`] if not measured.
    pub rssi: i32,
    /// Link quality indicator.
    pub lqi: u32,
    /// Radio group.
    pub group: u32,
    /// Radio channel.
    pub channel: u32,
    /// Creation or capture time. Millisecond resolution on the wire.
    pub timestamp: SystemTime,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            source: Eui64::UNSET,
            destination: Eui64::UNSET,
            gateway: Eui64::UNSET,
            amid: 0,
            payload: Vec::new(),
            rssi: RSSI_UNKNOWN,
            lqi: 0,
            group: 0,
            channel: 0,
            timestamp: SystemTime::now(),
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl Envelope {
    /// Creates an empty envelope stamped with the current time.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source address.
    #[inline]
    #[must_use]
    pub fn with_source(mut self, source: impl Into<Eui64>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the destination address.
    #[inline]
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<Eui64>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Sets an explicit gateway.
    #[inline]
    #[must_use]
    pub fn with_gateway(mut self, gateway: impl Into<Eui64>) -> Self {
        self.gateway = gateway.into();
        self
    }

    /// Sets the application message id.
    #[inline]
    #[must_use]
    pub fn with_amid(mut self, amid: u32) -> Self {
        self.amid = amid;
        self
    }

    /// Sets the payload.
    #[inline]
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Sets the timestamp.
    #[inline]
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = timestamp;
        self
    }
}

// ============================================================================
// Wire Conversion
// ============================================================================

impl Envelope {
    /// Converts to the protobuf message.
    #[must_use]
    pub fn to_mist_message(&self) -> MistMessage {
        MistMessage {
            source: self.source.as_u64(),
            destination: self.destination.as_u64(),
            gateway: self.gateway.as_u64(),
            amid: self.amid,
            payload: self.payload.clone(),
            rssi: self.rssi,
            lqi: self.lqi,
            group: self.group,
            channel: self.channel,
            timestamp: Some(timestamp_from_millis(system_time_to_millis(self.timestamp))),
        }
    }

    /// Encodes the frame body.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        self.to_mist_message().encode_to_vec()
    }

    /// Decodes a frame body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if `body` is not a
    /// valid mist message.
    pub fn decode(body: &[u8]) -> Result<Self> {
        let message = MistMessage::decode(body)?;
        Ok(Self::from(message))
    }
}

impl From<MistMessage> for Envelope {
    fn from(message: MistMessage) -> Self {
        let millis = message.timestamp.as_ref().map_or(0, timestamp_to_millis);

        Self {
            source: message.source.into(),
            destination: message.destination.into(),
            gateway: message.gateway.into(),
            amid: message.amid,
            payload: message.payload,
            rssi: message.rssi,
            lqi: message.lqi,
            group: message.group,
            channel: message.channel,
            timestamp: millis_to_system_time(millis),
        }
    }
}

impl From<&Envelope> for MistMessage {
    fn from(envelope: &Envelope) -> Self {
        envelope.to_mist_message()
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}[{:04X}]: {}",
            self.source,
            self.destination,
            self.amid,
            hex::encode_upper(&self.payload)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
