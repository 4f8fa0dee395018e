//! Protobuf wire message.
//!
//! Field layout of the mist frame body:
//!
//! ```text
//! message MistMessage {
//!     fixed64 source      = 1;
//!     fixed64 destination = 2;
//!     fixed64 gateway     = 3;
//!     uint32  amid        = 4;
//!     bytes   payload     = 5;
//!     sint32  rssi        = 6;
//!     uint32  lqi         = 7;
//!     uint32  group       = 8;
//!     uint32  channel     = 9;
//!     google.protobuf.Timestamp timestamp = 10;
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use prost_types::Timestamp;

// ============================================================================
// MistMessage
// ============================================================================

/// Encoded form of an [`Envelope`](super::Envelope).
#[derive(Clone, PartialEq, prost::Message)]
pub struct MistMessage {
    /// Originating endpoint.
    #[prost(fixed64, tag = "1")]
    pub source: u64,

    /// Target endpoint.
    #[prost(fixed64, tag = "2")]
    pub destination: u64,

    /// Gateway the frame passed (or should pass) through.
    #[prost(fixed64, tag = "3")]
    pub gateway: u64,

    /// Application message id.
    #[prost(uint32, tag = "4")]
    pub amid: u32,

    /// Application payload.
    #[prost(bytes = "vec", tag = "5")]
    pub payload: Vec<u8>,

    /// Received signal strength, -128 when unknown.
    #[prost(sint32, tag = "6")]
    pub rssi: i32,

    /// Link quality indicator.
    #[prost(uint32, tag = "7")]
    pub lqi: u32,

    /// Radio group.
    #[prost(uint32, tag = "8")]
    pub group: u32,

    /// Radio channel.
    #[prost(uint32, tag = "9")]
    pub channel: u32,

    /// Capture or creation time, millisecond precision.
    #[prost(message, optional, tag = "10")]
    pub timestamp: Option<Timestamp>,
}

// ============================================================================
// Timestamp Conversion
// ============================================================================

/// Milliseconds since the Unix epoch, negative for earlier times.
pub(crate) fn system_time_to_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|ms| -ms)
            .unwrap_or(i64::MIN),
    }
}

/// Inverse of [`system_time_to_millis`].
pub(crate) fn millis_to_system_time(millis: i64) -> SystemTime {
    let magnitude = Duration::from_millis(millis.unsigned_abs());
    if millis >= 0 {
        UNIX_EPOCH + magnitude
    } else {
        UNIX_EPOCH - magnitude
    }
}

/// Truncates `time` to millisecond resolution.
pub(crate) fn truncate_to_millis(time: SystemTime) -> SystemTime {
    millis_to_system_time(system_time_to_millis(time))
}

/// Builds a protobuf timestamp carrying whole milliseconds.
pub(crate) fn timestamp_from_millis(millis: i64) -> Timestamp {
    Timestamp {
        seconds: millis.div_euclid(1000),
        nanos: (millis.rem_euclid(1000) * 1_000_000) as i32,
    }
}

/// Reads a protobuf timestamp as whole milliseconds, dropping sub-ms nanos.
pub(crate) fn timestamp_to_millis(timestamp: &Timestamp) -> i64 {
    timestamp
        .seconds
        .saturating_mul(1000)
        .saturating_add(i64::from(timestamp.nanos) / 1_000_000)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use prost::Message;

    #[test]
    fn test_default_message_encodes_empty() {
        let message = MistMessage::default();
        assert!(message.encode_to_vec().is_empty());
    }

    #[test]
    fn test_negative_rssi_survives() {
        let message = MistMessage {
            rssi: -128,
            ..Default::default()
        };
        let decoded = MistMessage::decode(message.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded.rssi, -128);
    }

    #[test]
    fn test_timestamp_millis_split() {
        let ts = timestamp_from_millis(1_612_345_678_901);
        assert_eq!(ts.seconds, 1_612_345_678);
        assert_eq!(ts.nanos, 901_000_000);
        assert_eq!(timestamp_to_millis(&ts), 1_612_345_678_901);
    }

    #[test]
    fn test_timestamp_before_epoch() {
        let ts = timestamp_from_millis(-1);
        assert_eq!(ts.seconds, -1);
        assert_eq!(ts.nanos, 999_000_000);
        assert_eq!(timestamp_to_millis(&ts), -1);

        let time = millis_to_system_time(-1500);
        assert_eq!(system_time_to_millis(time), -1500);
    }

    #[test]
    fn test_truncate_to_millis() {
        let time = UNIX_EPOCH + Duration::new(10, 123_456_789);
        assert_eq!(truncate_to_millis(time), UNIX_EPOCH + Duration::from_millis(10_123));
    }
}
