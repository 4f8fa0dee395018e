//! Routing keys and queue naming.
//!
//! Outbound frames are published with `mist.<GW>.<DEST>`. Inbound frames
//! arrive through two bindings, `cloud.<GWFILTER>.<LOCAL>` and
//! `cloud.<GWFILTER>.FFFFFFFFFFFFFFFF`, on a per-host auto-delete queue.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use crate::identifiers::Eui64;

use super::Envelope;

// ============================================================================
// Constants
// ============================================================================

/// Routing key prefix for cloud → gateway frames.
pub const OUTBOUND_PREFIX: &str = "mist";

/// Routing key prefix for gateway → cloud frames.
pub const INBOUND_PREFIX: &str = "cloud";

/// Topic wildcard matching any single gateway.
pub const ANY_GATEWAY_TOKEN: &str = "*";

// ============================================================================
// GatewayFilter
// ============================================================================

/// Which gateway a connection talks through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GatewayFilter {
    /// Any and all gateways.
    #[default]
    Any,
    /// One specific gateway.
    Gateway(Eui64),
}

impl GatewayFilter {
    /// Gateway token used in outbound routing keys when the envelope does not
    /// name one.
    #[inline]
    #[must_use]
    pub fn outbound_gateway(self) -> Eui64 {
        match self {
            Self::Any => Eui64::BROADCAST,
            Self::Gateway(gateway) => gateway,
        }
    }
}

impl From<Eui64> for GatewayFilter {
    fn from(gateway: Eui64) -> Self {
        Self::Gateway(gateway)
    }
}

impl From<Option<Eui64>> for GatewayFilter {
    fn from(gateway: Option<Eui64>) -> Self {
        gateway.map_or(Self::Any, Self::Gateway)
    }
}

impl fmt::Display for GatewayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY_GATEWAY_TOKEN),
            Self::Gateway(gateway) => fmt::Display::fmt(gateway, f),
        }
    }
}

// ============================================================================
// Addressing
// ============================================================================

/// Addressing rules for one connection identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addressing {
    /// This connection's own address.
    pub identity: Eui64,
    /// Configured gateway filter.
    pub gateway: GatewayFilter,
}

impl Addressing {
    /// Creates addressing rules for `identity` behind `gateway`.
    #[inline]
    #[must_use]
    pub fn new(identity: Eui64, gateway: GatewayFilter) -> Self {
        Self { identity, gateway }
    }

    /// Routing key for publishing `envelope`.
    #[must_use]
    pub fn routing_key(&self, envelope: &Envelope) -> String {
        let gateway = if envelope.gateway.is_unset() {
            self.gateway.outbound_gateway()
        } else {
            envelope.gateway
        };

        format!("{OUTBOUND_PREFIX}.{gateway}.{}", envelope.destination)
    }

    /// The two subscription patterns bound for every session.
    #[must_use]
    pub fn binding_keys(&self) -> [String; 2] {
        [
            format!("{INBOUND_PREFIX}.{}.{}", self.gateway, self.identity),
            format!("{INBOUND_PREFIX}.{}.{}", self.gateway, Eui64::BROADCAST),
        ]
    }

    /// Name of the session queue for `host_name`.
    #[must_use]
    pub fn queue_name(&self, host_name: &str) -> String {
        format!("{INBOUND_PREFIX}-{host_name}-{}", self.gateway)
    }

    /// Fills an unset source with this connection's identity.
    #[inline]
    pub fn resolve_source(&self, envelope: &mut Envelope) {
        if envelope.source.is_unset() {
            envelope.source = self.identity;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
