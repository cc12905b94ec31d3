/// Wire generations of the transport protocol family.
///
/// `Q046` and `Q050` are the legacy generation: request headers are
/// serialized onto one dedicated header channel shared by all streams.
/// `Draft29` and `V1` (RFC 9000) carry HTTP/3 framing, where header blocks
/// travel natively on each request stream (RFC 9114).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportVersion {
    /// Legacy generation, wire version Q046.
    Q046,
    /// Legacy generation, wire version Q050.
    Q050,
    /// IETF draft-29. Uses HTTP/3 framing.
    Draft29,
    /// QUIC v1 (RFC 9000). Uses HTTP/3 framing.
    V1,
}

impl TransportVersion {
    /// Whether this version frames headers natively over the multiplexed
    /// transport (HTTP/3) instead of the dedicated header channel.
    pub fn uses_http3(&self) -> bool {
        matches!(self, TransportVersion::Draft29 | TransportVersion::V1)
    }

    /// Wire label, as it appears in ALPN / version negotiation.
    pub fn label(&self) -> &'static str {
        match self {
            TransportVersion::Q046 => "Q046",
            TransportVersion::Q050 => "Q050",
            TransportVersion::Draft29 => "h3-29",
            TransportVersion::V1 => "h3",
        }
    }
}

impl std::fmt::Display for TransportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
