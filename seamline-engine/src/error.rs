use std::io;

/// Errors returned by calls into the transport engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Version negotiation or handshake initiation failed.
    #[error("connect: {0}")]
    Connect(String),

    /// Framework-specific socket setup failed.
    #[error("socket setup: {0}")]
    SocketSetup(#[from] io::Error),

    /// A write into the engine's buffers failed.
    #[error("write: {0}")]
    Write(String),

    /// The underlying connection is already closed.
    #[error("connection closed")]
    ConnectionClosed,
}

/// Connection-level error codes in the engine's own vocabulary.
///
/// A closed set: codes the adapter translates or forwards. Close frames and
/// legacy GOAWAY frames carry one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorCode {
    /// Clean termination, no error.
    NoError,
    /// Unspecified internal engine failure.
    InternalError,
    /// The cryptographic handshake failed or was rejected.
    HandshakeFailed,
    /// No version in common with the peer.
    InvalidVersion,
    /// The peer is shutting the connection down.
    PeerGoingAway,
    /// The connection idled out.
    NetworkIdleTimeout,
    /// Flow-control accounting was violated.
    FlowControlError,
}

impl TransportErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorCode::NoError => "NO_ERROR",
            TransportErrorCode::InternalError => "INTERNAL_ERROR",
            TransportErrorCode::HandshakeFailed => "HANDSHAKE_FAILED",
            TransportErrorCode::InvalidVersion => "INVALID_VERSION",
            TransportErrorCode::PeerGoingAway => "PEER_GOING_AWAY",
            TransportErrorCode::NetworkIdleTimeout => "NETWORK_IDLE_TIMEOUT",
            TransportErrorCode::FlowControlError => "FLOW_CONTROL_ERROR",
        }
    }
}

impl std::fmt::Display for TransportErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_labels() {
        assert_eq!(TransportErrorCode::NoError.to_string(), "NO_ERROR");
        assert_eq!(
            TransportErrorCode::PeerGoingAway.to_string(),
            "PEER_GOING_AWAY"
        );
    }
}
