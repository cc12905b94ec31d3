use crate::error::TransportErrorCode;
use crate::types::StreamId;

/// Stage of the cryptographic handshake the connection's default
/// encryption has reached. `ForwardSecure` denotes full key establishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EncryptionLevel {
    Initial,
    ZeroRtt,
    Handshake,
    ForwardSecure,
}

/// Which endpoint closed the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSource {
    /// This endpoint initiated the close.
    Local,
    /// The peer closed the connection.
    Peer,
}

/// The close frame carried by a connection-close notification.
#[derive(Debug, Clone)]
pub struct CloseFrame {
    pub error_code: TransportErrorCode,
    pub reason: String,
}

impl CloseFrame {
    pub fn new(error_code: TransportErrorCode, reason: impl Into<String>) -> Self {
        Self {
            error_code,
            reason: reason.into(),
        }
    }
}

/// Signals produced by the transport engine for its session.
///
/// Drained via [`TransportEngine::poll_event`](crate::TransportEngine::poll_event)
/// in the order the engine produced them. The engine finishes its own
/// teardown before emitting [`ConnectionClosed`](EngineEvent::ConnectionClosed).
#[derive(Debug)]
pub enum EngineEvent {
    /// The default encryption level advanced.
    EncryptionLevelChanged(EncryptionLevel),

    /// The handshake-confirmed signal raised by some TLS variants. May
    /// arrive in addition to the forward-secure level change.
    HandshakeConfirmed,

    /// Legacy-generation GOAWAY, with an explicit error code and reason.
    GoAway {
        error_code: TransportErrorCode,
        reason: String,
    },

    /// HTTP/3 GOAWAY. The frame carries only a stream-id watermark and no
    /// error code (RFC 9114 Section 5.2).
    H3GoAway { stream_id: u64 },

    /// The peer opened a stream. `pending` is set when the stream has not
    /// yet been fully established by the engine.
    PeerStreamOpened { stream: StreamId, pending: bool },

    /// The underlying connection closed.
    ConnectionClosed {
        frame: CloseFrame,
        source: CloseSource,
    },
}
