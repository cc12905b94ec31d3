use seamline_engine::{EngineError, TransportErrorCode};

/// Errors returned by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The transport engine reported a failure.
    #[error("engine: {0}")]
    Engine(#[from] EngineError),

    /// Session configuration was rejected.
    #[error("config: {0}")]
    Config(String),

    /// A legacy wire version was offered without a push promise index.
    #[error("legacy version offered without a push promise index")]
    MissingPushIndex,
}

/// GOAWAY error codes in the connection framework's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoAwayErrorCode {
    NoError,
    Other,
}

/// Translate an engine error code into the framework's GOAWAY vocabulary.
///
/// A closed mapping, not a passthrough: the framework only distinguishes a
/// clean shutdown from everything else.
pub fn map_goaway_error(code: TransportErrorCode) -> GoAwayErrorCode {
    match code {
        TransportErrorCode::NoError => GoAwayErrorCode::NoError,
        TransportErrorCode::InternalError
        | TransportErrorCode::HandshakeFailed
        | TransportErrorCode::InvalidVersion
        | TransportErrorCode::PeerGoingAway
        | TransportErrorCode::NetworkIdleTimeout
        | TransportErrorCode::FlowControlError => GoAwayErrorCode::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_deterministic_and_closed() {
        assert_eq!(
            map_goaway_error(TransportErrorCode::NoError),
            GoAwayErrorCode::NoError
        );
        for code in [
            TransportErrorCode::InternalError,
            TransportErrorCode::HandshakeFailed,
            TransportErrorCode::InvalidVersion,
            TransportErrorCode::PeerGoingAway,
            TransportErrorCode::NetworkIdleTimeout,
            TransportErrorCode::FlowControlError,
        ] {
            assert_eq!(map_goaway_error(code), GoAwayErrorCode::Other);
        }
    }
}
