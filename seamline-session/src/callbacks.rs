use seamline_engine::{CloseSource, TransportErrorCode};

use crate::error::GoAwayErrorCode;

/// Connection-lifecycle observer registered by the framework.
///
/// A session raises `on_connected` at most once (when the handshake
/// completes) and `on_closed` exactly once (when the underlying transport
/// reports closure). The watermark methods are backpressure advisories and
/// default to no-ops.
///
/// Callbacks run on the thread driving the session; no synchronization is
/// required.
pub trait ConnectionCallbacks {
    /// The handshake reached full key establishment.
    fn on_connected(&mut self);

    /// The underlying connection closed. Terminal: the session must not be
    /// asked to write or create streams afterwards.
    fn on_closed(&mut self, error_code: TransportErrorCode, source: CloseSource);

    /// Buffered header-channel bytes rose above the high watermark.
    fn on_above_write_buffer_high_watermark(&mut self) {}

    /// Buffered header-channel bytes fell back under the low watermark.
    fn on_below_write_buffer_low_watermark(&mut self) {}
}

/// HTTP-level observer. Optional: a session that has not finished
/// initialization has none registered, and GOAWAY notifications received
/// before registration are dropped, not queued.
pub trait HttpConnectionCallbacks {
    /// The peer will stop accepting new streams.
    fn on_goaway(&mut self, error_code: GoAwayErrorCode);
}
