//! Client session state machine and lifecycle event bridge.
//!
//! `ClientSession` owns its transport connection exclusively and reconciles
//! the engine's handshake/stream/flow-control state with the connection
//! framework's lifecycle: engine signals drain from the event queue and
//! surface as observer callbacks, application writes flow down through the
//! version-gated write path into the engine.

use seamline_engine::{
    CloseFrame, CloseSource, ConnectionSocket, EncryptionLevel, EngineEvent, HeaderField, StreamId,
    TransportEngine, TransportErrorCode, TransportVersion,
};
use tracing::debug;

use crate::callbacks::{ConnectionCallbacks, HttpConnectionCallbacks};
use crate::config::{HeaderCodecConfig, SessionConfig};
use crate::error::{GoAwayErrorCode, SessionError, map_goaway_error};
use crate::metrics::{self, CodecStats};
use crate::stream::{ClientStream, StreamRegistry};
use crate::watermark::{WatermarkCrossing, WatermarkMonitor};

/// Lifecycle of a client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, not yet wired to the framework.
    Uninitialized,
    /// Wired via `initialize()`, handshake not started.
    Connecting,
    /// `connect()` called, handshake in flight.
    HandshakeInProgress,
    /// Handshake complete; streams may be created.
    Connected,
    /// Peer sent GOAWAY, or a graceful close is draining.
    Closing,
    /// The underlying connection closed. Terminal.
    Closed,
}

/// One-shot latch for lifecycle events that must not fire twice.
#[derive(Debug, Default)]
struct OneShot {
    fired: bool,
}

impl OneShot {
    /// True the first time, false on every later call.
    fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    fn fired(&self) -> bool {
        self.fired
    }
}

/// A client-side session over one exclusively-owned transport connection.
///
/// `E` is the concrete connection type; requiring [`ConnectionSocket`]
/// alongside [`TransportEngine`] proves the framework-specific socket
/// capability statically, since the session constructs and owns that type.
///
/// Client sessions initiate every stream; a peer-initiated stream reported
/// by the engine is a protocol invariant violation and panics.
pub struct ClientSession<E: TransportEngine + ConnectionSocket> {
    engine: E,
    config: SessionConfig,
    state: SessionState,
    encryption_level: EncryptionLevel,
    connected_fired: OneShot,
    closed_fired: OneShot,
    callbacks: Option<Box<dyn ConnectionCallbacks>>,
    http_callbacks: Option<Box<dyn HttpConnectionCallbacks>>,
    codec_config: Option<HeaderCodecConfig>,
    codec_stats: Option<CodecStats>,
    monitor: WatermarkMonitor,
    streams: StreamRegistry,
    /// A graceful close deferred until buffered data drains.
    close_pending: Option<(TransportErrorCode, String)>,
}

impl<E: TransportEngine + ConnectionSocket> ClientSession<E> {
    /// Take exclusive ownership of `engine` and build a session around it.
    pub fn new(config: SessionConfig, mut engine: E) -> Result<Self, SessionError> {
        config.validate()?;
        engine.set_max_inbound_header_list_size(config.max_inbound_header_list_size);
        let monitor = WatermarkMonitor::new(config.send_buffer_limit);
        Ok(Self {
            engine,
            config,
            state: SessionState::Uninitialized,
            encryption_level: EncryptionLevel::Initial,
            connected_fired: OneShot::default(),
            closed_fired: OneShot::default(),
            callbacks: None,
            http_callbacks: None,
            codec_config: None,
            codec_stats: None,
            monitor,
            streams: StreamRegistry::default(),
            close_pending: None,
        })
    }

    /// Wire the session into the framework: register the connection-event
    /// observer and become the connection's event target.
    pub fn initialize(&mut self, callbacks: Box<dyn ConnectionCallbacks>) {
        assert!(
            self.state == SessionState::Uninitialized,
            "initialize() called twice"
        );
        self.callbacks = Some(callbacks);
        self.state = SessionState::Connecting;
    }

    /// Register the HTTP-level observer. Until this is called, GOAWAY
    /// notifications are dropped.
    pub fn set_http_callbacks(&mut self, callbacks: Box<dyn HttpConnectionCallbacks>) {
        self.http_callbacks = Some(callbacks);
    }

    /// Apply the header-codec configuration and stats context. Required
    /// before any stream may be created.
    pub fn set_codec_config(&mut self, codec: HeaderCodecConfig, stats: CodecStats) {
        self.codec_config = Some(codec);
        self.codec_stats = Some(stats);
    }

    /// Begin version negotiation and the cryptographic handshake.
    pub fn connect(&mut self) -> Result<(), SessionError> {
        assert!(
            self.state == SessionState::Connecting,
            "connect() before initialize()"
        );
        self.engine.setup_socket()?;
        // The connection may fail here if the server supports none of the
        // offered versions.
        self.engine.crypto_connect()?;
        if self.engine.version().uses_http3() {
            // Client sessions never accept pushed resources.
            self.engine.set_max_push_id(0);
        }
        self.state = SessionState::HandshakeInProgress;
        Ok(())
    }

    /// Drain and dispatch pending engine events, in the order the engine
    /// produced them.
    pub fn process_events(&mut self) {
        while let Some(event) = self.engine.poll_event() {
            self.handle_engine_event(event);
        }
    }

    /// Flush buffered data toward the socket. Called by the framework's
    /// writability scheduling.
    ///
    /// For the legacy generation this is where the header channel flushes,
    /// and the only place its buffered bytes are discounted from the
    /// connection watermark buffer.
    pub fn flush_writes(&mut self) {
        if self.engine.version().uses_http3() {
            self.engine.flush_writes();
        } else {
            self.monitor
                .begin_scope(self.engine.header_channel_buffered_bytes());
            self.engine.flush_writes();
            let crossing = self
                .monitor
                .end_scope(self.engine.header_channel_buffered_bytes());
            if let Some(crossing) = crossing {
                self.raise_watermark_event(crossing);
            }
        }
        self.maybe_apply_delay_close_policy();
    }

    /// Close the connection. Defers while buffered data remains, completing
    /// on a later `flush_writes` once the engine has drained.
    pub fn close(&mut self, code: TransportErrorCode, reason: &str) {
        if self.state == SessionState::Closed {
            return;
        }
        if self.engine.has_data_to_write() {
            self.close_pending = Some((code, reason.to_string()));
            self.state = SessionState::Closing;
        } else {
            self.engine.close(code, reason);
        }
    }

    // ── Stream factory ───────────────────────────────────────────────

    /// Create the next outgoing request stream.
    ///
    /// # Panics
    ///
    /// Panics if the header-codec configuration and stats context were
    /// never applied, or if the session is already closed. Both are
    /// programming errors, not recoverable conditions.
    pub fn create_outgoing_stream(&mut self) -> StreamId {
        assert!(
            self.codec_config.is_some() && self.codec_stats.is_some(),
            "stream creation before header-codec configuration and stats context are applied"
        );
        assert!(
            self.state != SessionState::Closed,
            "stream creation on a closed session"
        );
        let id = self.engine.next_outgoing_bidi_stream_id();
        debug_assert!(id.is_client_initiated() && id.is_bidirectional());
        self.streams.insert(ClientStream::new(id));
        if let Some(stats) = &self.codec_stats {
            stats.on_stream_created();
        }
        id
    }

    /// Retire an outgoing stream, releasing engine-side state. Unknown ids
    /// are ignored (the stream may already be gone after a reset).
    pub fn destroy_stream(&mut self, id: StreamId) {
        if self.streams.remove(id).is_some() {
            self.engine.destroy_stream(id);
        }
    }

    /// Serialize a request header block for `id`, on the header channel
    /// (legacy generation) or natively on the stream (HTTP/3).
    pub fn write_request_headers(
        &mut self,
        id: StreamId,
        headers: &[HeaderField],
        fin: bool,
    ) -> Result<usize, SessionError> {
        assert!(
            self.streams.get(id).is_some(),
            "header write on unknown stream {id}"
        );
        let written = if self.engine.version().uses_http3() {
            self.engine.write_headers_on_stream(id, headers, fin)?
        } else {
            // Header-channel bytes count against the connection watermark
            // buffer at the point of write: once interleaved on the shared
            // channel they can no longer be attributed to a stream. This
            // scope may nest inside the one in flush_writes(), in which
            // case the outer scope performs the crossing check.
            self.monitor
                .begin_scope(self.engine.header_channel_buffered_bytes());
            let result = self.engine.write_headers_on_header_channel(id, headers, fin);
            let crossing = self
                .monitor
                .end_scope(self.engine.header_channel_buffered_bytes());
            if let Some(crossing) = crossing {
                self.raise_watermark_event(crossing);
            }
            result?
        };
        if fin {
            if let Some(stream) = self.streams.get_mut(id) {
                stream.mark_fin_sent();
            }
        }
        if let Some(stats) = &self.codec_stats {
            stats.on_header_block_sent();
        }
        Ok(written)
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The peer identity presented during handshake initiation. Immutable
    /// after construction.
    pub fn requested_server_name(&self) -> &str {
        &self.config.server_name
    }

    /// Whether the engine has buffered data waiting to be written. Used by
    /// the framework's writability scheduling.
    pub fn has_data_to_write(&self) -> bool {
        self.engine.has_data_to_write()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn version(&self) -> TransportVersion {
        self.engine.version()
    }

    pub fn encryption_level(&self) -> EncryptionLevel {
        self.encryption_level
    }

    pub fn stream(&self, id: StreamId) -> Option<&ClientStream> {
        self.streams.get(id)
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    // ── Engine event dispatch ────────────────────────────────────────

    fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::EncryptionLevelChanged(level) => {
                self.on_encryption_level_changed(level);
            }
            EngineEvent::HandshakeConfirmed => {
                // TLS-variant completion signal; the level-based trigger
                // may already have fired.
                self.raise_connected();
            }
            EngineEvent::GoAway { error_code, reason } => {
                self.on_goaway(error_code, &reason);
            }
            EngineEvent::H3GoAway { stream_id } => {
                self.on_h3_goaway(stream_id);
            }
            EngineEvent::PeerStreamOpened { stream, pending } => {
                self.on_peer_stream_opened(stream, pending);
            }
            EngineEvent::ConnectionClosed { frame, source } => {
                self.on_connection_closed(frame, source);
            }
        }
    }

    fn on_encryption_level_changed(&mut self, level: EncryptionLevel) {
        self.encryption_level = level;
        if level == EncryptionLevel::ForwardSecure {
            self.raise_connected();
        }
    }

    fn raise_connected(&mut self) {
        // A late completion trigger after the terminal close event must not
        // resurrect the session.
        if self.closed_fired.fired() {
            return;
        }
        if !self.connected_fired.fire() {
            return;
        }
        if self.state == SessionState::HandshakeInProgress {
            self.state = SessionState::Connected;
        }
        metrics::SESSIONS_CONNECTED.increment();
        metrics::SESSIONS_ACTIVE.increment();
        debug!(server = %self.config.server_name, "session connected");
        if let Some(callbacks) = self.callbacks.as_mut() {
            callbacks.on_connected();
        }
    }

    fn on_goaway(&mut self, error_code: TransportErrorCode, reason: &str) {
        debug!(code = %error_code, reason, "GOAWAY received");
        metrics::GOAWAY_RECEIVED.increment();
        if self.state == SessionState::Connected {
            self.state = SessionState::Closing;
        }
        // No observer yet means the session is not fully initialized; the
        // notification is dropped, not queued.
        if let Some(callbacks) = self.http_callbacks.as_mut() {
            callbacks.on_goaway(map_goaway_error(error_code));
        }
    }

    fn on_h3_goaway(&mut self, stream_id: u64) {
        debug!(stream_id, "HTTP/3 GOAWAY received");
        metrics::GOAWAY_RECEIVED.increment();
        if self.state == SessionState::Connected {
            self.state = SessionState::Closing;
        }
        if let Some(callbacks) = self.http_callbacks.as_mut() {
            // The HTTP/3 GOAWAY frame has no error code field.
            callbacks.on_goaway(GoAwayErrorCode::NoError);
        }
    }

    fn on_peer_stream_opened(&mut self, stream: StreamId, pending: bool) {
        let kind = if pending { "pending" } else { "established" };
        panic!("peer-initiated {kind} stream {stream} on a client-only session");
    }

    fn on_connection_closed(&mut self, frame: CloseFrame, source: CloseSource) {
        // The engine completed its own teardown before emitting this event;
        // all that remains is the terminal lifecycle notification.
        if !self.closed_fired.fire() {
            return;
        }
        self.state = SessionState::Closed;
        self.close_pending = None;
        metrics::SESSIONS_CLOSED.increment();
        if self.connected_fired.fired() {
            metrics::SESSIONS_ACTIVE.decrement();
        }
        debug!(code = %frame.error_code, source = ?source, "connection closed");
        if let Some(callbacks) = self.callbacks.as_mut() {
            callbacks.on_closed(frame.error_code, source);
        }
    }

    // ── Internal helpers ─────────────────────────────────────────────

    fn raise_watermark_event(&mut self, crossing: WatermarkCrossing) {
        let Some(callbacks) = self.callbacks.as_mut() else {
            return;
        };
        match crossing {
            WatermarkCrossing::Above => {
                metrics::WATERMARK_ABOVE.increment();
                callbacks.on_above_write_buffer_high_watermark();
            }
            WatermarkCrossing::Below => {
                metrics::WATERMARK_BELOW.increment();
                callbacks.on_below_write_buffer_low_watermark();
            }
        }
    }

    fn maybe_apply_delay_close_policy(&mut self) {
        if self.engine.has_data_to_write() {
            return;
        }
        if let Some((code, reason)) = self.close_pending.take() {
            self.engine.close(code, &reason);
        }
    }
}

impl<E: TransportEngine + ConnectionSocket> Drop for ClientSession<E> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        // A session must only be torn down once its connection is.
        debug_assert!(
            !self.engine.is_connected(),
            "session dropped while the connection is still connected"
        );
    }
}
