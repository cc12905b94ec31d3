use crate::error::{EngineError, TransportErrorCode};
use crate::event::EngineEvent;
use crate::types::{HeaderField, StreamId};
use crate::version::TransportVersion;

/// Contract of the external transport-protocol engine.
///
/// The engine owns connection establishment, encryption, framing, flow
/// control and loss recovery. A session drives it through this trait and
/// observes it through the [`EngineEvent`] queue; neither side sees the
/// other's internals.
///
/// All methods are called from the single thread running the connection's
/// event dispatcher.
pub trait TransportEngine {
    /// Begin version negotiation and the cryptographic handshake. The
    /// connection may fail here if the peer supports none of the offered
    /// versions.
    fn crypto_connect(&mut self) -> Result<(), EngineError>;

    /// Cap the number of server-initiated push ids the peer may use.
    fn set_max_push_id(&mut self, max_push_id: u64);

    /// Limit the decoded size of a received header list.
    fn set_max_inbound_header_list_size(&mut self, bytes: u64);

    /// The negotiated version, or the first offered one while negotiation
    /// is still in progress.
    fn version(&self) -> TransportVersion;

    /// Whether any control, header-channel, or stream data is buffered and
    /// unsent.
    fn has_data_to_write(&self) -> bool;

    /// Flush buffered control, header-channel, and stream data toward the
    /// socket. Called when the framework reports the socket writable.
    fn flush_writes(&mut self);

    /// Allocate the next client-initiated bidirectional stream id.
    fn next_outgoing_bidi_stream_id(&mut self) -> StreamId;

    /// Release engine-side state for a finished stream.
    fn destroy_stream(&mut self, stream: StreamId);

    /// Serialize a header block onto the dedicated header channel on behalf
    /// of `stream`. Legacy generation only. Returns the number of bytes
    /// the block serialized to.
    fn write_headers_on_header_channel(
        &mut self,
        stream: StreamId,
        headers: &[HeaderField],
        fin: bool,
    ) -> Result<usize, EngineError>;

    /// Serialize a header block as native frames on `stream` itself.
    /// HTTP/3 generation only. Returns the number of bytes written.
    fn write_headers_on_stream(
        &mut self,
        stream: StreamId,
        headers: &[HeaderField],
        fin: bool,
    ) -> Result<usize, EngineError>;

    /// Bytes buffered but not yet sent on the dedicated header channel.
    /// Always zero for the HTTP/3 generation.
    fn header_channel_buffered_bytes(&self) -> u64;

    /// Whether the underlying connection is still connected.
    fn is_connected(&self) -> bool;

    /// Close the underlying connection with the given code and reason.
    fn close(&mut self, code: TransportErrorCode, reason: &str);

    /// Drain the next pending engine event, if any.
    fn poll_event(&mut self) -> Option<EngineEvent>;
}

/// Framework-specific socket setup, exposed only by the concrete connection
/// type a client session constructs and owns.
///
/// Sessions require this capability at the type level
/// (`E: TransportEngine + ConnectionSocket`), so no runtime type inspection
/// is needed to reach it.
pub trait ConnectionSocket {
    /// Prepare the connection's socket for use by the framework's event
    /// loop (binding, socket options, read scheduling).
    fn setup_socket(&mut self) -> Result<(), EngineError>;
}
