//! seamline-session — client-side session adapter for a QUIC-family
//! transport.
//!
//! [`ClientSession`] binds a generic connection-framework contract (observer
//! callbacks, watermark backpressure, writability scheduling) to an external
//! transport engine behind [`seamline_engine::TransportEngine`]. Neither
//! side sees the other's internals: engine signals drain from an event
//! queue, framework reactions go through observer traits.
//!
//! # Architecture
//!
//! ```text
//!   framework dispatcher              application writes
//!        │ connect/flush_writes/           │ create_outgoing_stream
//!        │ process_events                  │ write_request_headers
//!   ┌────▼──────────────────────────────────▼───┐
//!   │              ClientSession                │
//!   │  state machine · stream factory/registry  │
//!   │  watermark monitor · lifecycle bridge     │
//!   └────┬──────────────────────────────────▲───┘
//!        │ crypto_connect, write_headers_*  │ EngineEvent
//!   ┌────▼──────────────────────────────────┴───┐
//!   │       TransportEngine (black box)         │
//!   └───────────────────────────────────────────┘
//! ```
//!
//! Lifecycle guarantees: exactly one `on_connected` (whichever handshake
//! completion trigger fires first wins), exactly one terminal `on_closed`,
//! events delivered in the order they logically occur. Client sessions
//! initiate every stream; a peer-initiated stream is a fatal invariant
//! violation.
//!
//! Everything here is single-threaded and non-blocking: state is owned and
//! mutated only on the thread running the connection's event dispatcher.
//!
//! # Example
//!
//! ```rust,ignore
//! use seamline_session::{ClientSession, SessionConfig};
//!
//! let mut session = ClientSession::new(config, connection)?;
//! session.initialize(Box::new(callbacks));
//! session.set_http_callbacks(Box::new(http_callbacks));
//! session.set_codec_config(HeaderCodecConfig::default(), CodecStats::new());
//! session.connect()?;
//!
//! // Driven by the framework's event loop:
//! session.process_events();
//! session.flush_writes();
//!
//! let stream = session.create_outgoing_stream();
//! session.write_request_headers(stream, &headers, false)?;
//! ```

pub mod callbacks;
pub mod config;
pub mod error;
pub mod metrics;
pub mod session;
pub mod stream;
pub mod watermark;

pub use callbacks::{ConnectionCallbacks, HttpConnectionCallbacks};
pub use config::{HeaderCodecConfig, PushPromiseIndex, SessionConfig};
pub use error::{GoAwayErrorCode, SessionError, map_goaway_error};
pub use metrics::CodecStats;
pub use session::{ClientSession, SessionState};
pub use stream::ClientStream;
pub use watermark::{WatermarkCrossing, WatermarkMonitor};

// Re-export the engine contract for convenience.
pub use seamline_engine as engine;
