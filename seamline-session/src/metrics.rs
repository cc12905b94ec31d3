//! seamline session metrics.
//!
//! Counters for session lifecycle, stream creation, and backpressure
//! crossings. Exposed through the metriken registry for whatever exporter
//! the embedding process runs.

use metriken::{Counter, Gauge, metric};

// ── Session lifecycle ────────────────────────────────────────────

#[metric(
    name = "seamline/sessions/connected",
    description = "Sessions whose handshake completed"
)]
pub static SESSIONS_CONNECTED: Counter = Counter::new();

#[metric(
    name = "seamline/sessions/closed",
    description = "Sessions whose connection closed"
)]
pub static SESSIONS_CLOSED: Counter = Counter::new();

#[metric(
    name = "seamline/sessions/active",
    description = "Currently connected sessions"
)]
pub static SESSIONS_ACTIVE: Gauge = Gauge::new();

#[metric(
    name = "seamline/goaway/received",
    description = "GOAWAY signals received from peers"
)]
pub static GOAWAY_RECEIVED: Counter = Counter::new();

// ── Streams and headers ──────────────────────────────────────────

#[metric(
    name = "seamline/streams/created",
    description = "Outgoing request streams created"
)]
pub static STREAMS_CREATED: Counter = Counter::new();

#[metric(
    name = "seamline/headers/blocks_sent",
    description = "Request header blocks serialized"
)]
pub static HEADER_BLOCKS_SENT: Counter = Counter::new();

// ── Backpressure ─────────────────────────────────────────────────

#[metric(
    name = "seamline/watermark/above",
    description = "High-watermark crossings on the header channel"
)]
pub static WATERMARK_ABOVE: Counter = Counter::new();

#[metric(
    name = "seamline/watermark/below",
    description = "Low-watermark crossings on the header channel"
)]
pub static WATERMARK_BELOW: Counter = Counter::new();

/// Stats context handed to the codec layer.
///
/// Stream creation requires one alongside the header-codec configuration;
/// creating a stream on a session that was never given its stats context is
/// a programming error.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecStats;

impl CodecStats {
    pub fn new() -> Self {
        CodecStats
    }

    pub fn on_stream_created(&self) {
        STREAMS_CREATED.increment();
    }

    pub fn on_header_block_sent(&self) {
        HEADER_BLOCKS_SENT.increment();
    }
}
