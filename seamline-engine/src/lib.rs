//! seamline-engine — the transport-engine contract.
//!
//! This crate specifies the surface of an external QUIC-family protocol
//! engine as consumed by [`seamline-session`]. The engine itself (handshake
//! cryptography, packet framing, congestion control, loss recovery) lives
//! behind the [`TransportEngine`] trait and reports what happened through a
//! polled [`EngineEvent`] queue.
//!
//! The protocol family has two wire generations:
//!
//! - a **legacy generation** (Q046/Q050) that serializes all request headers
//!   onto one dedicated header channel shared by every stream, and
//! - a **later generation** (draft-29, v1) that frames headers natively on
//!   each request stream (RFC 9114).
//!
//! ```text
//!   application writes              engine signals
//!        │                               │
//!   ┌────▼───────────┐   poll_event ┌────┴──────────┐
//!   │seamline-session│◄─────────────│TransportEngine│
//!   │ ClientSession  │─────────────►│  (black box)  │
//!   └────────────────┘ crypto_connect└───────────────┘
//!                      write_headers_*
//! ```
//!
//! [`seamline-session`]: https://docs.rs/seamline-session

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod types;
pub mod version;

pub use config::CryptoConfig;
pub use engine::{ConnectionSocket, TransportEngine};
pub use error::{EngineError, TransportErrorCode};
pub use event::{CloseFrame, CloseSource, EncryptionLevel, EngineEvent};
pub use types::{HeaderField, StreamId};
pub use version::TransportVersion;
