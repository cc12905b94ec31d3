use std::collections::HashMap;

use seamline_engine::{CryptoConfig, StreamId, TransportVersion};

use crate::error::SessionError;

/// Default cap on the decoded size of a received header list (60 kB).
pub const DEFAULT_MAX_INBOUND_HEADER_LIST_SIZE: u64 = 60 * 1000;

/// Default connection send-buffer limit. Doubles as the high watermark for
/// legacy header-channel accounting.
pub const DEFAULT_SEND_BUFFER_LIMIT: u64 = 1024 * 1024;

/// Configuration for a client session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Versions offered during negotiation, in preference order.
    pub supported_versions: Vec<TransportVersion>,
    /// Peer identity presented during handshake initiation (SNI).
    pub server_name: String,
    /// Cryptographic configuration handed to the engine.
    pub crypto: CryptoConfig,
    /// Push-promise index the engine requires for legacy versions.
    pub push_promise_index: Option<PushPromiseIndex>,
    /// Send-buffer limit; the high watermark for header-channel accounting.
    pub send_buffer_limit: u64,
    /// Cap on the decoded size of a received header list.
    pub max_inbound_header_list_size: u64,
}

impl SessionConfig {
    pub fn new(server_name: impl Into<String>, crypto: CryptoConfig) -> Self {
        Self {
            supported_versions: vec![TransportVersion::V1],
            server_name: server_name.into(),
            crypto,
            push_promise_index: None,
            send_buffer_limit: DEFAULT_SEND_BUFFER_LIMIT,
            max_inbound_header_list_size: DEFAULT_MAX_INBOUND_HEADER_LIST_SIZE,
        }
    }

    /// Validate the configuration. Called at session construction.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.supported_versions.is_empty() {
            return Err(SessionError::Config(
                "supported_versions must not be empty".into(),
            ));
        }
        if self.server_name.is_empty() {
            return Err(SessionError::Config("server_name must not be empty".into()));
        }
        if self.send_buffer_limit == 0 {
            return Err(SessionError::Config(
                "send_buffer_limit must be nonzero".into(),
            ));
        }
        let offers_legacy = self.supported_versions.iter().any(|v| !v.uses_http3());
        if offers_legacy && self.push_promise_index.is_none() {
            return Err(SessionError::MissingPushIndex);
        }
        Ok(())
    }
}

/// Header-codec configuration. Must be applied (with a stats context)
/// before any stream may be created.
#[derive(Debug, Clone)]
pub struct HeaderCodecConfig {
    /// Maximum dynamic-table capacity offered to the peer's encoder.
    pub qpack_max_table_capacity: u64,
    /// Streams allowed to block on dynamic-table references.
    pub qpack_blocked_streams: u64,
    /// Largest header list this endpoint will emit.
    pub max_field_section_size: u64,
}

impl Default for HeaderCodecConfig {
    fn default() -> Self {
        Self {
            qpack_max_table_capacity: 0,
            qpack_blocked_streams: 0,
            max_field_section_size: u64::MAX,
        }
    }
}

/// Index of server-promised resources, required by the engine for legacy
/// versions. Client sessions cap push ids at zero, so the index stays
/// empty in practice; the engine still requires the handle.
#[derive(Debug, Clone, Default)]
pub struct PushPromiseIndex {
    promised: HashMap<String, StreamId>,
}

impl PushPromiseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream id of a promised resource, if any.
    pub fn promised(&self, url: &str) -> Option<StreamId> {
        self.promised.get(url).copied()
    }

    pub fn insert(&mut self, url: impl Into<String>, stream: StreamId) {
        self.promised.insert(url.into(), stream);
    }

    pub fn remove(&mut self, url: &str) -> Option<StreamId> {
        self.promised.remove(url)
    }

    pub fn is_empty(&self) -> bool {
        self.promised.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::SessionError;

    fn crypto() -> CryptoConfig {
        let roots = rustls::RootCertStore::empty();
        let tls = rustls::ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        CryptoConfig::new(Arc::new(tls))
    }

    #[test]
    fn default_config_validates() {
        assert!(SessionConfig::new("example.com", crypto()).validate().is_ok());
    }

    #[test]
    fn empty_versions_rejected() {
        let mut config = SessionConfig::new("example.com", crypto());
        config.supported_versions.clear();
        assert!(matches!(config.validate(), Err(SessionError::Config(_))));
    }

    #[test]
    fn legacy_requires_push_index() {
        let mut config = SessionConfig::new("example.com", crypto());
        config.supported_versions = vec![TransportVersion::Q050];
        assert!(matches!(
            config.validate(),
            Err(SessionError::MissingPushIndex)
        ));

        config.push_promise_index = Some(PushPromiseIndex::new());
        assert!(config.validate().is_ok());
    }
}
