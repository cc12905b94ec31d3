use std::sync::Arc;

/// Cryptographic configuration handed to the engine for the client
/// handshake.
#[derive(Clone)]
pub struct CryptoConfig {
    /// TLS client configuration. The engine drives the handshake; the
    /// session only carries the handle.
    pub tls: Arc<rustls::ClientConfig>,
}

impl CryptoConfig {
    pub fn new(tls: Arc<rustls::ClientConfig>) -> Self {
        Self { tls }
    }
}

impl std::fmt::Debug for CryptoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoConfig").finish_non_exhaustive()
    }
}
