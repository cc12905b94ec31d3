//! Outgoing request streams and their registry.
//!
//! Client sessions create only client-initiated bidirectional streams. The
//! session owns the registry, so every stream's lifetime is bounded by its
//! session's.

use std::collections::HashMap;

use seamline_engine::StreamId;

/// State of one outgoing request stream.
#[derive(Debug)]
pub struct ClientStream {
    id: StreamId,
    fin_sent: bool,
}

impl ClientStream {
    pub(crate) fn new(id: StreamId) -> Self {
        Self {
            id,
            fin_sent: false,
        }
    }

    pub fn id(&self) -> StreamId {
        self.id
    }

    /// Whether this endpoint finished its sending side.
    pub fn fin_sent(&self) -> bool {
        self.fin_sent
    }

    pub(crate) fn mark_fin_sent(&mut self) {
        self.fin_sent = true;
    }
}

/// Registry of live outgoing streams, keyed by stream id.
#[derive(Debug, Default)]
pub(crate) struct StreamRegistry {
    streams: HashMap<StreamId, ClientStream>,
}

impl StreamRegistry {
    pub fn insert(&mut self, stream: ClientStream) {
        self.streams.insert(stream.id(), stream);
    }

    pub fn get(&self, id: StreamId) -> Option<&ClientStream> {
        self.streams.get(&id)
    }

    pub fn get_mut(&mut self, id: StreamId) -> Option<&mut ClientStream> {
        self.streams.get_mut(&id)
    }

    pub fn remove(&mut self, id: StreamId) -> Option<ClientStream> {
        self.streams.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }
}
