//! Message delivery recorded in memory.
use parking_lot::Mutex;
use portal_core::{ActorId, MessageSink};

/// MessageSink that keeps every delivered line, in order.
#[derive(Debug, Default)]
pub struct Outbox {
    delivered: Mutex<Vec<(ActorId, String)>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything delivered so far.
    pub fn take(&self) -> Vec<(ActorId, String)> {
        std::mem::take(&mut *self.delivered.lock())
    }

    /// Lines delivered to `recipient`, without draining.
    pub fn lines_for(&self, recipient: ActorId) -> Vec<String> {
        self.delivered
            .lock()
            .iter()
            .filter(|(actor, _)| *actor == recipient)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.lock().is_empty()
    }
}

impl MessageSink for Outbox {
    fn deliver(&self, recipient: ActorId, text: &str) {
        tracing::trace!(%recipient, text, "deliver");
        self.delivered.lock().push((recipient, text.to_owned()));
    }
}
