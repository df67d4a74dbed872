//! In-memory event storage.
//!
//! Holds one session's events in insertion order. Nothing is written to disk;
//! the store lives and dies with its owner.

mod create;
mod delete;
mod list;
mod update;

use crate::event::{Event, EventId};

/// The events of one session, in insertion order.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    /// Last id handed out. Only ever increases, so deleted ids are not reused.
    last_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next created event will get.
    fn peek_id(&self) -> EventId {
        EventId::new(self.last_id + 1)
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }
}
