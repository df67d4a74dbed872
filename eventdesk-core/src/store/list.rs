//! Read access to the store.

use super::EventStore;
use crate::error::{EventError, EventResult};
use crate::event::{Event, EventId};

impl EventStore {
    /// All events, in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Look up an event by id. Absence is not an error.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The store's events as a pretty-printed JSON array, in insertion order.
    pub fn to_json(&self) -> EventResult<String> {
        serde_json::to_string_pretty(&self.events)
            .map_err(|e| EventError::Serialization(e.to_string()))
    }
}
