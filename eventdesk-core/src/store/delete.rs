//! Remove events from the store.

use tracing::debug;

use super::EventStore;
use crate::event::EventId;

impl EventStore {
    /// Remove the event with this id. Returns whether anything was removed.
    pub fn delete(&mut self, id: EventId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.events.remove(index);
                debug!(%id, "deleted event");
                true
            }
            None => false,
        }
    }
}
