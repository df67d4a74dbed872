//! Replace events in place.

use tracing::debug;

use super::EventStore;
use crate::error::{EventError, EventResult};
use crate::event::{Event, EventDraft, EventId};

impl EventStore {
    /// Replace every field of the event except its id, keeping its position.
    ///
    /// Fails with `NotFound` if no event has this id, and with the draft's
    /// validation error if it is invalid. The store is unchanged on failure.
    pub fn update(&mut self, id: EventId, draft: EventDraft) -> EventResult<Event> {
        let index = self.position(id).ok_or(EventError::NotFound(id))?;
        let event = draft.into_event(id)?;

        debug!(%id, title = %event.title, "updated event");
        self.events[index] = event.clone();
        Ok(event)
    }
}
