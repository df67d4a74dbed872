//! Add events to the store.

use tracing::debug;

use super::EventStore;
use crate::error::EventResult;
use crate::event::{Event, EventDraft};

impl EventStore {
    /// Validate the draft, assign it a fresh id and append it.
    ///
    /// Fails with `Validation` on an empty title and `MalformedDate` on an
    /// unparseable date or time. The store is unchanged on failure.
    pub fn create(&mut self, draft: EventDraft) -> EventResult<Event> {
        // A rejected draft must not burn an id
        let event = draft.into_event(self.peek_id())?;
        self.last_id = event.id.get();

        debug!(id = %event.id, title = %event.title, "created event");
        self.events.push(event.clone());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{art_workshop, team_sync};
    use super::*;
    use crate::error::EventError;

    #[test]
    fn create_appends_with_fresh_ids() {
        let mut store = EventStore::new();
        let a = store.create(team_sync()).unwrap();
        let b = store.create(art_workshop()).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id, a.id);
        assert_eq!(store.list()[1].id, b.id);
    }

    #[test]
    fn created_event_can_be_fetched() {
        let mut store = EventStore::new();
        let created = store.create(art_workshop()).unwrap();

        assert_eq!(store.get(created.id), Some(&created));
    }

    #[test]
    fn empty_title_leaves_store_unchanged() {
        let mut store = EventStore::new();
        store.create(team_sync()).unwrap();

        let mut draft = art_workshop();
        draft.title.clear();
        let err = store.create(draft).unwrap_err();

        assert!(matches!(err, EventError::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejected_draft_does_not_consume_an_id() {
        let mut store = EventStore::new();
        let first = store.create(team_sync()).unwrap();
        assert!(store.create(EventDraft::new("", "2024-01-01", "10:00")).is_err());
        let second = store.create(art_workshop()).unwrap();

        assert_eq!(second.id.get(), first.id.get() + 1);
    }
}
