//! One user's working session: the event store plus the edit form's state.

use crate::error::EventResult;
use crate::event::{Event, EventDraft, EventId};
use crate::store::EventStore;

/// Whether the form is creating a new event or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Creating,
    Editing(EventId),
}

/// What a form submission did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Event),
    Updated(Event),
}

impl SubmitOutcome {
    pub fn event(&self) -> &Event {
        match self {
            SubmitOutcome::Created(e) | SubmitOutcome::Updated(e) => e,
        }
    }

    pub fn into_event(self) -> Event {
        match self {
            SubmitOutcome::Created(e) | SubmitOutcome::Updated(e) => e,
        }
    }
}

/// A session owns its store; sessions never share one.
#[derive(Debug, Default)]
pub struct Session {
    store: EventStore,
    edit: EditState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn begin_create(&mut self) {
        self.edit = EditState::Creating;
    }

    /// Start editing `id`. An unknown id is accepted; the form then falls
    /// back to a blank create form and `submit` creates.
    pub fn begin_edit(&mut self, id: EventId) {
        self.edit = EditState::Editing(id);
    }

    pub fn cancel(&mut self) {
        self.edit = EditState::Creating;
    }

    /// The event being edited, if the pending id still resolves.
    pub fn editing_event(&self) -> Option<&Event> {
        match self.edit {
            EditState::Editing(id) => self.store.get(id),
            EditState::Creating => None,
        }
    }

    /// Create or update depending on the edit state, not on the draft.
    ///
    /// On success the session is back in `Creating`. If validation fails the
    /// state is left as it was so the form can be corrected and resubmitted.
    pub fn submit(&mut self, draft: EventDraft) -> EventResult<SubmitOutcome> {
        let outcome = match self.editing_event().map(|e| e.id) {
            Some(id) => SubmitOutcome::Updated(self.store.update(id, draft)?),
            None => SubmitOutcome::Created(self.store.create(draft)?),
        };

        self.edit = EditState::Creating;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use crate::event::Category;

    fn scenario() -> (Session, Event, Event) {
        let mut session = Session::new();
        let a = session
            .submit(EventDraft::new("Team Sync", "2024-05-01", "09:00").with_category(Category::Meeting))
            .unwrap()
            .into_event();
        let b = session
            .submit(
                EventDraft::new("Art Workshop", "2024-04-20", "14:00")
                    .with_location("Studio 5")
                    .with_category(Category::Workshop),
            )
            .unwrap()
            .into_event();
        (session, a, b)
    }

    #[test]
    fn starts_in_create_mode() {
        let session = Session::new();
        assert_eq!(session.edit_state(), EditState::Creating);
        assert!(session.editing_event().is_none());
        assert!(session.store().is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let (first, _, _) = scenario();
        let second = Session::new();

        assert_eq!(first.store().len(), 2);
        assert!(second.store().is_empty());
    }

    #[test]
    fn submit_in_create_mode_creates() {
        let (session, a, b) = scenario();
        assert_eq!(session.store().list(), [a, b]);
    }

    #[test]
    fn edit_then_submit_updates_in_place() {
        let (mut session, a, b) = scenario();

        session.begin_edit(b.id);
        assert_eq!(session.edit_state(), EditState::Editing(b.id));
        assert_eq!(session.editing_event(), Some(&b));

        let mut draft = b.to_draft();
        draft.title = "Art Workshop II".into();
        let outcome = session.submit(draft).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Updated(_)));
        assert_eq!(outcome.event().id, b.id);
        assert_eq!(session.store().list()[0], a);
        assert_eq!(session.store().list()[1].title, "Art Workshop II");
        assert_eq!(session.store().len(), 2);
        assert_eq!(session.edit_state(), EditState::Creating);
    }

    #[test]
    fn editing_an_unknown_id_falls_back_to_create() {
        let (mut session, a, _) = scenario();
        session.store_mut().delete(a.id);

        session.begin_edit(a.id);
        assert!(session.editing_event().is_none());

        let outcome = session
            .submit(EventDraft::new("Fresh", "2024-07-01", "08:00"))
            .unwrap();

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert_ne!(outcome.event().id, a.id);
        assert_eq!(session.store().len(), 2);
        assert_eq!(session.edit_state(), EditState::Creating);
    }

    #[test]
    fn switching_edit_target() {
        let (mut session, a, b) = scenario();
        session.begin_edit(a.id);
        session.begin_edit(b.id);

        assert_eq!(session.edit_state(), EditState::Editing(b.id));
    }

    #[test]
    fn cancel_and_begin_create_return_to_creating() {
        let (mut session, a, _) = scenario();

        session.begin_edit(a.id);
        session.cancel();
        assert_eq!(session.edit_state(), EditState::Creating);

        session.begin_edit(a.id);
        session.begin_create();
        assert_eq!(session.edit_state(), EditState::Creating);
    }

    #[test]
    fn failed_update_keeps_editing() {
        let (mut session, _, b) = scenario();
        session.begin_edit(b.id);

        let mut draft = b.to_draft();
        draft.title.clear();

        assert!(matches!(session.submit(draft), Err(EventError::Validation(_))));
        assert_eq!(session.edit_state(), EditState::Editing(b.id));
        assert_eq!(session.store().get(b.id), Some(&b));
    }
}
