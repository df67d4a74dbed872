//! Core types for eventdesk.
//!
//! This crate holds everything a front end needs to manage one user's events:
//! - `event`: `Event`, `EventDraft` (form data) and `Category`
//! - `store`: the in-memory `EventStore` with its CRUD operations
//! - `query`: search, category filtering and date/time ordering
//! - `session`: a `Session` pairing a store with the edit form's state
//! - `config`: user settings from ~/.config/eventdesk/config.toml

pub mod config;
pub mod error;
pub mod event;
pub mod query;
pub mod session;
pub mod store;

pub use error::{EventError, EventResult};
pub use event::{Category, Event, EventDraft, EventId};
pub use query::CategoryFilter;
pub use session::{EditState, Session, SubmitOutcome};
pub use store::EventStore;
