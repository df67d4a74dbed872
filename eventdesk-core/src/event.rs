//! Event types.
//!
//! An `Event` is what the store holds: typed date/time, a fixed category and
//! an id the store hands out. An `EventDraft` is what a form submits: the raw
//! text of each field, validated when it becomes an `Event`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EventError, EventResult};

/// Form/storage format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form/storage format for times (24-hour, no seconds).
pub const TIME_FORMAT: &str = "%H:%M";

/// Store-assigned event identifier. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    pub(crate) fn new(raw: u64) -> Self {
        EventId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Meeting,
    Conference,
    Workshop,
    Social,
    Other,
}

impl Category {
    /// All categories, in the order forms present them.
    pub const ALL: [Category; 5] = [
        Category::Meeting,
        Category::Conference,
        Category::Workshop,
        Category::Social,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meeting => "Meeting",
            Category::Conference => "Conference",
            Category::Workshop => "Workshop",
            Category::Social => "Social",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EventError;

    /// Exact, case-sensitive match on the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EventError::UnknownCategory(s.to_string()))
    }
}

/// A calendar event held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub location: Option<String>,
    pub category: Category,
    pub description: Option<String>,
}

impl Event {
    /// Date and time combined, the key events are ordered by.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// A draft holding this event's current values, for pre-filling an edit form.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            date: self.date.format(DATE_FORMAT).to_string(),
            time: self.time.format(TIME_FORMAT).to_string(),
            location: self.location.clone().unwrap_or_default(),
            category: self.category,
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Raw form data for creating or updating an event.
///
/// `date` is `YYYY-MM-DD`, `time` is 24-hour `HH:MM`. Empty `location` and
/// `description` mean "not set".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub description: String,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        EventDraft {
            title: title.into(),
            date: date.into(),
            time: time.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the draft and turn it into an event with the given id.
    ///
    /// Nothing is touched on failure, so callers can validate before mutating.
    pub(crate) fn into_event(self, id: EventId) -> EventResult<Event> {
        if self.title.is_empty() {
            return Err(EventError::Validation("Event title is required".into()));
        }

        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;

        Ok(Event {
            id,
            title: self.title,
            date,
            time,
            location: non_empty(self.location),
            category: self.category,
            description: non_empty(self.description),
        })
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> EventResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| EventError::MalformedDate(format!("'{}' is not a YYYY-MM-DD date", s)))
}

/// Parse a 24-hour `HH:MM` time.
pub fn parse_time(s: &str) -> EventResult<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| EventError::MalformedDate(format!("'{}' is not an HH:MM time", s)))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Serialize times as `HH:MM`, matching the form format.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
