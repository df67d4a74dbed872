//! Search, filter and ordering over events.

use std::fmt;
use std::str::FromStr;

use crate::error::EventError;
use crate::event::{Category, Event};

/// Label forms use for "no category filter".
pub const ALL_CATEGORIES: &str = "All Categories";

/// Category restriction for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Every filter choice, "All" first.
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" | ALL_CATEGORIES => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

/// Events matching both the category filter and the search query.
///
/// The query matches case-insensitively as a substring of the title,
/// description or location. Unset description/location count as empty
/// strings, so they only match an empty query. Input order is preserved.
pub fn search_and_filter<'a, I>(events: I, query: &str, category: CategoryFilter) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let needle = query.to_lowercase();

    events
        .into_iter()
        .filter(|e| category.matches(e.category))
        .filter(|e| matches_query(e, &needle))
        .collect()
}

fn matches_query(event: &Event, needle: &str) -> bool {
    let fields = [
        event.title.as_str(),
        event.description.as_deref().unwrap_or(""),
        event.location.as_deref().unwrap_or(""),
    ];

    fields.iter().any(|f| f.to_lowercase().contains(needle))
}

/// Sort events by (date, time) ascending. Stable for equal start times.
pub fn sort<'a, I>(events: I) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted: Vec<&Event> = events.into_iter().collect();
    sorted.sort_by_key(|e| e.starts_at());
    sorted
}

/// Filter then sort: what a list view shows.
pub fn view<'a, I>(events: I, query: &str, category: CategoryFilter) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    sort(search_and_filter(events, query, category))
}
