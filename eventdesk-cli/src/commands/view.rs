use anyhow::Result;
use dialoguer::Select;
use eventdesk_core::config::{Clock, EventdeskConfig};
use eventdesk_core::query::{self, CategoryFilter};
use eventdesk_core::{EventStore, Session};
use owo_colors::OwoColorize;

use crate::render::{EventCard, Render, pluralize};
use crate::utils::tui::prompt_text;

/// Ask for a search query and category, then list matching events by date.
pub fn run(session: &Session, config: &EventdeskConfig) -> Result<()> {
    if session.store().is_empty() {
        println!("{}", render_results(session.store(), "", CategoryFilter::All, config.clock));
        return Ok(());
    }

    let search = prompt_text("🔍 Search (title, location or description)", "")?;

    let choices = CategoryFilter::choices();
    let labels: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Filter by Category")
        .items(&labels)
        .default(0)
        .interact()?;

    println!();
    println!(
        "{}",
        render_results(session.store(), &search, choices[selection], config.clock)
    );

    Ok(())
}

/// The event list as the view shows it: cards in date/time order, or a
/// message telling an empty store apart from a search with no hits.
fn render_results(store: &EventStore, search: &str, filter: CategoryFilter, clock: Clock) -> String {
    if store.is_empty() {
        return format!(
            "{}\n{}",
            "No events yet".bold(),
            "Create your first event to get started!".dimmed()
        );
    }

    let shown = query::view(store.list(), search, filter);
    if shown.is_empty() {
        return format!(
            "{}\n{}",
            "No events found".bold(),
            "Try adjusting your search criteria".dimmed()
        );
    }

    let mut blocks: Vec<String> = shown
        .into_iter()
        .map(|event| EventCard { event, clock }.render())
        .collect();

    let count = blocks.len();
    blocks.push(format!("{} {}", count, pluralize("event", count)).dimmed().to_string());
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::{Category, EventDraft};

    fn scenario_store() -> EventStore {
        let mut store = EventStore::new();
        store
            .create(EventDraft::new("Team Sync", "2024-05-01", "09:00").with_category(Category::Meeting))
            .unwrap();
        store
            .create(
                EventDraft::new("Art Workshop", "2024-04-20", "14:00")
                    .with_location("Studio 5")
                    .with_category(Category::Workshop),
            )
            .unwrap();
        store
    }

    #[test]
    fn empty_store_says_no_events_yet() {
        let out = render_results(&EventStore::new(), "", CategoryFilter::All, Clock::TwelveHour);
        assert!(out.contains("No events yet"));
    }

    #[test]
    fn no_hits_says_no_events_found() {
        let out = render_results(&scenario_store(), "zzz", CategoryFilter::All, Clock::TwelveHour);
        assert!(out.contains("No events found"));
    }

    #[test]
    fn results_are_sorted_by_date() {
        let out = render_results(&scenario_store(), "", CategoryFilter::All, Clock::TwelveHour);

        let art = out.find("Art Workshop").unwrap();
        let sync = out.find("Team Sync").unwrap();
        assert!(art < sync);
        assert!(out.contains("2 events"));
    }

    #[test]
    fn results_respect_query_and_category() {
        let store = scenario_store();

        let out = render_results(&store, "art", CategoryFilter::All, Clock::TwelveHour);
        assert!(out.contains("Art Workshop"));
        assert!(!out.contains("Team Sync"));
        assert!(out.contains("1 event"));

        let out = render_results(
            &store,
            "",
            CategoryFilter::Only(Category::Meeting),
            Clock::TwelveHour,
        );
        assert!(out.contains("Team Sync"));
        assert!(!out.contains("Art Workshop"));
    }
}
