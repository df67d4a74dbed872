//! TUI rendering for eventdesk types.
//!
//! Extension traits and helpers that turn core types into coloured terminal
//! output with owo_colors.

use chrono::{NaiveDate, NaiveTime};
use eventdesk_core::config::Clock;
use eventdesk_core::{Category, Event, SubmitOutcome};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        let badge = format!("[{}]", self);
        match self {
            Category::Meeting => badge.blue().to_string(),
            Category::Conference => badge.magenta().to_string(),
            Category::Workshop => badge.yellow().to_string(),
            Category::Social => badge.green().to_string(),
            Category::Other => badge.dimmed().to_string(),
        }
    }
}

impl Render for SubmitOutcome {
    fn render(&self) -> String {
        match self {
            SubmitOutcome::Created(e) => format!("  Event created: {}", e).green().to_string(),
            SubmitOutcome::Updated(e) => format!("  Event updated: {}", e).green().to_string(),
        }
    }
}

/// An event laid out as a card, with times shown on the configured clock.
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub clock: Clock,
}

impl Render for EventCard<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let mut lines = vec![
            event.title.bold().to_string(),
            format!("  📅 {}", format_date(event.date)).dimmed().to_string(),
            format!("  🕐 {}", format_time(event.time, self.clock)).dimmed().to_string(),
        ];

        if let Some(location) = &event.location {
            lines.push(format!("  📍 {}", location).dimmed().to_string());
        }

        lines.push(format!("  {}", event.category.render()));

        if let Some(description) = &event.description {
            lines.push(format!("  {}", description));
        }

        lines.join("\n")
    }
}

/// One-line label for pickers, e.g. `Art Workshop (Sat, Apr 20, 2024 02:00 PM)`
pub fn event_label(event: &Event, clock: Clock) -> String {
    format!(
        "{} ({} {})",
        event.title,
        format_date(event.date),
        format_time(event.time, clock)
    )
}

/// Weekday-abbreviated long date, e.g. `Sat, Apr 20, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %d, %Y").to_string()
}

/// `02:00 PM` on the 12-hour clock, `14:00` on the 24-hour clock.
pub fn format_time(time: NaiveTime, clock: Clock) -> String {
    match clock {
        Clock::TwelveHour => time.format("%I:%M %p").to_string(),
        Clock::TwentyFourHour => time.format("%H:%M").to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
