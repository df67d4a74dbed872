use anyhow::Result;
use chrono::Local;
use dialoguer::{Confirm, Select};
use eventdesk_core::config::EventdeskConfig;
use eventdesk_core::event::{DATE_FORMAT, TIME_FORMAT};
use eventdesk_core::{Category, EventDraft, Session};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::datetime::{parse_date_input, parse_time_input};
use crate::utils::tui::{prompt_text, prompt_with_retry};

/// Show the create/edit form and submit it to the session.
///
/// Whether this creates or updates is decided by the session's edit state.
/// Rejected submissions re-open the form with what was typed.
pub fn run(session: &mut Session, config: &EventdeskConfig) -> Result<()> {
    let editing = session.editing_event().is_some();
    let mut draft = match session.editing_event() {
        Some(event) => event.to_draft(),
        None => blank_draft(config),
    };

    let heading = if editing { "Edit Event" } else { "Create New Event" };
    println!("{}", heading.bold());

    loop {
        draft = prompt_draft(&draft)?;

        match session.submit(draft.clone()) {
            Ok(outcome) => {
                println!("{}", outcome.render());
                return Ok(());
            }
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                let retry = Confirm::new()
                    .with_prompt("  Fix and resubmit?")
                    .default(true)
                    .interact()?;
                if !retry {
                    session.cancel();
                    return Ok(());
                }
            }
        }
    }
}

/// Defaults for a new event: today, the current minute, the configured category.
fn blank_draft(config: &EventdeskConfig) -> EventDraft {
    let now = Local::now();
    EventDraft::new(
        "",
        now.format(DATE_FORMAT).to_string(),
        now.format(TIME_FORMAT).to_string(),
    )
    .with_category(config.default_category)
}

fn prompt_draft(defaults: &EventDraft) -> Result<EventDraft> {
    let title = prompt_text("  Event Title *", &defaults.title)?;
    let date = prompt_with_retry("  Date *", &defaults.date, parse_date_input)?;
    let time = prompt_with_retry("  Time *", &defaults.time, parse_time_input)?;
    let location = prompt_text("  Location", &defaults.location)?;

    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let current = Category::ALL
        .iter()
        .position(|c| *c == defaults.category)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&names)
        .default(current)
        .interact()?;

    let description = prompt_text("  Description", &defaults.description)?;

    Ok(EventDraft::new(title, date, time)
        .with_location(location)
        .with_category(Category::ALL[selection])
        .with_description(description))
}
