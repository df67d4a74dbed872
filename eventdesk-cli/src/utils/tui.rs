use anyhow::Result;
use dialoguer::{Input, Select};
use eventdesk_core::config::Clock;
use eventdesk_core::query;
use eventdesk_core::{EventId, Session};
use owo_colors::OwoColorize;

use crate::render::event_label;

/// Prompt for a line of text, pre-filled with `initial`. Empty input is allowed.
pub fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let input = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt the user with retry on parse errors.
pub fn prompt_with_retry<T, F>(prompt: &str, initial: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input = prompt_text(prompt, initial)?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Let the user pick one of the session's events, in date/time order.
/// Returns None if there are no events or the user backs out.
pub fn pick_event(session: &Session, prompt: &str, clock: Clock) -> Result<Option<EventId>> {
    let events = query::sort(session.store().list());

    if events.is_empty() {
        println!("{}", "  No events yet".dimmed());
        return Ok(None);
    }

    let mut items: Vec<String> = events.iter().map(|e| event_label(e, clock)).collect();
    items.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(events.get(selection).map(|e| e.id))
}
