use anyhow::Result;
use dialoguer::Confirm;
use eventdesk_core::Session;
use eventdesk_core::config::EventdeskConfig;
use owo_colors::OwoColorize;

use crate::utils::tui;

pub fn run(session: &mut Session, config: &EventdeskConfig) -> Result<()> {
    let Some(id) = tui::pick_event(session, "Delete which event?", config.clock)? else {
        return Ok(());
    };

    let title = match session.store().get(id) {
        Some(event) => event.title.clone(),
        None => return Ok(()),
    };

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete \"{}\"?", title))
        .default(false)
        .interact()?;

    if !confirmed {
        return Ok(());
    }

    if session.store_mut().delete(id) {
        println!("{}", format!("  Event deleted: {}", title).red());
    }

    Ok(())
}
