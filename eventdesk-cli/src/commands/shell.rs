use anyhow::Result;
use dialoguer::Select;
use eventdesk_core::Session;
use eventdesk_core::config::EventdeskConfig;
use owo_colors::OwoColorize;
use tracing::debug;

use super::{delete, export, form, view};
use crate::utils::tui;

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuItem {
    Create,
    View,
    Edit,
    Delete,
    Export,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::Create,
        MenuItem::View,
        MenuItem::Edit,
        MenuItem::Delete,
        MenuItem::Export,
        MenuItem::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuItem::Create => "Create Event",
            MenuItem::View => "View Events",
            MenuItem::Edit => "Edit Event",
            MenuItem::Delete => "Delete Event",
            MenuItem::Export => "Export JSON",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Run one interactive session. Events live in memory until the user quits.
pub fn run(config: &EventdeskConfig) -> Result<()> {
    let mut session = Session::new();
    let labels: Vec<&str> = MenuItem::ALL.iter().map(|m| m.label()).collect();

    println!("{}", "📅 Event Manager".bold());
    println!("{}", "Organize and track your events. Nothing is saved after you quit.".dimmed());

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let item = MenuItem::ALL[selection];
        debug!(?item, "menu selection");

        match item {
            MenuItem::Create => {
                session.begin_create();
                form::run(&mut session, config)?;
            }
            MenuItem::View => view::run(&session, config)?,
            MenuItem::Edit => {
                if let Some(id) = tui::pick_event(&session, "Edit which event?", config.clock)? {
                    session.begin_edit(id);
                    form::run(&mut session, config)?;
                }
            }
            MenuItem::Delete => delete::run(&mut session, config)?,
            MenuItem::Export => export::run(&session)?,
            MenuItem::Quit => break,
        }
    }

    Ok(())
}
