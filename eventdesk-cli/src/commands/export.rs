use anyhow::Result;
use eventdesk_core::Session;
use owo_colors::OwoColorize;

/// Print the session's events as a JSON array on stdout.
pub fn run(session: &Session) -> Result<()> {
    if session.store().is_empty() {
        println!("{}", "Nothing to export".dimmed());
        return Ok(());
    }

    println!("{}", session.store().to_json()?);
    Ok(())
}
