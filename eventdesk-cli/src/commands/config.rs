use anyhow::Result;
use eventdesk_core::config::{Clock, EventdeskConfig};
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = EventdeskConfig::config_path()?;
    let config = EventdeskConfig::load()?;

    let clock = match config.clock {
        Clock::TwelveHour => "12h",
        Clock::TwentyFourHour => "24h",
    };

    println!("{}", "Paths".bold());
    println!("  Config:            {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  default_category:  {}", config.default_category);
    println!("  clock:             {}", clock);

    Ok(())
}
