//! User configuration at ~/.config/eventdesk/config.toml

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::error::{EventError, EventResult};
use crate::event::Category;

/// How times are shown on event cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Clock {
    /// `02:00 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `14:00`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EventdeskConfig {
    /// Category pre-selected when creating an event.
    #[serde(default, skip_serializing_if = "is_default")]
    pub default_category: Category,

    #[serde(default, skip_serializing_if = "is_default")]
    pub clock: Clock,
}

impl EventdeskConfig {
    pub fn config_path() -> EventResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, creating a commented default file on first run.
    /// `EVENTDESK_`-prefixed environment variables override file values.
    pub fn load() -> EventResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::from_builder(
            Config::builder()
                .add_source(File::from(config_path).required(false))
                .add_source(Environment::with_prefix("EVENTDESK")),
        )
    }

    /// Load config from a specific file, without environment overrides.
    pub fn load_from(path: &Path) -> EventResult<Self> {
        Self::from_builder(Config::builder().add_source(File::from(path).required(false)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> EventResult<Self> {
        builder
            .build()
            .map_err(|e| EventError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventError::Config(e.to_string()))
    }

    /// Save the current config to ~/.config/eventdesk/config.toml
    pub fn save(&self) -> EventResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> EventResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EventError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| EventError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventResult<()> {
        let contents = "\
# eventdesk configuration

# Category pre-selected for new events
# (Meeting, Conference, Workshop, Social or Other):
# default_category = \"Meeting\"

# Clock used when showing event times (\"12h\" or \"24h\"):
# clock = \"12h\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
