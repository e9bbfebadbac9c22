use std::{fmt, str::FromStr};

use crate::error::ConfigError;

const INDEX_MODE_VAR: &str = "FIXTURE_INDEX_MODE";

/// How the platform runs index updates dispatched by a save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// Index updates run immediately as part of the save. They refuse to run while the
    /// caller holds an enclosing database transaction.
    ///
    /// Parsed from `update_on_save` or `realtime`.
    #[default]
    UpdateOnSave,
    /// Index updates are queued and processed later, so they never fail a save.
    ///
    /// Parsed from `scheduled` or `schedule`.
    Scheduled,
}

impl FromStr for IndexMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "update_on_save" | "realtime" => Ok(IndexMode::UpdateOnSave),
            "scheduled" | "schedule" => Ok(IndexMode::Scheduled),
            _ => Err(ConfigError::InvalidValue {
                var: INDEX_MODE_VAR.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexMode::UpdateOnSave => write!(f, "update_on_save"),
            IndexMode::Scheduled => write!(f, "scheduled"),
        }
    }
}

/// Platform configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub index_mode: IndexMode,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// Unset variables fall back to their defaults. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with every variable parsed
    /// - `Err(ConfigError::InvalidValue)` - A variable is set to an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        let index_mode = match std::env::var(INDEX_MODE_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => IndexMode::default(),
        };

        Ok(Self { index_mode })
    }
}
