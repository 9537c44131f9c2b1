//! # survey-config
//!
//! Layered configuration loading for Survey using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SURVEY_*` prefix, `__` as separator)
//! 2. Project-level `.survey/config.toml`
//! 3. User-level `~/.config/survey/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SURVEY_JOURNAL__FILE` -> `journal.file`,
//! `SURVEY_CALENDAR__UTC_OFFSET_MINUTES` -> `calendar.utc_offset_minutes`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use survey_config::SurveyConfig;
//!
//! let config = SurveyConfig::load_with_dotenv().expect("config");
//! println!("new pins are {}", config.general.default_pin_color);
//! ```

mod calendar;
mod error;
mod general;
mod journal;

pub use calendar::CalendarConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use journal::JournalConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project state directory holding config and journal.
pub const STATE_DIR: &str = ".survey";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl SurveyConfig {
    /// Load configuration from all sources, using the current directory as
    /// the project root.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Path::new("."))
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration for an explicit project root.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_for(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment_for(project_root)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain rooted at the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for a project root.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(STATE_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SURVEY_").split("__"))
    }

    /// The project's state directory (`{root}/.survey`).
    #[must_use]
    pub fn state_dir(project_root: &Path) -> PathBuf {
        project_root.join(STATE_DIR)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("survey").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SurveyConfig::default();
        assert!(config.journal.enabled);
        assert_eq!(config.journal.file, "journal.jsonl");
        assert!(config.calendar.utc_offset_minutes.is_none());
    }

    #[test]
    fn figment_builds_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config: SurveyConfig = SurveyConfig::figment_for(dir.path())
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.general.default_pin_color, "system_blue");
    }

    #[test]
    fn state_dir_is_under_root() {
        assert_eq!(
            SurveyConfig::state_dir(Path::new("/site")),
            PathBuf::from("/site/.survey")
        );
    }
}
