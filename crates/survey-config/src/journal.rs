//! Journal (JSONL trail) configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

fn default_file() -> String {
    String::from("journal.jsonl")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JournalConfig {
    /// Whether mutations are appended to the journal. When disabled the CLI
    /// still replays an existing journal but records nothing new.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Journal file name, relative to the project's `.survey/` directory
    /// unless absolute.
    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            file: default_file(),
        }
    }
}

impl JournalConfig {
    /// Resolve the journal path against a project state directory.
    #[must_use]
    pub fn resolve(&self, state_dir: &Path) -> PathBuf {
        let file = PathBuf::from(&self.file);
        if file.is_absolute() {
            file
        } else {
            state_dir.join(file)
        }
    }
}
