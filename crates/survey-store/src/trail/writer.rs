//! JSONL trail writer.
//!
//! Appends `TrailOperation` records to the project journal
//! (`.survey/journal.jsonl` by default). Uses `serde_jsonlines::append_json_lines`
//! for per-line appends.

use std::path::{Path, PathBuf};

use survey_core::trail::TrailOperation;

use crate::error::StoreError;

/// Appends trail operations to a single JSONL journal file.
///
/// Every successful mutation in `SurveyService` calls `append()`. The journal
/// is the source of truth; the in-memory store is rebuilt from it.
pub struct TrailWriter {
    path: PathBuf,
    enabled: bool,
}

impl TrailWriter {
    /// Create a writer appending to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Journal` if the directory cannot be created.
    pub fn new(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Journal(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        Ok(Self {
            path,
            enabled: true,
        })
    }

    /// Create a disabled writer (for testing or when the journal is off).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    /// Set whether writing is enabled.
    ///
    /// While disabled, `append` is a no-op: mutations still apply to the
    /// in-memory store but never reach the journal, so they are gone on the
    /// next open. `SurveyService::open` disables it for `record = false`.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether trail writing is currently enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a trail operation to the journal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Journal` if the file write fails.
    pub fn append(&self, op: &TrailOperation) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        serde_jsonlines::append_json_lines(&self.path, [op])
            .map_err(|e| StoreError::Journal(format!("append to {}: {e}", self.path.display())))?;
        tracing::trace!(op = op.op.name(), path = %self.path.display(), "journal append");
        Ok(())
    }

    /// The journal file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
