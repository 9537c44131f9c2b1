//! Store error types for survey-store.

use survey_core::enums::EntryKind;
use survey_core::errors::CoreError;
use survey_core::ids::{IssueId, PinId};
use thiserror::Error;

/// Errors from store, service and journal operations.
///
/// Every variant is recoverable: collaborators re-fetch a snapshot and retry
/// or abandon the action.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A positional index no longer points at anything, usually because an
    /// earlier mutation shifted the list.
    #[error("Stale reference: {target} #{index} does not exist ({len} present)")]
    StaleReference {
        target: String,
        index: usize,
        len: usize,
    },

    /// The addressed entry holds the wrong kind of content for the operation.
    #[error("Invalid entry kind: expected {expected} entry, found {found} entry")]
    InvalidEntryKind {
        expected: EntryKind,
        found: EntryKind,
    },

    /// A pin id that is not in the store.
    #[error("Pin not found: {0}")]
    UnknownPin(PinId),

    /// An issue id that is not on the selected pin.
    #[error("Issue not found: {0}")]
    UnknownIssue(IssueId),

    /// The journal could not be read or written.
    #[error("Journal error: {0}")]
    Journal(String),

    /// An earlier journal append failed, so the in-memory store is ahead of
    /// the journal. Reopening rebuilds the store from what was written.
    #[error("Journal out of sync: an earlier append failed; reopen the project to continue")]
    OutOfSync,

    /// Error bubbled up from survey-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Whether the caller should re-fetch and retry: the addressed pin,
    /// issue, note, entry or photo has moved or gone away.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(
            self,
            Self::StaleReference { .. } | Self::UnknownPin(_) | Self::UnknownIssue(_)
        )
    }
}
