//! # survey-store
//!
//! The note engine for Survey.
//!
//! [`NoteStore`] owns the Pin → Issue → Bucket → Note → Entry graph and is the
//! only thing that mutates it. Collaborators address issues through an
//! explicit [`Selection`] and entries by position; they rebuild their views
//! from cloned snapshots after every call.
//!
//! [`service::SurveyService`] wraps a store with a clock and a JSONL journal,
//! and [`trail::replayer::TrailReplayer`] rebuilds a store from that journal.
//!
//! Store operations are grouped by what they touch in `repos/`, each an
//! `impl NoteStore` block.

pub mod error;
mod helpers;
pub mod repos;
pub mod service;
pub mod trail;

#[cfg(test)]
mod test_support;

use survey_core::clock::{Calendar, LocalCalendar};
use survey_core::entities::{Issue, Pin};
use survey_core::ids::PinId;
use survey_core::selection::Selection;

use error::StoreError;

/// In-memory owner of every pin, issue, note and entry.
///
/// Single-threaded and synchronous: each method runs to completion and
/// leaves the graph consistent. Issue-scoped methods take a [`Selection`];
/// when either half is missing they do nothing and return an empty result.
pub struct NoteStore {
    pins: Vec<Pin>,
    calendar: Box<dyn Calendar>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("pins", &self.pins.len())
            .finish_non_exhaustive()
    }
}

impl NoteStore {
    /// An empty store grouping notes by the system's local calendar days.
    #[must_use]
    pub fn new() -> Self {
        Self::with_calendar(Box::new(LocalCalendar))
    }

    /// An empty store using the given calendar for same-day grouping.
    #[must_use]
    pub fn with_calendar(calendar: Box<dyn Calendar>) -> Self {
        Self {
            pins: Vec::new(),
            calendar,
        }
    }

    /// The calendar deciding which entries share a note.
    #[must_use]
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    pub(crate) fn pin_ref(&self, id: &PinId) -> Result<&Pin, StoreError> {
        self.pins
            .iter()
            .find(|pin| &pin.id == id)
            .ok_or_else(|| StoreError::UnknownPin(id.clone()))
    }

    pub(crate) fn pin_mut(&mut self, id: &PinId) -> Result<&mut Pin, StoreError> {
        self.pins
            .iter_mut()
            .find(|pin| &pin.id == id)
            .ok_or_else(|| StoreError::UnknownPin(id.clone()))
    }

    /// The selected issue, `None` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` if the selection names ids that
    /// are not in the store.
    pub(crate) fn selected_issue(&self, sel: &Selection) -> Result<Option<&Issue>, StoreError> {
        let Some((pin_id, issue_id)) = sel.resolve() else {
            return Ok(None);
        };
        let pin = self.pin_ref(pin_id)?;
        pin.issue(issue_id)
            .map(Some)
            .ok_or_else(|| StoreError::UnknownIssue(issue_id.clone()))
    }

    /// Mutable variant of [`Self::selected_issue`].
    pub(crate) fn selected_issue_mut(
        &mut self,
        sel: &Selection,
    ) -> Result<Option<&mut Issue>, StoreError> {
        let Some((pin_id, issue_id)) = sel.resolve() else {
            return Ok(None);
        };
        let pin = self.pin_mut(pin_id)?;
        pin.issue_mut(issue_id)
            .map(Some)
            .ok_or_else(|| StoreError::UnknownIssue(issue_id.clone()))
    }
}
