//! Service layer orchestrating store mutations with the clock and journal.
//!
//! `SurveyService` wraps `NoteStore` (the in-memory engine), `TrailWriter`
//! (JSONL persistence) and a `Clock`. Collaborators talk to the service; it
//! is the only holder of the store.
//!
//! Every mutation method follows this protocol:
//! 1. Refuse to run if an earlier journal append failed
//! 2. Read `now` from the clock, if the operation dates anything
//! 3. Apply the store operation
//! 4. On success, append the operation with all of its inputs to the journal
//!
//! A failed append leaves the store one step ahead of the journal. From then
//! on every mutation returns `StoreError::OutOfSync` until the project is
//! reopened and rebuilt from the journal.

use std::path::PathBuf;

use survey_core::clock::{Calendar, Clock};
use survey_core::entities::{Issue, Pin};
use survey_core::enums::{BucketKind, IssueFilter, IssueStatus};
use survey_core::ids::{IssueId, PinId};
use survey_core::media::Image;
use survey_core::responses::{BucketSnapshot, IssueSummary, MarkerView, PinSummary, ReplaySummary};
use survey_core::selection::{EntryPos, Selection};
use survey_core::trail::{StoreOp, TrailOperation};
use tracing::{debug, warn};

use crate::NoteStore;
use crate::error::StoreError;
use crate::trail::replayer::TrailReplayer;
use crate::trail::writer::TrailWriter;

/// Orchestrates store mutations with a clock and a JSONL journal.
pub struct SurveyService {
    store: NoteStore,
    trail: TrailWriter,
    clock: Box<dyn Clock>,
    out_of_sync: bool,
}

impl SurveyService {
    /// Wrap an existing store.
    #[must_use]
    pub fn new(store: NoteStore, trail: TrailWriter, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            trail,
            clock,
            out_of_sync: false,
        }
    }

    /// Open a service backed by the journal at `journal`.
    ///
    /// The journal is replayed into a fresh store first. When `record` is
    /// false, the journal is still replayed but new mutations are not
    /// appended. Pass `None` to run purely in memory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Journal` if the journal cannot be read, created
    /// or replayed.
    pub fn open(
        journal: Option<PathBuf>,
        record: bool,
        calendar: Box<dyn Calendar>,
        clock: Box<dyn Clock>,
    ) -> Result<(Self, ReplaySummary), StoreError> {
        let mut store = NoteStore::with_calendar(calendar);
        let (trail, summary) = match journal {
            Some(path) => {
                let summary = TrailReplayer::rebuild(&mut store, &path)?;
                let mut trail = TrailWriter::new(path)?;
                trail.set_enabled(record);
                (trail, summary)
            }
            None => (
                TrailWriter::disabled(),
                ReplaySummary {
                    operations_replayed: 0,
                    pins: 0,
                    issues: 0,
                    duration_ms: 0,
                },
            ),
        };
        Ok((Self::new(store, trail, clock), summary))
    }

    /// Read-only access to the engine.
    #[must_use]
    pub const fn store(&self) -> &NoteStore {
        &self.store
    }

    /// The calendar grouping entries into notes.
    #[must_use]
    pub fn calendar(&self) -> &dyn Calendar {
        self.store.calendar()
    }

    /// Access the trail writer.
    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    /// Whether an earlier journal append failed. Mutations are refused
    /// until the service is reopened.
    #[must_use]
    pub const fn is_out_of_sync(&self) -> bool {
        self.out_of_sync
    }

    fn ensure_in_sync(&self) -> Result<(), StoreError> {
        if self.out_of_sync {
            Err(StoreError::OutOfSync)
        } else {
            Ok(())
        }
    }

    /// Append a successful mutation. Issue-scoped ops without a selection
    /// changed nothing and are skipped.
    fn record(&mut self, op: StoreOp) -> Result<(), StoreError> {
        if op.selection().is_some_and(|sel| sel.resolve().is_none()) {
            return Ok(());
        }
        let name = op.name();
        debug!(op = name, "recording mutation");
        if let Err(error) = self.trail.append(&TrailOperation::new(op, self.clock.now())) {
            warn!(op = name, %error, "journal append failed, refusing further mutations");
            self.out_of_sync = true;
            return Err(error);
        }
        Ok(())
    }

    // -- pins and issues ----------------------------------------------------

    /// Create a pin. Selecting it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if ID generation or the journal append fails.
    pub fn create_pin(&mut self, color: &str) -> Result<PinId, StoreError> {
        self.ensure_in_sync()?;
        let id = self.store.create_pin(color)?;
        self.record(StoreOp::CreatePin {
            id: id.clone(),
            color: color.to_string(),
        })?;
        Ok(id)
    }

    /// Create an issue on a pin.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin` or a journal error.
    pub fn create_issue(&mut self, pin: &PinId) -> Result<IssueId, StoreError> {
        self.ensure_in_sync()?;
        let id = self.store.create_issue(pin)?;
        self.record(StoreOp::CreateIssue {
            pin: pin.clone(),
            id: id.clone(),
        })?;
        Ok(id)
    }

    /// The "add pin" user action: a new pin always comes with one issue.
    /// Returns a selection addressing both.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either creation or a journal append fails.
    pub fn create_pin_with_issue(&mut self, color: &str) -> Result<Selection, StoreError> {
        let pin = self.create_pin(color)?;
        let issue = self.create_issue(&pin)?;
        Ok(Selection::new(pin, issue))
    }

    /// Move a pin's marker.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin` or a journal error.
    pub fn move_marker(&mut self, pin: &PinId, x: f64, y: f64) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store.move_marker(pin, x, y)?;
        self.record(StoreOp::MoveMarker {
            pin: pin.clone(),
            x,
            y,
        })
    }

    /// Rename the selected issue.
    ///
    /// # Errors
    ///
    /// Returns a stale-selection or journal error.
    pub fn rename_issue(&mut self, sel: &Selection, name: &str) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store.rename_issue(sel, name)?;
        self.record(StoreOp::RenameIssue {
            sel: sel.clone(),
            name: name.to_string(),
        })
    }

    /// Open or close the selected issue.
    ///
    /// # Errors
    ///
    /// Returns an invalid-transition, stale-selection or journal error.
    pub fn set_issue_status(
        &mut self,
        sel: &Selection,
        status: IssueStatus,
    ) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store.set_issue_status(sel, status)?;
        self.record(StoreOp::SetIssueStatus {
            sel: sel.clone(),
            status,
        })
    }

    // -- entries and notes --------------------------------------------------

    /// Add a text entry dated now.
    ///
    /// # Errors
    ///
    /// Returns a stale-selection or journal error.
    pub fn add_text_entry(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        text: &str,
    ) -> Result<Option<EntryPos>, StoreError> {
        self.ensure_in_sync()?;
        let now = self.clock.now();
        let pos = self.store.add_text_entry(sel, bucket, text, now)?;
        if let Some(at) = pos {
            self.record(StoreOp::AddTextEntry {
                sel: sel.clone(),
                bucket,
                text: text.to_string(),
                now,
                at,
            })?;
        }
        Ok(pos)
    }

    /// Add a media entry dated now. `images` must be fully loaded.
    ///
    /// # Errors
    ///
    /// Returns a stale-selection or journal error.
    pub fn add_media_entry(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        images: Vec<Image>,
    ) -> Result<Option<EntryPos>, StoreError> {
        self.ensure_in_sync()?;
        let now = self.clock.now();
        let pos = self
            .store
            .add_media_entry(sel, bucket, images.clone(), now)?;
        if let Some(at) = pos {
            self.record(StoreOp::AddMediaEntry {
                sel: sel.clone(),
                bucket,
                images,
                now,
                at,
            })?;
        }
        Ok(pos)
    }

    /// Delete one entry.
    ///
    /// # Errors
    ///
    /// Returns a stale-reference or journal error.
    pub fn delete_entry(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        pos: EntryPos,
    ) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store.delete_entry(sel, bucket, pos)?;
        self.record(StoreOp::DeleteEntry {
            sel: sel.clone(),
            bucket,
            pos,
        })
    }

    /// Delete a whole note.
    ///
    /// # Errors
    ///
    /// Returns a stale-reference or journal error.
    pub fn delete_note(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        note: usize,
    ) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store.delete_note(sel, bucket, note)?;
        self.record(StoreOp::DeleteNote {
            sel: sel.clone(),
            bucket,
            note,
        })
    }

    /// Expand or collapse a note.
    ///
    /// # Errors
    ///
    /// Returns a stale-reference or journal error.
    pub fn set_note_opened(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        note: usize,
        opened: bool,
    ) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store.set_note_opened(sel, bucket, note, opened)?;
        self.record(StoreOp::SetNoteOpened {
            sel: sel.clone(),
            bucket,
            note,
            opened,
        })
    }

    /// Flip a note's expanded state; recorded as the resulting state.
    ///
    /// # Errors
    ///
    /// Returns a stale-reference or journal error.
    pub fn toggle_note(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        note: usize,
    ) -> Result<Option<bool>, StoreError> {
        self.ensure_in_sync()?;
        let opened = self.store.toggle_note(sel, bucket, note)?;
        if let Some(opened) = opened {
            self.record(StoreOp::SetNoteOpened {
                sel: sel.clone(),
                bucket,
                note,
                opened,
            })?;
        }
        Ok(opened)
    }

    /// Replace one image of a media entry.
    ///
    /// # Errors
    ///
    /// Returns an invalid-kind, stale-reference or journal error.
    pub fn replace_image(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        pos: EntryPos,
        photo: usize,
        image: Image,
    ) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store
            .replace_image(sel, bucket, pos, photo, image.clone())?;
        self.record(StoreOp::ReplaceImage {
            sel: sel.clone(),
            bucket,
            pos,
            photo,
            image,
        })
    }

    /// Delete one image of a media entry.
    ///
    /// # Errors
    ///
    /// Returns an invalid-kind, stale-reference or journal error.
    pub fn delete_image(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        pos: EntryPos,
        photo: usize,
    ) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        self.store.delete_image(sel, bucket, pos, photo)?;
        self.record(StoreOp::DeleteImage {
            sel: sel.clone(),
            bucket,
            pos,
            photo,
        })
    }

    /// Copy an entry into another bucket.
    ///
    /// # Errors
    ///
    /// Returns a stale-reference or journal error.
    pub fn copy_entry(
        &mut self,
        sel: &Selection,
        from: BucketKind,
        pos: EntryPos,
        to: BucketKind,
    ) -> Result<(), StoreError> {
        self.ensure_in_sync()?;
        let now = self.clock.now();
        self.store.copy_entry(sel, from, pos, to, now)?;
        self.record(StoreOp::CopyEntry {
            sel: sel.clone(),
            from,
            pos,
            to,
            now,
        })
    }

    /// Move an entry: copy into `to`, then delete from `from`.
    ///
    /// The two steps are recorded separately and there is no rollback: if
    /// the delete fails, the copy stays. Moving within one bucket does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns the error of whichever step failed.
    pub fn move_entry(
        &mut self,
        sel: &Selection,
        from: BucketKind,
        pos: EntryPos,
        to: BucketKind,
    ) -> Result<(), StoreError> {
        if from == to {
            return Ok(());
        }
        self.copy_entry(sel, from, pos, to)?;
        self.delete_entry(sel, from, pos)
    }

    // -- queries ------------------------------------------------------------

    /// Cloned buckets of the selected issue.
    ///
    /// # Errors
    ///
    /// Returns a stale-selection error.
    pub fn fetch_bucket_snapshot(&self, sel: &Selection) -> Result<BucketSnapshot, StoreError> {
        self.store.fetch_bucket_snapshot(sel)
    }

    /// The selected issue. `None` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns a stale-selection error.
    pub fn issue(&self, sel: &Selection) -> Result<Option<&Issue>, StoreError> {
        self.store.issue(sel)
    }

    /// Select a pin and its first issue.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin`.
    pub fn select_pin(&self, pin: &PinId) -> Result<Selection, StoreError> {
        self.store.select_pin(pin)
    }

    /// # Errors
    ///
    /// Returns a stale-selection error.
    pub fn next_issue(&self, sel: &Selection) -> Result<Selection, StoreError> {
        self.store.next_issue(sel)
    }

    /// # Errors
    ///
    /// Returns a stale-selection error.
    pub fn previous_issue(&self, sel: &Selection) -> Result<Selection, StoreError> {
        self.store.previous_issue(sel)
    }

    #[must_use]
    pub fn markers(&self) -> Vec<MarkerView> {
        self.store.markers()
    }

    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        self.store.pins()
    }

    #[must_use]
    pub fn pin_summaries(&self) -> Vec<PinSummary> {
        self.store.pin_summaries()
    }

    /// Issue list rows for a pin.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin`.
    pub fn issues(&self, pin: &PinId, filter: IssueFilter) -> Result<Vec<IssueSummary>, StoreError> {
        self.store.issues(pin, filter)
    }
}
