//! Entry repository: single-entry removal and cross-bucket copy.

use chrono::{DateTime, Utc};
use survey_core::entities::Note;
use survey_core::enums::BucketKind;
use survey_core::selection::{EntryPos, Selection};
use tracing::debug;

use crate::NoteStore;
use crate::error::StoreError;
use crate::helpers::{check_index, entry_at, note_at_mut};

impl NoteStore {
    /// Remove one entry. A note left without entries is removed too.
    ///
    /// # Errors
    ///
    /// Returns `StaleReference` if `pos` is out of range, or a
    /// stale-selection error.
    pub fn delete_entry(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        pos: EntryPos,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            debug!("delete_entry: nothing selected");
            return Ok(());
        };
        let bucket = issue.bucket_mut(kind);
        let note = note_at_mut(bucket, kind, pos.note)?;
        check_index(format!("{kind} entry"), pos.entry, note.entries.len())?;
        note.entries.remove(pos.entry);
        if note.entries.is_empty() {
            debug!(bucket = %kind, note = pos.note, "last entry removed; dropping note");
            bucket.remove(pos.note);
        }
        Ok(())
    }

    /// Copy an entry into another bucket of the same issue. The source is
    /// left untouched and the copy keeps the entry's original date.
    ///
    /// If the destination bucket is empty, the copy is wrapped in a new note
    /// dated `now`. Otherwise it is appended to the destination note at the
    /// same note index as the source. Copying into the source bucket itself
    /// does nothing.
    ///
    /// # Errors
    ///
    /// Returns `StaleReference` if `pos` is out of range in the source, or
    /// `pos.note` is out of range in a non-empty destination; or a
    /// stale-selection error.
    pub fn copy_entry(
        &mut self,
        sel: &Selection,
        from: BucketKind,
        pos: EntryPos,
        to: BucketKind,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            debug!("copy_entry: nothing selected");
            return Ok(());
        };
        let entry = entry_at(issue.bucket(from), from, pos)?.clone();
        if from == to {
            debug!(bucket = %from, "copy_entry: source and destination match; nothing to do");
            return Ok(());
        }

        let destination = issue.bucket_mut(to);
        if destination.is_empty() {
            destination.push(Note::new(now, entry));
        } else {
            note_at_mut(destination, to, pos.note)?.entries.push(entry);
        }
        debug!(from = %from, to = %to, note = pos.note, "entry copied");
        Ok(())
    }
}
