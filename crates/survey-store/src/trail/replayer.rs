//! Rebuilds a `NoteStore` from its JSONL journal.
//!
//! Operations are applied in file order. Each `StoreOp` carries the IDs,
//! timestamps and landing positions the original call used, so replay
//! reproduces the same graph whatever calendar the store is configured with.

use std::path::Path;
use std::time::Instant;

use survey_core::entities::Entry;
use survey_core::responses::ReplaySummary;
use survey_core::trail::{StoreOp, TRAIL_VERSION, TrailOperation};

use crate::NoteStore;
use crate::error::StoreError;

pub struct TrailReplayer;

impl TrailReplayer {
    /// Read every operation from a journal. A missing file is an empty
    /// journal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Journal` if the file cannot be read or a line is
    /// not a valid operation.
    pub fn read(path: &Path) -> Result<Vec<TrailOperation>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines(path)
            .map_err(|e| StoreError::Journal(format!("open {}: {e}", path.display())))?
            .collect::<Result<Vec<TrailOperation>, _>>()
            .map_err(|e| StoreError::Journal(format!("parse {}: {e}", path.display())))
    }

    /// Apply every operation in the journal at `path` to `store`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Journal` for unreadable journals or unsupported
    /// versions, or the store error of the first operation that fails.
    pub fn rebuild(store: &mut NoteStore, path: &Path) -> Result<ReplaySummary, StoreError> {
        let start = Instant::now();
        let ops = Self::read(path)?;

        let mut operations_replayed = 0u32;
        let mut pins = 0u32;
        let mut issues = 0u32;

        for (line, trail_op) in ops.iter().enumerate() {
            if trail_op.v != TRAIL_VERSION {
                return Err(StoreError::Journal(format!(
                    "Unsupported trail version {} on line {}",
                    trail_op.v,
                    line + 1
                )));
            }
            Self::apply(store, &trail_op.op).map_err(|e| {
                tracing::warn!(line = line + 1, op = trail_op.op.name(), error = %e, "replay failed");
                e
            })?;
            match trail_op.op {
                StoreOp::CreatePin { .. } => pins += 1,
                StoreOp::CreateIssue { .. } => issues += 1,
                _ => {}
            }
            operations_replayed += 1;
        }

        let summary = ReplaySummary {
            operations_replayed,
            pins,
            issues,
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        tracing::debug!(
            operations = summary.operations_replayed,
            pins = summary.pins,
            issues = summary.issues,
            "journal replayed"
        );
        Ok(summary)
    }

    /// Apply a single operation.
    ///
    /// # Errors
    ///
    /// Returns whatever the corresponding store method returns.
    pub fn apply(store: &mut NoteStore, op: &StoreOp) -> Result<(), StoreError> {
        match op {
            StoreOp::CreatePin { id, color } => store.insert_pin(id.clone(), color),
            StoreOp::CreateIssue { pin, id } => store.insert_issue(pin, id.clone())?,
            StoreOp::MoveMarker { pin, x, y } => store.move_marker(pin, *x, *y)?,
            StoreOp::RenameIssue { sel, name } => store.rename_issue(sel, name)?,
            StoreOp::SetIssueStatus { sel, status } => store.set_issue_status(sel, *status)?,
            StoreOp::AddTextEntry {
                sel,
                bucket,
                text,
                now,
                at,
            } => store.place_entry(sel, *bucket, Entry::text(*now, text.as_str()), *at)?,
            StoreOp::AddMediaEntry {
                sel,
                bucket,
                images,
                now,
                at,
            } => store.place_entry(sel, *bucket, Entry::media(*now, images.clone()), *at)?,
            StoreOp::DeleteEntry { sel, bucket, pos } => store.delete_entry(sel, *bucket, *pos)?,
            StoreOp::DeleteNote { sel, bucket, note } => store.delete_note(sel, *bucket, *note)?,
            StoreOp::SetNoteOpened {
                sel,
                bucket,
                note,
                opened,
            } => store.set_note_opened(sel, *bucket, *note, *opened)?,
            StoreOp::ReplaceImage {
                sel,
                bucket,
                pos,
                photo,
                image,
            } => store.replace_image(sel, *bucket, *pos, *photo, image.clone())?,
            StoreOp::DeleteImage {
                sel,
                bucket,
                pos,
                photo,
            } => store.delete_image(sel, *bucket, *pos, *photo)?,
            StoreOp::CopyEntry {
                sel,
                from,
                pos,
                to,
                now,
            } => store.copy_entry(sel, *from, *pos, *to, *now)?,
        }
        Ok(())
    }
}
