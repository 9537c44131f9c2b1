//! Bounds-checked access into bucket lists.
//!
//! Positions handed in by collaborators may be stale. Every lookup goes
//! through these helpers so a bad index becomes `StoreError::StaleReference`
//! instead of a panic.

use survey_core::entities::{Entry, Note};
use survey_core::enums::BucketKind;
use survey_core::selection::EntryPos;

use crate::error::StoreError;

/// Check `index < len`, naming the list in the error.
pub(crate) fn check_index(target: impl Into<String>, index: usize, len: usize) -> Result<(), StoreError> {
    if index < len {
        Ok(())
    } else {
        let target = target.into();
        tracing::warn!(%target, index, len, "stale positional reference");
        Err(StoreError::StaleReference { target, index, len })
    }
}

pub(crate) fn note_at(bucket: &[Note], kind: BucketKind, index: usize) -> Result<&Note, StoreError> {
    check_index(format!("{kind} note"), index, bucket.len())?;
    Ok(&bucket[index])
}

pub(crate) fn note_at_mut(
    bucket: &mut [Note],
    kind: BucketKind,
    index: usize,
) -> Result<&mut Note, StoreError> {
    check_index(format!("{kind} note"), index, bucket.len())?;
    Ok(&mut bucket[index])
}

pub(crate) fn entry_at(bucket: &[Note], kind: BucketKind, pos: EntryPos) -> Result<&Entry, StoreError> {
    let note = note_at(bucket, kind, pos.note)?;
    check_index(format!("{kind} entry"), pos.entry, note.entries.len())?;
    Ok(&note.entries[pos.entry])
}

pub(crate) fn entry_at_mut(
    bucket: &mut [Note],
    kind: BucketKind,
    pos: EntryPos,
) -> Result<&mut Entry, StoreError> {
    let note = note_at_mut(bucket, kind, pos.note)?;
    check_index(format!("{kind} entry"), pos.entry, note.entries.len())?;
    Ok(&mut note.entries[pos.entry])
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn out_of_range_note_is_stale() {
        let bucket: Vec<Note> = Vec::new();
        let err = note_at(&bucket, BucketKind::Reports, 0).unwrap_err();
        assert!(err.is_stale());
        assert!(err.to_string().contains("reports note #0"));
    }

    #[test]
    fn out_of_range_entry_is_stale() {
        let now = Utc::now();
        let bucket = vec![Note::new(now, Entry::text(now, "only"))];
        assert!(entry_at(&bucket, BucketKind::NeedApproval, EntryPos::new(0, 0)).is_ok());
        let err = entry_at(&bucket, BucketKind::NeedApproval, EntryPos::new(0, 1)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::StaleReference { index: 1, len: 1, .. }
        ));
    }
}
