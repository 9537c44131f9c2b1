//! Note repository: same-day coalescing, whole-note removal, display state
//! and bucket snapshots.

use chrono::{DateTime, Utc};
use survey_core::clock::Calendar;
use survey_core::entities::{Entry, Note};
use survey_core::enums::BucketKind;
use survey_core::media::Image;
use survey_core::responses::BucketSnapshot;
use survey_core::selection::{EntryPos, Selection};
use tracing::debug;

use crate::NoteStore;
use crate::error::StoreError;
use crate::helpers::{check_index, note_at_mut};

/// Append `entry` to the note for `now`'s calendar day, creating that note if
/// the bucket has none. Returns where the entry landed.
fn append_for_day(
    calendar: &dyn Calendar,
    bucket: &mut Vec<Note>,
    entry: Entry,
    now: DateTime<Utc>,
) -> EntryPos {
    if let Some(index) = bucket
        .iter()
        .rposition(|note| calendar.same_day(note.date, now))
    {
        let note = &mut bucket[index];
        note.entries.push(entry);
        EntryPos::new(index, note.entries.len() - 1)
    } else {
        bucket.push(Note::new(now, entry));
        EntryPos::new(bucket.len() - 1, 0)
    }
}

impl NoteStore {
    /// Add a text entry dated `now` to the selected issue's bucket.
    ///
    /// The entry joins the bucket's note for the same calendar day if there
    /// is one; otherwise a new collapsed note is appended. Returns the
    /// entry's position, or `None` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` for a stale selection.
    pub fn add_text_entry(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<EntryPos>, StoreError> {
        self.add_entry(sel, bucket, Entry::text(now, text), now)
    }

    /// Add a media entry dated `now`. Same grouping as
    /// [`Self::add_text_entry`]. `images` must already be fully loaded.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` for a stale selection.
    pub fn add_media_entry(
        &mut self,
        sel: &Selection,
        bucket: BucketKind,
        images: Vec<Image>,
        now: DateTime<Utc>,
    ) -> Result<Option<EntryPos>, StoreError> {
        self.add_entry(sel, bucket, Entry::media(now, images), now)
    }

    fn add_entry(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        entry: Entry,
        now: DateTime<Utc>,
    ) -> Result<Option<EntryPos>, StoreError> {
        let Self { pins, calendar } = self;
        let Some((pin_id, issue_id)) = sel.resolve() else {
            debug!(bucket = %kind, "add entry: nothing selected");
            return Ok(None);
        };
        let pin = pins
            .iter_mut()
            .find(|pin| &pin.id == pin_id)
            .ok_or_else(|| StoreError::UnknownPin(pin_id.clone()))?;
        let issue = pin
            .issue_mut(issue_id)
            .ok_or_else(|| StoreError::UnknownIssue(issue_id.clone()))?;

        let pos = append_for_day(calendar.as_ref(), issue.bucket_mut(kind), entry, now);
        debug!(issue = %issue.id, bucket = %kind, note = pos.note, entry = pos.entry, "entry added");
        Ok(Some(pos))
    }

    /// Put `entry` exactly at `at`, ignoring the calendar. Used to replay a
    /// recorded add: `at` must be the next slot of an existing note, or the
    /// first slot of a note appended to the end of the bucket.
    ///
    /// # Errors
    ///
    /// Returns `StaleReference` if `at` is not such a slot, or a
    /// stale-selection error.
    pub(crate) fn place_entry(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        entry: Entry,
        at: EntryPos,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            return Ok(());
        };
        let bucket = issue.bucket_mut(kind);
        if at.note == bucket.len() {
            check_index(format!("{kind} entry"), at.entry, 1)?;
            bucket.push(Note::new(entry.date, entry));
        } else {
            let note = note_at_mut(bucket, kind, at.note)?;
            if at.entry != note.entries.len() {
                let target = format!("{kind} entry slot");
                tracing::warn!(%target, index = at.entry, len = note.entries.len(), "recorded add does not line up");
                return Err(StoreError::StaleReference {
                    target,
                    index: at.entry,
                    len: note.entries.len(),
                });
            }
            note.entries.push(entry);
        }
        Ok(())
    }

    /// Remove a whole note and its entries.
    ///
    /// # Errors
    ///
    /// Returns `StaleReference` if `note` is out of range, or a
    /// stale-selection error.
    pub fn delete_note(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        note: usize,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            debug!("delete_note: nothing selected");
            return Ok(());
        };
        let bucket = issue.bucket_mut(kind);
        check_index(format!("{kind} note"), note, bucket.len())?;
        bucket.remove(note);
        Ok(())
    }

    /// Expand or collapse a note.
    ///
    /// # Errors
    ///
    /// Returns `StaleReference` if `note` is out of range, or a
    /// stale-selection error.
    pub fn set_note_opened(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        note: usize,
        opened: bool,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            return Ok(());
        };
        note_at_mut(issue.bucket_mut(kind), kind, note)?.is_opened = opened;
        Ok(())
    }

    /// Flip a note's expanded state. Returns the new state, or `None` when
    /// nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `StaleReference` if `note` is out of range, or a
    /// stale-selection error.
    pub fn toggle_note(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        note: usize,
    ) -> Result<Option<bool>, StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            return Ok(None);
        };
        let note = note_at_mut(issue.bucket_mut(kind), kind, note)?;
        note.is_opened = !note.is_opened;
        Ok(Some(note.is_opened))
    }

    /// Cloned copies of the selected issue's three buckets. Empty when
    /// nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` for a stale selection.
    pub fn fetch_bucket_snapshot(&self, sel: &Selection) -> Result<BucketSnapshot, StoreError> {
        Ok(self
            .selected_issue(sel)?
            .map(BucketSnapshot::of)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use survey_core::entities::Entry;
    use survey_core::enums::BucketKind;
    use survey_core::media::Image;
    use survey_core::selection::{EntryPos, Selection};

    use crate::test_support::{day, store_with_issue};

    #[rstest]
    #[case(BucketKind::Reports)]
    #[case(BucketKind::NeedApproval)]
    #[case(BucketKind::InspirationBoard)]
    fn same_day_entries_share_a_note(#[case] kind: BucketKind) {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, kind, "one", day(1)).unwrap();
        store
            .add_text_entry(&sel, kind, "two", day(1) + Duration::hours(5))
            .unwrap();
        let pos = store
            .add_media_entry(&sel, kind, vec![Image::new("p.png", vec![1])], day(1))
            .unwrap();
        assert_eq!(pos, Some(EntryPos::new(0, 2)));

        let snapshot = store.fetch_bucket_snapshot(&sel).unwrap();
        let notes = snapshot.bucket(kind);
        assert_eq!(notes.len(), 1);
        let texts: Vec<_> = notes[0].entries.iter().map(|e| e.as_text()).collect();
        assert_eq!(texts, vec![Some("one"), Some("two"), None]);

        for other in BucketKind::ALL.into_iter().filter(|k| *k != kind) {
            assert!(snapshot.bucket(other).is_empty());
        }
    }

    #[test]
    fn new_day_starts_a_new_note() {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, BucketKind::Reports, "a", day(1)).unwrap();
        let pos = store
            .add_text_entry(&sel, BucketKind::Reports, "b", day(2))
            .unwrap();
        assert_eq!(pos, Some(EntryPos::new(1, 0)));
        let reports = store.fetch_bucket_snapshot(&sel).unwrap().reports;
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].date, day(1));
        assert_eq!(reports[1].date, day(2));
    }

    #[test]
    fn coalescing_scans_the_whole_bucket() {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, BucketKind::Reports, "d1", day(1)).unwrap();
        store.add_text_entry(&sel, BucketKind::Reports, "d2", day(2)).unwrap();
        // A late entry back-dated to day 1 joins the day-1 note, not the last one.
        let pos = store
            .add_text_entry(&sel, BucketKind::Reports, "late", day(1) + Duration::hours(1))
            .unwrap();
        assert_eq!(pos, Some(EntryPos::new(0, 1)));
    }

    #[test]
    fn new_notes_start_collapsed_and_flags_survive_appends() {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, BucketKind::Reports, "a", day(1)).unwrap();
        assert!(!store.fetch_bucket_snapshot(&sel).unwrap().reports[0].is_opened);

        store.set_note_opened(&sel, BucketKind::Reports, 0, true).unwrap();
        store.add_text_entry(&sel, BucketKind::Reports, "b", day(1)).unwrap();
        let note = &store.fetch_bucket_snapshot(&sel).unwrap().reports[0];
        assert!(note.is_opened);
        assert_eq!(note.visible_rows(), 3);

        assert_eq!(
            store.toggle_note(&sel, BucketKind::Reports, 0).unwrap(),
            Some(false)
        );
    }

    #[test]
    fn placing_ignores_the_calendar() {
        let (mut store, sel) = store_with_issue();
        let late = day(1) + Duration::hours(13);
        store
            .place_entry(&sel, BucketKind::Reports, Entry::text(day(1), "a"), EntryPos::new(0, 0))
            .unwrap();
        // Same UTC day, but recorded as a separate note.
        store
            .place_entry(&sel, BucketKind::Reports, Entry::text(late, "b"), EntryPos::new(1, 0))
            .unwrap();
        store
            .place_entry(&sel, BucketKind::Reports, Entry::text(late, "c"), EntryPos::new(0, 1))
            .unwrap();

        let reports = store.fetch_bucket_snapshot(&sel).unwrap().reports;
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].entries.len(), 2);
        assert_eq!(reports[1].date, late);
    }

    #[rstest]
    #[case(EntryPos::new(0, 0))]
    #[case(EntryPos::new(0, 2))]
    #[case(EntryPos::new(2, 0))]
    #[case(EntryPos::new(1, 1))]
    fn placing_off_the_end_is_stale(#[case] at: EntryPos) {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, BucketKind::Reports, "a", day(1)).unwrap();
        let err = store
            .place_entry(&sel, BucketKind::Reports, Entry::text(day(1), "x"), at)
            .unwrap_err();
        assert!(err.is_stale());
        assert_eq!(store.fetch_bucket_snapshot(&sel).unwrap().reports[0].entries.len(), 1);
    }

    #[test]
    fn nothing_selected_is_silent() {
        let (mut store, sel) = store_with_issue();
        let none = Selection::none();
        assert_eq!(
            store
                .add_text_entry(&none, BucketKind::Reports, "x", day(1))
                .unwrap(),
            None
        );
        store.delete_note(&none, BucketKind::Reports, 7).unwrap();
        assert_eq!(store.toggle_note(&none, BucketKind::Reports, 0).unwrap(), None);
        assert!(store.fetch_bucket_snapshot(&none).unwrap().is_empty());
        assert!(store.fetch_bucket_snapshot(&sel).unwrap().is_empty());
    }

    #[test]
    fn delete_note_removes_all_entries() {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, BucketKind::NeedApproval, "a", day(1)).unwrap();
        store.add_text_entry(&sel, BucketKind::NeedApproval, "b", day(1)).unwrap();
        store.add_text_entry(&sel, BucketKind::NeedApproval, "c", day(2)).unwrap();

        store.delete_note(&sel, BucketKind::NeedApproval, 0).unwrap();
        let notes = store.fetch_bucket_snapshot(&sel).unwrap().need_approval;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].entries[0].as_text(), Some("c"));

        let err = store
            .delete_note(&sel, BucketKind::NeedApproval, 1)
            .unwrap_err();
        assert!(err.is_stale());
    }

    #[test]
    fn snapshot_is_a_copy() {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, BucketKind::Reports, "a", day(1)).unwrap();
        let mut snapshot = store.fetch_bucket_snapshot(&sel).unwrap();
        snapshot.reports.clear();
        assert_eq!(store.fetch_bucket_snapshot(&sel).unwrap().reports.len(), 1);
    }
}
