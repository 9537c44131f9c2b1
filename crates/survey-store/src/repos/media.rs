//! Media repository: in-place image replacement and removal.

use survey_core::entities::Entry;
use survey_core::enums::{BucketKind, EntryKind};
use survey_core::media::Image;
use survey_core::selection::{EntryPos, Selection};
use tracing::debug;

use crate::NoteStore;
use crate::error::StoreError;
use crate::helpers::{check_index, entry_at_mut};

fn images_of(entry: &mut Entry) -> Result<&mut Vec<Image>, StoreError> {
    let found = entry.kind();
    entry.images_mut().ok_or(StoreError::InvalidEntryKind {
        expected: EntryKind::Media,
        found,
    })
}

impl NoteStore {
    /// Overwrite the image at `photo` within a media entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntryKind` for a text entry, `StaleReference` if `pos`
    /// or `photo` is out of range, or a stale-selection error.
    pub fn replace_image(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        pos: EntryPos,
        photo: usize,
        image: Image,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            debug!("replace_image: nothing selected");
            return Ok(());
        };
        let images = images_of(entry_at_mut(issue.bucket_mut(kind), kind, pos)?)?;
        check_index("photo", photo, images.len())?;
        images[photo] = image;
        Ok(())
    }

    /// Remove the image at `photo` from a media entry. The entry itself is
    /// kept even when its last image goes; the containing note is dropped
    /// only if it has no entries left.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntryKind` for a text entry, `StaleReference` if `pos`
    /// or `photo` is out of range, or a stale-selection error.
    pub fn delete_image(
        &mut self,
        sel: &Selection,
        kind: BucketKind,
        pos: EntryPos,
        photo: usize,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            debug!("delete_image: nothing selected");
            return Ok(());
        };
        let bucket = issue.bucket_mut(kind);
        let images = images_of(entry_at_mut(bucket, kind, pos)?)?;
        check_index("photo", photo, images.len())?;
        images.remove(photo);

        if bucket[pos.note].entries.is_empty() {
            bucket.remove(pos.note);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use survey_core::enums::{BucketKind, EntryKind};
    use survey_core::media::Image;
    use survey_core::selection::EntryPos;

    use crate::error::StoreError;
    use crate::test_support::{day, store_with_issue};

    fn three_images() -> Vec<Image> {
        vec![
            Image::new("1.png", vec![1]),
            Image::new("2.png", vec![2]),
            Image::new("3.png", vec![3]),
        ]
    }

    #[test]
    fn delete_image_keeps_neighbours_in_order() {
        let (mut store, sel) = store_with_issue();
        let images = three_images();
        store
            .add_media_entry(&sel, BucketKind::Reports, images.clone(), day(1))
            .unwrap();
        store
            .delete_image(&sel, BucketKind::Reports, EntryPos::new(0, 0), 1)
            .unwrap();

        let reports = store.fetch_bucket_snapshot(&sel).unwrap().reports;
        assert_eq!(
            reports[0].entries[0].images(),
            Some([images[0].clone(), images[2].clone()].as_slice())
        );
    }

    #[test]
    fn emptied_media_entry_is_kept() {
        let (mut store, sel) = store_with_issue();
        store
            .add_media_entry(&sel, BucketKind::Reports, vec![Image::new("1.png", vec![1])], day(1))
            .unwrap();
        store
            .delete_image(&sel, BucketKind::Reports, EntryPos::new(0, 0), 0)
            .unwrap();
        let reports = store.fetch_bucket_snapshot(&sel).unwrap().reports;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].entries[0].images().map(<[Image]>::len), Some(0));
    }

    #[test]
    fn replace_image_overwrites_in_place() {
        let (mut store, sel) = store_with_issue();
        store
            .add_media_entry(&sel, BucketKind::NeedApproval, three_images(), day(1))
            .unwrap();
        let edited = Image::new("2-marked.png", vec![22, 22]);
        store
            .replace_image(&sel, BucketKind::NeedApproval, EntryPos::new(0, 0), 1, edited.clone())
            .unwrap();
        let notes = store.fetch_bucket_snapshot(&sel).unwrap().need_approval;
        let images = notes[0].entries[0].images().unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(images[1], edited);
        assert_eq!(images[0].name, "1.png");
    }

    #[test]
    fn image_ops_on_text_entry_are_invalid() {
        let (mut store, sel) = store_with_issue();
        store.add_text_entry(&sel, BucketKind::Reports, "words", day(1)).unwrap();
        let err = store
            .delete_image(&sel, BucketKind::Reports, EntryPos::new(0, 0), 0)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidEntryKind {
                expected: EntryKind::Media,
                found: EntryKind::Text
            }
        ));
        let err = store
            .replace_image(
                &sel,
                BucketKind::Reports,
                EntryPos::new(0, 0),
                0,
                Image::new("x", vec![]),
            )
            .unwrap_err();
        assert!(!err.is_stale());
    }

    #[test]
    fn photo_index_out_of_range_is_stale() {
        let (mut store, sel) = store_with_issue();
        store
            .add_media_entry(&sel, BucketKind::Reports, three_images(), day(1))
            .unwrap();
        let err = store
            .replace_image(&sel, BucketKind::Reports, EntryPos::new(0, 0), 3, Image::new("x", vec![]))
            .unwrap_err();
        assert!(err.is_stale());
    }
}
