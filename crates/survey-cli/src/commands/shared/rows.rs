use serde::Serialize;
use survey_core::clock::Calendar;
use survey_core::entities::EntryContent;
use survey_core::enums::{BucketKind, EntryKind};
use survey_core::responses::BucketSnapshot;

/// One line per entry, for tabular display of bucket contents.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryRow {
    pub bucket: BucketKind,
    pub note: usize,
    pub entry: usize,
    pub day: String,
    pub opened: bool,
    pub kind: EntryKind,
    pub content: String,
}

/// Flatten a snapshot into entry rows, optionally limited to one bucket.
/// `day` is the note's day on `calendar`, the same day the store grouped by.
pub fn entry_rows(
    snapshot: &BucketSnapshot,
    only: Option<BucketKind>,
    calendar: &dyn Calendar,
) -> Vec<EntryRow> {
    let buckets = only.map_or_else(|| BucketKind::ALL.to_vec(), |kind| vec![kind]);
    let mut rows = Vec::new();
    for bucket in buckets {
        for (note_index, note) in snapshot.bucket(bucket).iter().enumerate() {
            for (entry_index, entry) in note.entries.iter().enumerate() {
                let content = match &entry.content {
                    EntryContent::Text(text) => text.clone(),
                    EntryContent::Media(images) => images
                        .iter()
                        .map(|image| image.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                };
                rows.push(EntryRow {
                    bucket,
                    note: note_index,
                    entry: entry_index,
                    day: calendar.day_of(note.date).to_string(),
                    opened: note.is_opened,
                    kind: entry.kind(),
                    content,
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use survey_core::clock::FixedOffsetCalendar;
    use survey_core::entities::{Entry, Note};
    use survey_core::media::Image;

    use super::*;

    #[test]
    fn rows_cover_every_entry_in_order() {
        let date = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
        let mut note = Note::new(date, Entry::text(date, "Crack in wall"));
        note.entries.push(Entry::media(
            date,
            vec![Image::new("a.jpg", vec![1]), Image::new("b.jpg", vec![2])],
        ));
        let snapshot = BucketSnapshot {
            need_approval: vec![note],
            ..BucketSnapshot::default()
        };

        let utc = FixedOffsetCalendar::utc();
        let rows = entry_rows(&snapshot, None, &utc);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].content, "Crack in wall");
        assert_eq!(rows[0].day, "2026-05-01");
        assert_eq!(rows[1].kind, EntryKind::Media);
        assert_eq!(rows[1].content, "a.jpg, b.jpg");
        assert!(entry_rows(&snapshot, Some(BucketKind::Reports), &utc).is_empty());
    }

    #[test]
    fn day_follows_the_calendar_offset() {
        let late = Utc.with_ymd_and_hms(2026, 5, 1, 22, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 5, 1, 23, 30, 0).unwrap();
        let snapshot = BucketSnapshot {
            reports: vec![
                Note::new(late, Entry::text(late, "evening")),
                Note::new(later, Entry::text(later, "after midnight")),
            ],
            ..BucketSnapshot::default()
        };

        let plus_one = FixedOffsetCalendar::from_minutes(60).unwrap();
        let days: Vec<_> = entry_rows(&snapshot, None, &plus_one)
            .into_iter()
            .map(|row| row.day)
            .collect();
        assert_eq!(days, vec!["2026-05-01", "2026-05-02"]);
    }
}
