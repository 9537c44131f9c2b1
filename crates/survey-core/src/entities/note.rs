use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Entry;

/// One calendar day's activity within a bucket.
///
/// `date` keeps the full timestamp of the first entry; grouping only looks at
/// the calendar day. `entries` are in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Note {
    pub date: DateTime<Utc>,
    pub entries: Vec<Entry>,
    /// Expanded/collapsed display state.
    pub is_opened: bool,
}

impl Note {
    /// A collapsed note holding a single entry.
    #[must_use]
    pub fn new(date: DateTime<Utc>, entry: Entry) -> Self {
        Self {
            date,
            entries: vec![entry],
            is_opened: false,
        }
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Rows a list view shows for this note: the header, plus one per entry
    /// when expanded.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        if self.is_opened {
            1 + self.entries.len()
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_rows_follow_open_state() {
        let now = Utc::now();
        let mut note = Note::new(now, Entry::text(now, "a"));
        note.entries.push(Entry::text(now, "b"));
        assert_eq!(note.visible_rows(), 1);
        note.is_opened = true;
        assert_eq!(note.visible_rows(), 3);
    }
}
