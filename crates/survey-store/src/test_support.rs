//! Shared test utilities for survey-store unit tests.

use chrono::{DateTime, TimeZone, Utc};
use survey_core::clock::FixedOffsetCalendar;
use survey_core::selection::Selection;

use crate::NoteStore;

/// A store with UTC day boundaries, so test timestamps are unambiguous.
pub fn test_store() -> NoteStore {
    NoteStore::with_calendar(Box::new(FixedOffsetCalendar::utc()))
}

/// A store holding one pin with one issue, and the selection addressing it.
pub fn store_with_issue() -> (NoteStore, Selection) {
    let mut store = test_store();
    let pin = store.create_pin("system_blue").unwrap();
    let issue = store.create_issue(&pin).unwrap();
    (store, Selection::new(pin, issue))
}

/// 10:00 UTC on the given day of May 2026.
pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, d, 10, 0, 0).unwrap()
}
