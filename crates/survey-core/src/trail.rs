//! JSONL trail operation envelope.
//!
//! Every successful mutation is recorded as a `TrailOperation` in the project
//! journal (`.survey/journal.jsonl` by default). The in-memory store is
//! rebuildable from the journal: each `StoreOp` carries every input the
//! mutation consumed, including generated IDs and the `now` it was dated with.
//! Adds also record the position the entry landed at, so replay does not
//! depend on the calendar configured when the journal is read back.
//!
//! The `v` field supports schema versioning: old journal lines without a `v`
//! field deserialize with `v == 1` via `#[serde(default)]`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BucketKind, IssueStatus};
use crate::ids::{IssueId, PinId};
use crate::media::Image;
use crate::selection::{EntryPos, Selection};

/// Current trail version written by this build.
pub const TRAIL_VERSION: u32 = 1;

/// Default trail version for backward compatibility with old journal lines.
const fn default_trail_version() -> u32 {
    TRAIL_VERSION
}

/// A single operation recorded in the JSONL journal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrailOperation {
    /// Schema version. Defaults to 1 for old journals without this field.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    /// ISO 8601 timestamp of when the operation was recorded.
    pub ts: String,

    /// The mutation and its inputs.
    #[serde(flatten)]
    pub op: StoreOp,
}

impl TrailOperation {
    #[must_use]
    pub fn new(op: StoreOp, recorded_at: DateTime<Utc>) -> Self {
        Self {
            v: TRAIL_VERSION,
            ts: recorded_at.to_rfc3339(),
            op,
        }
    }
}

/// A store mutation with all of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StoreOp {
    CreatePin {
        id: PinId,
        color: String,
    },
    CreateIssue {
        pin: PinId,
        id: IssueId,
    },
    MoveMarker {
        pin: PinId,
        x: f64,
        y: f64,
    },
    RenameIssue {
        sel: Selection,
        name: String,
    },
    SetIssueStatus {
        sel: Selection,
        status: IssueStatus,
    },
    AddTextEntry {
        sel: Selection,
        bucket: BucketKind,
        text: String,
        now: DateTime<Utc>,
        /// Where the entry landed; `at.note == bucket.len()` opened a new note.
        at: EntryPos,
    },
    AddMediaEntry {
        sel: Selection,
        bucket: BucketKind,
        images: Vec<Image>,
        now: DateTime<Utc>,
        at: EntryPos,
    },
    DeleteEntry {
        sel: Selection,
        bucket: BucketKind,
        pos: EntryPos,
    },
    DeleteNote {
        sel: Selection,
        bucket: BucketKind,
        note: usize,
    },
    SetNoteOpened {
        sel: Selection,
        bucket: BucketKind,
        note: usize,
        opened: bool,
    },
    ReplaceImage {
        sel: Selection,
        bucket: BucketKind,
        pos: EntryPos,
        photo: usize,
        image: Image,
    },
    DeleteImage {
        sel: Selection,
        bucket: BucketKind,
        pos: EntryPos,
        photo: usize,
    },
    CopyEntry {
        sel: Selection,
        from: BucketKind,
        pos: EntryPos,
        to: BucketKind,
        now: DateTime<Utc>,
    },
}

impl StoreOp {
    /// The `op` tag as written to the journal.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreatePin { .. } => "create_pin",
            Self::CreateIssue { .. } => "create_issue",
            Self::MoveMarker { .. } => "move_marker",
            Self::RenameIssue { .. } => "rename_issue",
            Self::SetIssueStatus { .. } => "set_issue_status",
            Self::AddTextEntry { .. } => "add_text_entry",
            Self::AddMediaEntry { .. } => "add_media_entry",
            Self::DeleteEntry { .. } => "delete_entry",
            Self::DeleteNote { .. } => "delete_note",
            Self::SetNoteOpened { .. } => "set_note_opened",
            Self::ReplaceImage { .. } => "replace_image",
            Self::DeleteImage { .. } => "delete_image",
            Self::CopyEntry { .. } => "copy_entry",
        }
    }

    /// The selection an issue-scoped op acts on. `None` for pin-level ops.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        match self {
            Self::CreatePin { .. } | Self::CreateIssue { .. } | Self::MoveMarker { .. } => None,
            Self::RenameIssue { sel, .. }
            | Self::SetIssueStatus { sel, .. }
            | Self::AddTextEntry { sel, .. }
            | Self::AddMediaEntry { sel, .. }
            | Self::DeleteEntry { sel, .. }
            | Self::DeleteNote { sel, .. }
            | Self::SetNoteOpened { sel, .. }
            | Self::ReplaceImage { sel, .. }
            | Self::DeleteImage { sel, .. }
            | Self::CopyEntry { sel, .. } => Some(sel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_op_roundtrip() {
        let op = TrailOperation {
            v: 1,
            ts: "2026-02-08T12:00:00+00:00".to_string(),
            op: StoreOp::CreatePin {
                id: PinId::parse("pin-a3f8b2c1").unwrap(),
                color: "system_blue".into(),
            },
        };
        let line = serde_json::to_string(&op).unwrap();
        let back: TrailOperation = serde_json::from_str(&line).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn op_tag_is_flattened_into_the_line() {
        let op = TrailOperation::new(
            StoreOp::CreateIssue {
                pin: PinId::parse("pin-a3f8b2c1").unwrap(),
                id: IssueId::parse("iss-00ff00ff").unwrap(),
            },
            Utc::now(),
        );
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["op"], "create_issue");
        assert_eq!(json["pin"], "pin-a3f8b2c1");
        assert_eq!(json["v"], 1);
    }

    #[test]
    fn missing_version_defaults_to_one() {
        let line = r#"{"ts":"2026-02-08T12:00:00Z","op":"move_marker","pin":"pin-1","x":1.5,"y":2.0}"#;
        let op: TrailOperation = serde_json::from_str(line).unwrap();
        assert_eq!(op.v, 1);
        assert_eq!(op.op.name(), "move_marker");
    }
}
