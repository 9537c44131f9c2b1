//! Read-only views returned to collaborators.
//!
//! Snapshots are cloned out of the store; mutating them has no effect on
//! engine state. The `svy` CLI prints these as JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Issue, Note, Pin};
use crate::enums::{BucketKind, IssueStatus};
use crate::ids::{IssueId, PinId};

/// The three note lists of one issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BucketSnapshot {
    pub reports: Vec<Note>,
    pub need_approval: Vec<Note>,
    pub inspiration_board: Vec<Note>,
}

impl BucketSnapshot {
    #[must_use]
    pub fn of(issue: &Issue) -> Self {
        Self {
            reports: issue.reports.clone(),
            need_approval: issue.need_approval.clone(),
            inspiration_board: issue.inspiration_board.clone(),
        }
    }

    #[must_use]
    pub fn bucket(&self, kind: BucketKind) -> &[Note] {
        match kind {
            BucketKind::Reports => &self.reports,
            BucketKind::NeedApproval => &self.need_approval,
            BucketKind::InspirationBoard => &self.inspiration_board,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        BucketKind::ALL.iter().all(|kind| self.bucket(*kind).is_empty())
    }
}

/// Projection of a pin for map rendering.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MarkerView {
    pub pin_id: PinId,
    pub label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

impl MarkerView {
    #[must_use]
    pub fn of(pin: &Pin) -> Self {
        Self {
            pin_id: pin.id.clone(),
            label: pin.marker.label.clone(),
            color: pin.color.clone(),
            x: pin.marker.x,
            y: pin.marker.y,
        }
    }
}

/// One row of the pin list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PinSummary {
    pub id: PinId,
    pub label: String,
    pub color: String,
    pub issue_count: usize,
}

impl PinSummary {
    #[must_use]
    pub fn of(pin: &Pin) -> Self {
        Self {
            id: pin.id.clone(),
            label: pin.marker.label.clone(),
            color: pin.color.clone(),
            issue_count: pin.issues.len(),
        }
    }
}

/// One row of the issue list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IssueSummary {
    pub id: IssueId,
    pub name: String,
    pub status: IssueStatus,
    pub reports: usize,
    pub need_approval: usize,
    pub inspiration_board: usize,
}

impl IssueSummary {
    #[must_use]
    pub fn of(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            name: issue.name.clone(),
            status: issue.status,
            reports: issue.reports.len(),
            need_approval: issue.need_approval.len(),
            inspiration_board: issue.inspiration_board.len(),
        }
    }
}

/// Result of rebuilding a store from its journal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReplaySummary {
    pub operations_replayed: u32,
    pub pins: u32,
    pub issues: u32,
    pub duration_ms: u64,
}
