use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Note;
use crate::enums::{BucketKind, IssueStatus};
use crate::ids::IssueId;

/// An issue attached to a pin, with three independent note buckets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    pub id: IssueId,
    pub name: String,
    pub status: IssueStatus,
    pub reports: Vec<Note>,
    pub need_approval: Vec<Note>,
    pub inspiration_board: Vec<Note>,
}

impl Issue {
    /// A fresh open issue with empty buckets.
    #[must_use]
    pub const fn new(id: IssueId, name: String) -> Self {
        Self {
            id,
            name,
            status: IssueStatus::Open,
            reports: Vec::new(),
            need_approval: Vec::new(),
            inspiration_board: Vec::new(),
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

    pub fn bucket_mut(&mut self, kind: BucketKind) -> &mut Vec<Note> {
        match kind {
            BucketKind::Reports => &mut self.reports,
            BucketKind::NeedApproval => &mut self.need_approval,
            BucketKind::InspirationBoard => &mut self.inspiration_board,
        }
    }
}
