//! Bucket kinds, statuses, filters and entry kinds for Survey.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BucketKind
// ---------------------------------------------------------------------------

/// Selects one of the three note lists owned by an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    Reports,
    NeedApproval,
    InspirationBoard,
}

impl BucketKind {
    /// Every bucket, in display order.
    pub const ALL: [Self; 3] = [Self::Reports, Self::NeedApproval, Self::InspirationBoard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reports => "reports",
            Self::NeedApproval => "need_approval",
            Self::InspirationBoard => "inspiration_board",
        }
    }

    /// Human-facing title used by list headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Reports => "Reports",
            Self::NeedApproval => "Need Approval",
            Self::InspirationBoard => "Inspiration Board",
        }
    }
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueStatus
// ---------------------------------------------------------------------------

/// Status of an issue.
///
/// ```text
/// open ⇄ closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    Closed,
}

impl IssueStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::Closed],
            Self::Closed => &[Self::Open],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueFilter
// ---------------------------------------------------------------------------

/// Filter applied when listing the issues of a pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl IssueFilter {
    #[must_use]
    pub const fn matches(self, status: IssueStatus) -> bool {
        match self {
            Self::All => true,
            Self::Open => matches!(status, IssueStatus::Open),
            Self::Closed => matches!(status, IssueStatus::Closed),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntryKind
// ---------------------------------------------------------------------------

/// Discriminant of an entry's content, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Text,
    Media,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Media => "media",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_kind_serializes_snake_case() {
        let json = serde_json::to_string(&BucketKind::NeedApproval).unwrap();
        assert_eq!(json, "\"need_approval\"");
        let parsed: BucketKind = serde_json::from_str("\"inspiration_board\"").unwrap();
        assert_eq!(parsed, BucketKind::InspirationBoard);
    }

    #[test]
    fn bucket_display_matches_serde() {
        for kind in BucketKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn issue_status_toggles() {
        assert!(IssueStatus::Open.can_transition_to(IssueStatus::Closed));
        assert!(IssueStatus::Closed.can_transition_to(IssueStatus::Open));
        assert!(!IssueStatus::Open.can_transition_to(IssueStatus::Open));
    }

    #[test]
    fn issue_filter_matches() {
        assert!(IssueFilter::All.matches(IssueStatus::Closed));
        assert!(IssueFilter::Open.matches(IssueStatus::Open));
        assert!(!IssueFilter::Open.matches(IssueStatus::Closed));
        assert!(IssueFilter::Closed.matches(IssueStatus::Closed));
    }
}
