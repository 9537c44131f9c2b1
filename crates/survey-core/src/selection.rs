//! Addressing types passed into every issue-scoped store call.
//!
//! There is no ambient "current issue": collaborators hold a [`Selection`]
//! and hand it to the store. Entries and notes inside a bucket are addressed
//! by position, and positions shift after every mutation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{IssueId, PinId};

/// The pin and issue an operation targets. Either half may be absent, in
/// which case issue-scoped operations do nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Selection {
    pub pin: Option<PinId>,
    pub issue: Option<IssueId>,
}

impl Selection {
    #[must_use]
    pub const fn new(pin: PinId, issue: IssueId) -> Self {
        Self {
            pin: Some(pin),
            issue: Some(issue),
        }
    }

    /// Nothing selected.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            pin: None,
            issue: None,
        }
    }

    /// A pin with no issue selected yet.
    #[must_use]
    pub const fn pin_only(pin: PinId) -> Self {
        Self {
            pin: Some(pin),
            issue: None,
        }
    }

    /// Both halves, when present.
    #[must_use]
    pub fn resolve(&self) -> Option<(&PinId, &IssueId)> {
        self.pin.as_ref().zip(self.issue.as_ref())
    }
}

/// Position of an entry: the note's index in its bucket and the entry's
/// offset within that note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct EntryPos {
    pub note: usize,
    pub entry: usize,
}

impl EntryPos {
    #[must_use]
    pub const fn new(note: usize, entry: usize) -> Self {
        Self { note, entry }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_needs_both_halves() {
        let pin = PinId::parse("pin-00000001").unwrap();
        let issue = IssueId::parse("iss-00000001").unwrap();
        assert!(Selection::none().resolve().is_none());
        assert!(Selection::pin_only(pin.clone()).resolve().is_none());
        let sel = Selection::new(pin.clone(), issue.clone());
        assert_eq!(sel.resolve(), Some((&pin, &issue)));
    }
}
