use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Issue;
use crate::ids::{IssueId, PinId};

/// Map marker of a pin: its label and position in map coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Marker {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// A pin placed on the site map. Owns its issues.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Pin {
    pub id: PinId,
    /// Display color token, e.g. `system_blue`.
    pub color: String,
    pub issues: Vec<Issue>,
    pub marker: Marker,
}

impl Pin {
    #[must_use]
    pub fn issue(&self, id: &IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| &issue.id == id)
    }

    pub fn issue_mut(&mut self, id: &IssueId) -> Option<&mut Issue> {
        self.issues.iter_mut().find(|issue| &issue.id == id)
    }

    /// Position of the issue within this pin's issue list.
    #[must_use]
    pub fn issue_index(&self, id: &IssueId) -> Option<usize> {
        self.issues.iter().position(|issue| &issue.id == id)
    }
}
