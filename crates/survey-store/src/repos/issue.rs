//! Issue repository: creation, rename, status transitions and selection.

use survey_core::entities::Issue;
use survey_core::enums::{IssueFilter, IssueStatus};
use survey_core::errors::CoreError;
use survey_core::ids::{IssueId, PinId};
use survey_core::responses::IssueSummary;
use survey_core::selection::Selection;
use tracing::debug;

use crate::NoteStore;
use crate::error::StoreError;

impl NoteStore {
    /// Append an open issue named `Issue <n>`, where `n` is the pin's issue
    /// count before insertion. Names are scoped per pin.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin` if the pin does not exist.
    pub fn create_issue(&mut self, pin: &PinId) -> Result<IssueId, StoreError> {
        // Resolve first so an unknown pin does not burn an ID.
        self.pin_ref(pin)?;
        let id = IssueId::generate()?;
        self.insert_issue(pin, id.clone())?;
        Ok(id)
    }

    /// Append an issue with a known ID. Used when replaying the journal.
    pub(crate) fn insert_issue(&mut self, pin: &PinId, id: IssueId) -> Result<(), StoreError> {
        let pin = self.pin_mut(pin)?;
        let name = format!("Issue {}", pin.issues.len());
        debug!(pin = %pin.id, issue = %id, %name, "creating issue");
        pin.issues.push(Issue::new(id, name));
        Ok(())
    }

    /// Replace the selected issue's display name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` for a stale selection.
    pub fn rename_issue(&mut self, sel: &Selection, name: &str) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            debug!("rename_issue: nothing selected");
            return Ok(());
        };
        issue.name = name.to_string();
        Ok(())
    }

    /// Open or close the selected issue.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` with `InvalidTransition` if the issue is
    /// already in `status`, or a stale-selection error.
    pub fn set_issue_status(
        &mut self,
        sel: &Selection,
        status: IssueStatus,
    ) -> Result<(), StoreError> {
        let Some(issue) = self.selected_issue_mut(sel)? else {
            debug!("set_issue_status: nothing selected");
            return Ok(());
        };
        if !issue.status.can_transition_to(status) {
            return Err(CoreError::InvalidTransition {
                entity_type: String::from("issue"),
                id: issue.id.to_string(),
                from: issue.status.to_string(),
                to: status.to_string(),
            }
            .into());
        }
        issue.status = status;
        Ok(())
    }

    /// The selected issue, read-only. `None` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` for a stale selection.
    pub fn issue(&self, sel: &Selection) -> Result<Option<&Issue>, StoreError> {
        self.selected_issue(sel)
    }

    /// Issue list rows for a pin.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin` if the pin does not exist.
    pub fn issues(&self, pin: &PinId, filter: IssueFilter) -> Result<Vec<IssueSummary>, StoreError> {
        let pin = self.pin_ref(pin)?;
        Ok(pin
            .issues
            .iter()
            .filter(|issue| filter.matches(issue.status))
            .map(IssueSummary::of)
            .collect())
    }

    /// Select a pin together with its first issue, if it has one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin` if the pin does not exist.
    pub fn select_pin(&self, pin: &PinId) -> Result<Selection, StoreError> {
        let found = self.pin_ref(pin)?;
        Ok(Selection {
            pin: Some(found.id.clone()),
            issue: found.issues.first().map(|issue| issue.id.clone()),
        })
    }

    /// The selection moved to the next issue of the same pin, wrapping from
    /// the last issue to the first. Returned unchanged when nothing is
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` for a stale selection.
    pub fn next_issue(&self, sel: &Selection) -> Result<Selection, StoreError> {
        self.step_issue(sel, true)
    }

    /// The selection moved to the previous issue, wrapping from the first
    /// issue to the last.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPin` / `UnknownIssue` for a stale selection.
    pub fn previous_issue(&self, sel: &Selection) -> Result<Selection, StoreError> {
        self.step_issue(sel, false)
    }

    fn step_issue(&self, sel: &Selection, forward: bool) -> Result<Selection, StoreError> {
        let Some((pin_id, issue_id)) = sel.resolve() else {
            return Ok(sel.clone());
        };
        let pin = self.pin_ref(pin_id)?;
        let index = pin
            .issue_index(issue_id)
            .ok_or_else(|| StoreError::UnknownIssue(issue_id.clone()))?;
        let count = pin.issues.len();
        let next = if forward {
            (index + 1) % count
        } else if index == 0 {
            count - 1
        } else {
            index - 1
        };
        Ok(Selection::new(pin.id.clone(), pin.issues[next].id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use survey_core::enums::{IssueFilter, IssueStatus};
    use survey_core::selection::Selection;

    use crate::error::StoreError;
    use crate::test_support::{store_with_issue, test_store};

    #[test]
    fn issue_names_count_per_pin() {
        let mut store = test_store();
        let a = store.create_pin("system_blue").unwrap();
        let b = store.create_pin("system_blue").unwrap();
        store.create_issue(&a).unwrap();
        store.create_issue(&a).unwrap();
        store.create_issue(&b).unwrap();

        let names_a: Vec<_> = store
            .issues(&a, IssueFilter::All)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        let names_b: Vec<_> = store
            .issues(&b, IssueFilter::All)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names_a, vec!["Issue 0", "Issue 1"]);
        assert_eq!(names_b, vec!["Issue 0"]);
    }

    #[test]
    fn new_issue_is_open_with_empty_buckets() {
        let (store, sel) = store_with_issue();
        let issue = store.issue(&sel).unwrap().unwrap();
        assert_eq!(issue.status, IssueStatus::Open);
        assert!(store.fetch_bucket_snapshot(&sel).unwrap().is_empty());
    }

    #[test]
    fn create_issue_on_unknown_pin_fails() {
        let mut store = test_store();
        let ghost = survey_core::ids::PinId::parse("pin-ffffffff").unwrap();
        assert!(matches!(
            store.create_issue(&ghost),
            Err(StoreError::UnknownPin(_))
        ));
    }

    #[test]
    fn rename_without_selection_is_a_noop() {
        let (mut store, sel) = store_with_issue();
        store.rename_issue(&Selection::none(), "Ignored").unwrap();
        assert_eq!(store.issue(&sel).unwrap().unwrap().name, "Issue 0");

        store.rename_issue(&sel, "Leaking gutter").unwrap();
        assert_eq!(store.issue(&sel).unwrap().unwrap().name, "Leaking gutter");
    }

    #[test]
    fn status_toggles_and_filters() {
        let (mut store, sel) = store_with_issue();
        let pin = sel.pin.clone().unwrap();
        store.create_issue(&pin).unwrap();

        store.set_issue_status(&sel, IssueStatus::Closed).unwrap();
        assert_eq!(store.issues(&pin, IssueFilter::Closed).unwrap().len(), 1);
        assert_eq!(store.issues(&pin, IssueFilter::Open).unwrap().len(), 1);

        let err = store.set_issue_status(&sel, IssueStatus::Closed).unwrap_err();
        assert!(err.to_string().contains("Invalid state transition"));

        store.set_issue_status(&sel, IssueStatus::Open).unwrap();
        assert_eq!(store.issues(&pin, IssueFilter::Open).unwrap().len(), 2);
    }

    #[test]
    fn select_pin_picks_first_issue() {
        let (mut store, sel) = store_with_issue();
        let pin = sel.pin.clone().unwrap();
        store.create_issue(&pin).unwrap();
        assert_eq!(store.select_pin(&pin).unwrap(), sel);

        let bare = store.create_pin("system_blue").unwrap();
        assert_eq!(
            store.select_pin(&bare).unwrap(),
            Selection::pin_only(bare.clone())
        );
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let (mut store, first) = store_with_issue();
        let pin = first.pin.clone().unwrap();
        let second = store.create_issue(&pin).unwrap();
        let third = store.create_issue(&pin).unwrap();

        let sel = store.next_issue(&first).unwrap();
        assert_eq!(sel.issue.as_ref(), Some(&second));
        let sel = store.next_issue(&store.next_issue(&sel).unwrap()).unwrap();
        assert_eq!(sel, first);

        let sel = store.previous_issue(&first).unwrap();
        assert_eq!(sel.issue.as_ref(), Some(&third));
    }

    #[test]
    fn stepping_without_selection_returns_it_unchanged() {
        let (store, _) = store_with_issue();
        assert_eq!(store.next_issue(&Selection::none()).unwrap(), Selection::none());
    }
}
