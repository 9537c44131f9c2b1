//! Pin repository: creation, marker position and listing.

use survey_core::entities::{Marker, Pin};
use survey_core::ids::PinId;
use survey_core::labels::pin_label;
use survey_core::responses::{MarkerView, PinSummary};
use tracing::debug;

use crate::NoteStore;
use crate::error::StoreError;

impl NoteStore {
    /// Append a pin with no issues. Its marker is labelled by position and
    /// starts at the map origin.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if no ID can be generated.
    pub fn create_pin(&mut self, color: &str) -> Result<PinId, StoreError> {
        let id = PinId::generate()?;
        self.insert_pin(id.clone(), color);
        Ok(id)
    }

    /// Append a pin with a known ID. Used when replaying the journal.
    pub(crate) fn insert_pin(&mut self, id: PinId, color: &str) {
        let label = pin_label(self.pins.len());
        debug!(pin = %id, %label, "creating pin");
        self.pins.push(Pin {
            id,
            color: color.to_string(),
            issues: Vec::new(),
            marker: Marker {
                label,
                x: 0.0,
                y: 0.0,
            },
        });
    }

    /// Move a pin's marker to new map coordinates.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin` if the pin does not exist.
    pub fn move_marker(&mut self, pin: &PinId, x: f64, y: f64) -> Result<(), StoreError> {
        let pin = self.pin_mut(pin)?;
        pin.marker.x = x;
        pin.marker.y = y;
        Ok(())
    }

    /// One marker projection per pin, in creation order.
    #[must_use]
    pub fn markers(&self) -> Vec<MarkerView> {
        self.pins.iter().map(MarkerView::of).collect()
    }

    /// All pins, read-only.
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// One pin, read-only.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPin` if the pin does not exist.
    pub fn pin(&self, id: &PinId) -> Result<&Pin, StoreError> {
        self.pin_ref(id)
    }

    /// Pin list rows.
    #[must_use]
    pub fn pin_summaries(&self) -> Vec<PinSummary> {
        self.pins.iter().map(PinSummary::of).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::test_store;

    #[test]
    fn pins_are_labelled_in_order() {
        let mut store = test_store();
        for _ in 0..28 {
            store.create_pin("system_blue").unwrap();
        }
        let labels: Vec<_> = store.markers().into_iter().map(|m| m.label).collect();
        assert_eq!(labels[0], "A");
        assert_eq!(labels[25], "Z");
        assert_eq!(labels[26], "AA");
        assert_eq!(labels[27], "AB");
    }

    #[test]
    fn new_pin_has_no_issues() {
        let mut store = test_store();
        let id = store.create_pin("system_red").unwrap();
        let pin = store.pin(&id).unwrap();
        assert!(pin.issues.is_empty());
        assert_eq!(pin.color, "system_red");
    }

    #[test]
    fn move_marker_updates_projection() {
        let mut store = test_store();
        let id = store.create_pin("system_blue").unwrap();
        store.move_marker(&id, 40.0, 12.5).unwrap();
        let marker = &store.markers()[0];
        assert_eq!(marker.pin_id, id);
        assert!((marker.x - 40.0).abs() < f64::EPSILON);
        assert!((marker.y - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn move_marker_on_unknown_pin_fails() {
        let mut store = test_store();
        let ghost = survey_core::ids::PinId::parse("pin-00000000").unwrap();
        assert!(store.move_marker(&ghost, 1.0, 1.0).unwrap_err().is_stale());
    }
}
