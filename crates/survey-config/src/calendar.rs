//! Calendar configuration: where day boundaries fall for note grouping.

use serde::{Deserialize, Serialize};
use survey_core::clock::{Calendar, FixedOffsetCalendar, LocalCalendar};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CalendarConfig {
    /// Fixed offset from UTC in minutes. Unset means the system's local
    /// time zone.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl CalendarConfig {
    /// Build the calendar this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the offset is out of range.
    pub fn build(&self) -> Result<Box<dyn Calendar>, ConfigError> {
        match self.utc_offset_minutes {
            None => Ok(Box::new(LocalCalendar)),
            Some(minutes) => FixedOffsetCalendar::from_minutes(minutes)
                .map(|cal| Box::new(cal) as Box<dyn Calendar>)
                .map_err(|e| ConfigError::InvalidValue {
                    field: String::from("calendar.utc_offset_minutes"),
                    reason: e.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_offset_is_rejected() {
        let config = CalendarConfig {
            utc_offset_minutes: Some(10_000),
        };
        let err = config.build().err().expect("should fail");
        assert!(err.to_string().contains("calendar.utc_offset_minutes"));
    }

    #[test]
    fn unset_offset_builds_local_calendar() {
        assert!(CalendarConfig::default().build().is_ok());
    }
}
