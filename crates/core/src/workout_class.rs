//! Workout class details, schedule parsing, and capacity rules.

use chrono::NaiveDateTime;
use validator::Validate;

use crate::error::CoreError;

/// Display format for class schedules.
pub const SCHEDULE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Accepted input formats for class schedules.
const SCHEDULE_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// The trainer-editable fields of a workout class.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ClassDetails {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Class name must be 1 to 100 characters"
    ))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(
        min = 1,
        max = 50,
        message = "Class type must be 1 to 50 characters"
    ))]
    pub class_type: String,
    pub schedule: NaiveDateTime,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration_minutes: i32,
    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub max_capacity: i32,
}

impl ClassDetails {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        Ok(())
    }
}

/// Parse a schedule entered as `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD HH:MM`,
/// either optionally followed by `:SS`.
pub fn parse_schedule(input: &str) -> Result<NaiveDateTime, CoreError> {
    let trimmed = input.trim();
    SCHEDULE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Schedule {trimmed:?} must look like YYYY-MM-DDTHH:MM"
            ))
        })
}

pub fn has_spare_capacity(current_enrollment: i32, max_capacity: i32) -> bool {
    current_enrollment < max_capacity
}

/// A class cannot shrink below the members already enrolled in it.
pub fn check_capacity_change(new_capacity: i32, current_enrollment: i32) -> Result<(), CoreError> {
    if new_capacity < current_enrollment {
        return Err(CoreError::Validation(format!(
            "Capacity {new_capacity} is below the {current_enrollment} members already enrolled"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn details(duration_minutes: i32, max_capacity: i32) -> ClassDetails {
        ClassDetails {
            name: "Morning Yoga".to_string(),
            description: None,
            class_type: "Flexibility".to_string(),
            schedule: NaiveDate::from_ymd_opt(2026, 11, 2)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
            duration_minutes,
            max_capacity,
        }
    }

    #[test]
    fn positive_duration_and_capacity_pass() {
        assert!(details(60, 20).check().is_ok());
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        for duration in [0, -15] {
            assert_matches!(
                details(duration, 20).check(),
                Err(CoreError::Validation(msg)) if msg.contains("Duration")
            );
        }
    }

    #[test]
    fn non_positive_capacity_is_rejected() {
        for capacity in [0, -1] {
            assert_matches!(
                details(45, capacity).check(),
                Err(CoreError::Validation(msg)) if msg.contains("Capacity")
            );
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut input = details(45, 10);
        input.name.clear();
        assert_matches!(input.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn schedule_accepts_iso_and_space_separated_forms() {
        let expected = NaiveDate::from_ymd_opt(2026, 11, 2)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        assert_eq!(parse_schedule("2026-11-02T18:30").unwrap(), expected);
        assert_eq!(parse_schedule(" 2026-11-02 18:30 ").unwrap(), expected);
    }

    #[test]
    fn schedule_accepts_seconds_with_either_separator() {
        let expected = NaiveDate::from_ymd_opt(2026, 11, 2)
            .unwrap()
            .and_hms_opt(18, 30, 15)
            .unwrap();
        assert_eq!(parse_schedule("2026-11-02T18:30:15").unwrap(), expected);
        assert_eq!(parse_schedule("2026-11-02 18:30:15").unwrap(), expected);
    }

    #[test]
    fn garbage_schedule_is_rejected() {
        assert_matches!(parse_schedule("tomorrow"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn full_class_has_no_spare_capacity() {
        assert!(has_spare_capacity(9, 10));
        assert!(!has_spare_capacity(10, 10));
    }

    #[test]
    fn capacity_cannot_drop_below_enrollment() {
        assert!(check_capacity_change(5, 5).is_ok());
        assert_matches!(check_capacity_change(4, 5), Err(CoreError::Validation(_)));
    }
}
