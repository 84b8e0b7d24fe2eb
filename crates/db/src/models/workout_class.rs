//! Workout class entity model and DTOs.

use chrono::NaiveDateTime;
use gym_core::types::DbId;
use gym_core::workout_class::ClassDetails;
use sqlx::FromRow;

/// A row from the `workout_classes` table.
#[derive(Debug, Clone, FromRow)]
pub struct WorkoutClass {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub class_type: String,
    pub trainer_id: DbId,
    pub schedule: NaiveDateTime,
    pub duration_minutes: i32,
    pub max_capacity: i32,
    pub current_enrollment: i32,
}

impl WorkoutClass {
    /// The trainer-editable part of the row.
    pub fn details(&self) -> ClassDetails {
        ClassDetails {
            name: self.name.clone(),
            description: self.description.clone(),
            class_type: self.class_type.clone(),
            schedule: self.schedule,
            duration_minutes: self.duration_minutes,
            max_capacity: self.max_capacity,
        }
    }

    pub fn spare_places(&self) -> i32 {
        (self.max_capacity - self.current_enrollment).max(0)
    }
}

/// DTO for creating a class owned by `trainer_id`.
#[derive(Debug, Clone)]
pub struct CreateWorkoutClass {
    pub trainer_id: DbId,
    pub details: ClassDetails,
}

/// DTO for updating a class. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkoutClass {
    pub name: Option<String>,
    pub description: Option<String>,
    pub class_type: Option<String>,
    pub schedule: Option<NaiveDateTime>,
    pub duration_minutes: Option<i32>,
    pub max_capacity: Option<i32>,
}

impl UpdateWorkoutClass {
    /// The details that would be stored after applying this update to `current`.
    pub fn apply_to(&self, current: ClassDetails) -> ClassDetails {
        ClassDetails {
            name: self.name.clone().unwrap_or(current.name),
            description: self.description.clone().or(current.description),
            class_type: self.class_type.clone().unwrap_or(current.class_type),
            schedule: self.schedule.unwrap_or(current.schedule),
            duration_minutes: self.duration_minutes.unwrap_or(current.duration_minutes),
            max_capacity: self.max_capacity.unwrap_or(current.max_capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.class_type.is_none()
            && self.schedule.is_none()
            && self.duration_minutes.is_none()
            && self.max_capacity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn class() -> WorkoutClass {
        WorkoutClass {
            id: 7,
            name: "Spin".to_string(),
            description: Some("High cadence".to_string()),
            class_type: "Cardio".to_string(),
            trainer_id: 2,
            schedule: NaiveDate::from_ymd_opt(2026, 11, 3)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            duration_minutes: 45,
            max_capacity: 12,
            current_enrollment: 12,
        }
    }

    #[test]
    fn empty_update_keeps_every_field() {
        let update = UpdateWorkoutClass::default();
        assert!(update.is_empty());
        assert_eq!(update.apply_to(class().details()), class().details());
    }

    #[test]
    fn update_overrides_only_given_fields() {
        let update = UpdateWorkoutClass {
            name: Some("Spin Express".to_string()),
            duration_minutes: Some(30),
            ..Default::default()
        };
        let merged = update.apply_to(class().details());
        assert_eq!(merged.name, "Spin Express");
        assert_eq!(merged.duration_minutes, 30);
        assert_eq!(merged.class_type, "Cardio");
        assert_eq!(merged.max_capacity, 12);
    }

    #[test]
    fn full_class_has_no_spare_places() {
        assert_eq!(class().spare_places(), 0);
    }
}
