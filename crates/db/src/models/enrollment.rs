//! Class enrollment model and the outcome of an enrollment attempt.

use gym_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `class_enrollments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Enrollment {
    pub id: DbId,
    pub member_id: DbId,
    pub class_id: DbId,
    pub enrolled_at: Timestamp,
}

/// Result of [`crate::repositories::WorkoutClassRepo::enroll_member`].
///
/// Every variant other than `Enrolled` leaves the database untouched.
#[derive(Debug, Clone)]
pub enum EnrollmentOutcome {
    Enrolled(Enrollment),
    ClassNotFound,
    ClassFull,
    AlreadyEnrolled,
}

impl EnrollmentOutcome {
    pub fn is_enrolled(&self) -> bool {
        matches!(self, EnrollmentOutcome::Enrolled(_))
    }
}
