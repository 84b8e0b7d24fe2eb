//! Repository for the `workout_classes` and `class_enrollments` tables.

use gym_core::types::DbId;
use gym_core::workout_class::has_spare_capacity;
use sqlx::{Connection, PgConnection};

use crate::error::DbError;
use crate::models::enrollment::{Enrollment, EnrollmentOutcome};
use crate::models::workout_class::{CreateWorkoutClass, UpdateWorkoutClass, WorkoutClass};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, class_type, trainer_id, schedule, \
                       duration_minutes, max_capacity, current_enrollment";

/// Provides CRUD operations for workout classes plus member enrollment.
pub struct WorkoutClassRepo;

impl WorkoutClassRepo {
    /// Insert a new class with zero enrollment, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateWorkoutClass,
    ) -> Result<WorkoutClass, DbError> {
        let query = format!(
            "INSERT INTO workout_classes
                (name, description, class_type, trainer_id, schedule,
                 duration_minutes, max_capacity)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let details = &input.details;
        sqlx::query_as::<_, WorkoutClass>(&query)
            .bind(&details.name)
            .bind(&details.description)
            .bind(&details.class_type)
            .bind(input.trainer_id)
            .bind(details.schedule)
            .bind(details.duration_minutes)
            .bind(details.max_capacity)
            .fetch_one(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to create workout class: {}",
                details.name
            )))
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<WorkoutClass>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM workout_classes WHERE id = $1");
        sqlx::query_as::<_, WorkoutClass>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to find workout class with ID: {id}"
            )))
    }

    /// Every class, soonest first.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<WorkoutClass>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM workout_classes ORDER BY schedule ASC, id ASC");
        sqlx::query_as::<_, WorkoutClass>(&query)
            .fetch_all(conn)
            .await
            .map_err(DbError::query("Failed to retrieve all workout classes"))
    }

    /// Classes owned by `trainer_id`, soonest first.
    pub async fn list_for_trainer(
        conn: &mut PgConnection,
        trainer_id: DbId,
    ) -> Result<Vec<WorkoutClass>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_classes WHERE trainer_id = $1
             ORDER BY schedule ASC, id ASC"
        );
        sqlx::query_as::<_, WorkoutClass>(&query)
            .bind(trainer_id)
            .fetch_all(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to find classes for trainer ID: {trainer_id}"
            )))
    }

    /// Classes `member_id` is enrolled in, soonest first.
    pub async fn list_enrolled_for_member(
        conn: &mut PgConnection,
        member_id: DbId,
    ) -> Result<Vec<WorkoutClass>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_classes
             WHERE id IN (SELECT class_id FROM class_enrollments WHERE member_id = $1)
             ORDER BY schedule ASC, id ASC"
        );
        sqlx::query_as::<_, WorkoutClass>(&query)
            .bind(member_id)
            .fetch_all(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to find classes for member ID: {member_id}"
            )))
    }

    /// Update a class. Only non-`None` fields in `input` are applied; the
    /// enrollment counter and owner are never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateWorkoutClass,
    ) -> Result<Option<WorkoutClass>, DbError> {
        let query = format!(
            "UPDATE workout_classes SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                class_type = COALESCE($4, class_type),
                schedule = COALESCE($5, schedule),
                duration_minutes = COALESCE($6, duration_minutes),
                max_capacity = COALESCE($7, max_capacity)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutClass>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.class_type)
            .bind(input.schedule)
            .bind(input.duration_minutes)
            .bind(input.max_capacity)
            .fetch_optional(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to update workout class with ID: {id}"
            )))
    }

    /// Delete a class; its enrollments cascade. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM workout_classes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to delete workout class with ID: {id}"
            )))?;
        Ok(result.rows_affected() > 0)
    }

    /// Enroll `member_id` into `class_id` as one atomic unit.
    ///
    /// Reads the counter and capacity, checks for an existing enrollment
    /// (reported before a full class), inserts the enrollment row, and bumps
    /// the counter inside a single transaction. The bump is guarded by
    /// `current_enrollment < max_capacity`, so a competing enrollment that
    /// committed after our capacity read turns this one into `ClassFull`
    /// instead of overbooking. Every non-`Enrolled` outcome rolls back.
    pub async fn enroll_member(
        conn: &mut PgConnection,
        member_id: DbId,
        class_id: DbId,
    ) -> Result<EnrollmentOutcome, DbError> {
        let context = format!(
            "Failed to enroll member with ID: {member_id} into class ID: {class_id}"
        );
        let mut tx = conn.begin().await.map_err(DbError::query(&context))?;

        let seats: Option<(i32, i32)> = sqlx::query_as(
            "SELECT current_enrollment, max_capacity FROM workout_classes WHERE id = $1",
        )
        .bind(class_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(DbError::query(&context))?;

        let Some((current, capacity)) = seats else {
            tx.rollback().await.map_err(DbError::query(&context))?;
            return Ok(EnrollmentOutcome::ClassNotFound);
        };

        let already_enrolled: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM class_enrollments
                            WHERE member_id = $1 AND class_id = $2)",
        )
        .bind(member_id)
        .bind(class_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::query(&context))?;
        if already_enrolled {
            tx.rollback().await.map_err(DbError::query(&context))?;
            return Ok(EnrollmentOutcome::AlreadyEnrolled);
        }

        if !has_spare_capacity(current, capacity) {
            tx.rollback().await.map_err(DbError::query(&context))?;
            return Ok(EnrollmentOutcome::ClassFull);
        }

        let inserted = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO class_enrollments (member_id, class_id) VALUES ($1, $2)
             RETURNING id, member_id, class_id, enrolled_at",
        )
        .bind(member_id)
        .bind(class_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::query(&context));
        let enrollment = match inserted {
            Ok(enrollment) => enrollment,
            // A concurrent enrollment of the same pair committed first.
            Err(e) if e.is_unique_violation() => {
                return Ok(EnrollmentOutcome::AlreadyEnrolled);
            }
            Err(e) => return Err(e),
        };

        let bumped = sqlx::query(
            "UPDATE workout_classes SET current_enrollment = current_enrollment + 1
             WHERE id = $1 AND current_enrollment < max_capacity",
        )
        .bind(class_id)
        .execute(&mut *tx)
        .await
        .map_err(DbError::query(&context))?;
        if bumped.rows_affected() == 0 {
            tx.rollback().await.map_err(DbError::query(&context))?;
            return Ok(EnrollmentOutcome::ClassFull);
        }

        tx.commit().await.map_err(DbError::query(&context))?;
        tracing::info!(
            member_id,
            class_id,
            enrollment_id = enrollment.id,
            "Member enrolled"
        );
        Ok(EnrollmentOutcome::Enrolled(enrollment))
    }
}
