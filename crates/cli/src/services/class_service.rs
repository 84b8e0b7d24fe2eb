//! Workout class management and member enrollment.

use gym_core::error::CoreError;
use gym_core::roles::Role;
use gym_core::types::DbId;
use gym_core::workout_class::{check_capacity_change, ClassDetails};
use gym_db::models::enrollment::{Enrollment, EnrollmentOutcome};
use gym_db::models::user::User;
use gym_db::models::workout_class::{CreateWorkoutClass, UpdateWorkoutClass, WorkoutClass};
use gym_db::repositories::WorkoutClassRepo;
use gym_db::Database;

use crate::error::AppResult;

const ENTITY: &str = "Workout class";

#[derive(Debug, Clone)]
pub struct WorkoutClassService {
    db: Database,
}

impl WorkoutClassService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> AppResult<Vec<WorkoutClass>> {
        let mut conn = self.db.connect().await?;
        Ok(WorkoutClassRepo::list(&mut conn).await?)
    }

    pub async fn list_for_trainer(&self, trainer_id: DbId) -> AppResult<Vec<WorkoutClass>> {
        let mut conn = self.db.connect().await?;
        let classes = WorkoutClassRepo::list_for_trainer(&mut conn, trainer_id).await?;
        Ok(classes)
    }

    pub async fn find_class(&self, id: DbId) -> AppResult<WorkoutClass> {
        let mut conn = self.db.connect().await?;
        WorkoutClassRepo::find_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: ENTITY, id }.into())
    }

    /// Create a class owned by `trainer`. Details are validated before
    /// anything is written.
    pub async fn create_class(
        &self,
        trainer: &User,
        details: ClassDetails,
    ) -> AppResult<WorkoutClass> {
        require_role(trainer, Role::Trainer, "Only trainers can create classes")?;
        details.check()?;

        let mut conn = self.db.connect().await?;
        let input = CreateWorkoutClass {
            trainer_id: trainer.id,
            details,
        };
        let class = WorkoutClassRepo::create(&mut conn, &input).await?;
        tracing::info!(
            class_id = class.id,
            trainer_id = trainer.id,
            "Workout class created"
        );
        Ok(class)
    }

    /// Apply `update` to a class `trainer` owns.
    ///
    /// The merged details are validated as a whole, and the capacity may not
    /// drop below the members already enrolled.
    pub async fn update_class(
        &self,
        trainer: &User,
        class_id: DbId,
        update: UpdateWorkoutClass,
    ) -> AppResult<WorkoutClass> {
        let mut conn = self.db.connect().await?;
        let class = WorkoutClassRepo::find_by_id(&mut conn, class_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENTITY,
                id: class_id,
            })?;
        require_owner(trainer, &class)?;
        if update.is_empty() {
            return Ok(class);
        }

        let merged = update.apply_to(class.details());
        merged.check()?;
        check_capacity_change(merged.max_capacity, class.current_enrollment)?;

        match WorkoutClassRepo::update(&mut conn, class_id, &update).await {
            Ok(Some(updated)) => {
                tracing::info!(class_id, trainer_id = trainer.id, "Workout class updated");
                Ok(updated)
            }
            Ok(None) => Err(CoreError::NotFound {
                entity: ENTITY,
                id: class_id,
            }
            .into()),
            // Enrollment grew past the new capacity after our check.
            Err(e) if e.is_check_violation() => Err(CoreError::Validation(
                "Capacity is below the members already enrolled".to_string(),
            )
            .into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a class `trainer` owns, together with its enrollments.
    pub async fn delete_class(&self, trainer: &User, class_id: DbId) -> AppResult<()> {
        let mut conn = self.db.connect().await?;
        let class = WorkoutClassRepo::find_by_id(&mut conn, class_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENTITY,
                id: class_id,
            })?;
        require_owner(trainer, &class)?;

        if !WorkoutClassRepo::delete(&mut conn, class_id).await? {
            return Err(CoreError::NotFound {
                entity: ENTITY,
                id: class_id,
            }
            .into());
        }
        tracing::info!(class_id, trainer_id = trainer.id, "Workout class deleted");
        Ok(())
    }

    /// Enroll `member` into a class.
    ///
    /// A missing class is `NotFound`; a full class or a repeat enrollment is
    /// a `Conflict`. In every failure case nothing is written.
    pub async fn enroll_member(&self, member: &User, class_id: DbId) -> AppResult<Enrollment> {
        require_role(member, Role::Member, "Only members can enroll in classes")?;

        let mut conn = self.db.connect().await?;
        match WorkoutClassRepo::enroll_member(&mut conn, member.id, class_id).await? {
            EnrollmentOutcome::Enrolled(enrollment) => Ok(enrollment),
            EnrollmentOutcome::ClassNotFound => Err(CoreError::NotFound {
                entity: ENTITY,
                id: class_id,
            }
            .into()),
            EnrollmentOutcome::ClassFull => Err(CoreError::Conflict(
                "This class is already full".to_string(),
            )
            .into()),
            EnrollmentOutcome::AlreadyEnrolled => Err(CoreError::Conflict(
                "You are already enrolled in this class".to_string(),
            )
            .into()),
        }
    }

    pub async fn enrolled_classes(&self, member_id: DbId) -> AppResult<Vec<WorkoutClass>> {
        let mut conn = self.db.connect().await?;
        let classes = WorkoutClassRepo::list_enrolled_for_member(&mut conn, member_id).await?;
        Ok(classes)
    }
}

fn require_role(user: &User, role: Role, message: &str) -> Result<(), CoreError> {
    if user.role != role {
        return Err(CoreError::Forbidden(message.to_string()));
    }
    Ok(())
}

fn require_owner(trainer: &User, class: &WorkoutClass) -> Result<(), CoreError> {
    if class.trainer_id != trainer.id {
        return Err(CoreError::Forbidden(format!(
            "Class {} belongs to another trainer",
            class.id
        )));
    }
    Ok(())
}
