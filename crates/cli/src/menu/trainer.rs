use gym_core::error::CoreError;
use gym_core::types::DbId;
use gym_core::workout_class::{parse_schedule, ClassDetails, SCHEDULE_DISPLAY_FORMAT};
use gym_db::models::user::User;
use gym_db::models::workout_class::{UpdateWorkoutClass, WorkoutClass};

use super::{parse_number, App, CHOICE_PROMPT};
use crate::error::AppResult;
use crate::tables;

const SCHEDULE_PROMPT: &str = "Schedule (YYYY-MM-DDTHH:MM): ";

impl App {
    pub(super) async fn trainer_menu(&mut self, trainer: &User) -> AppResult<()> {
        loop {
            self.console.println("\n=== Trainer Menu ===")?;
            self.console.println("1. View my classes")?;
            self.console.println("2. Create class")?;
            self.console.println("3. Update class")?;
            self.console.println("4. Delete class")?;
            self.console.println("5. Purchase membership")?;
            self.console.println("6. Logout")?;

            let result = match self.console.read_int(CHOICE_PROMPT, 1, 6)? {
                1 => self.view_my_classes(trainer).await,
                2 => self.create_class(trainer).await,
                3 => self.update_class(trainer).await,
                4 => self.delete_class(trainer).await,
                5 => self.purchase_membership(trainer).await,
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    async fn view_my_classes(&mut self, trainer: &User) -> AppResult<()> {
        let classes = self.services.classes.list_for_trainer(trainer.id).await?;
        self.show(&classes, "You have no classes yet.", tables::classes_table)
    }

    async fn create_class(&mut self, trainer: &User) -> AppResult<()> {
        let details = ClassDetails {
            name: self.console.read_non_empty("Class name: ")?,
            description: self.console.read_optional("Description (optional): ")?,
            class_type: self.console.read_non_empty("Class type: ")?,
            schedule: self.console.read_with(SCHEDULE_PROMPT, parse_schedule)?,
            duration_minutes: self.console.read_with("Duration (minutes): ", parse_number)?,
            max_capacity: self.console.read_with("Max capacity: ", parse_number)?,
        };
        let class = self.services.classes.create_class(trainer, details).await?;
        self.console.println(format!("Class created with ID {}.", class.id))?;
        Ok(())
    }

    async fn update_class(&mut self, trainer: &User) -> AppResult<()> {
        let id = self.console.read_int("Class ID to update: ", 1, i64::MAX)?;
        let class = self.owned_class(trainer, id).await?;
        self.console.println("Leave a field blank to keep its current value.")?;

        let update = UpdateWorkoutClass {
            name: self.console.read_optional(&format!("Name [{}]: ", class.name))?,
            description: self.console.read_optional(&format!(
                "Description [{}]: ",
                class.description.as_deref().unwrap_or("")
            ))?,
            class_type: self
                .console
                .read_optional(&format!("Class type [{}]: ", class.class_type))?,
            schedule: self.console.read_optional_with(
                &format!(
                    "Schedule [{}]: ",
                    class.schedule.format(SCHEDULE_DISPLAY_FORMAT)
                ),
                parse_schedule,
            )?,
            duration_minutes: self.console.read_optional_with(
                &format!("Duration (minutes) [{}]: ", class.duration_minutes),
                parse_number,
            )?,
            max_capacity: self.console.read_optional_with(
                &format!(
                    "Max capacity [{}, {} enrolled]: ",
                    class.max_capacity, class.current_enrollment
                ),
                parse_number,
            )?,
        };
        if update.is_empty() {
            self.console.println("Nothing to change.")?;
            return Ok(());
        }

        self.services
            .classes
            .update_class(trainer, id, update)
            .await?;
        self.console.println("Class updated.")?;
        Ok(())
    }

    async fn delete_class(&mut self, trainer: &User) -> AppResult<()> {
        let id = self.console.read_int("Class ID to delete: ", 1, i64::MAX)?;
        let class = self.owned_class(trainer, id).await?;
        let question = format!(
            "Delete {} ({} members enrolled)?",
            class.name, class.current_enrollment
        );
        if !self.console.confirm(&question)? {
            self.console.println("Deletion cancelled.")?;
            return Ok(());
        }

        self.services.classes.delete_class(trainer, id).await?;
        self.console.println("Class deleted.")?;
        Ok(())
    }

    /// Fetch a class and fail early when it belongs to someone else, so the
    /// trainer is not asked for changes that would be refused.
    async fn owned_class(&mut self, trainer: &User, id: DbId) -> AppResult<WorkoutClass> {
        let class = self.services.classes.find_class(id).await?;
        if class.trainer_id != trainer.id {
            return Err(CoreError::Forbidden(format!(
                "Class {id} belongs to another trainer"
            ))
            .into());
        }
        Ok(class)
    }
}
