use gym_db::models::user::User;

use super::{App, CHOICE_PROMPT};
use crate::error::AppResult;
use crate::tables;

impl App {
    pub(super) async fn member_menu(&mut self, member: &User) -> AppResult<()> {
        loop {
            self.console.println("\n=== Member Menu ===")?;
            self.console.println("1. Browse classes")?;
            self.console.println("2. Enroll in class")?;
            self.console.println("3. View my enrolled classes")?;
            self.console.println("4. View my memberships")?;
            self.console.println("5. Purchase membership")?;
            self.console.println("6. Logout")?;

            let result = match self.console.read_int(CHOICE_PROMPT, 1, 6)? {
                1 => self.browse_classes().await,
                2 => self.enroll(member).await,
                3 => self.view_enrolled_classes(member).await,
                4 => self.view_my_memberships(member).await,
                5 => self.purchase_membership(member).await,
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    async fn browse_classes(&mut self) -> AppResult<()> {
        let classes = self.services.classes.list_all().await?;
        self.show(&classes, "No classes scheduled.", tables::classes_table)
    }

    async fn enroll(&mut self, member: &User) -> AppResult<()> {
        let class_id = self.console.read_int("Class ID to enroll in: ", 1, i64::MAX)?;
        self.services.classes.enroll_member(member, class_id).await?;
        self.console.println(format!("Enrolled in class {class_id}."))?;
        Ok(())
    }

    async fn view_enrolled_classes(&mut self, member: &User) -> AppResult<()> {
        let classes = self.services.classes.enrolled_classes(member.id).await?;
        self.show(
            &classes,
            "You are not enrolled in any classes.",
            tables::classes_table,
        )
    }

    async fn view_my_memberships(&mut self, member: &User) -> AppResult<()> {
        let memberships = self
            .services
            .memberships
            .memberships_for_user(member.id)
            .await?;
        self.show(
            &memberships,
            "You have no memberships.",
            tables::memberships_table,
        )
    }
}
