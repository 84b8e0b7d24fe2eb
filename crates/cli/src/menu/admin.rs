use gym_db::models::user::User;

use super::{App, CHOICE_PROMPT};
use crate::error::AppResult;
use crate::tables;

impl App {
    pub(super) async fn admin_menu(&mut self, admin: &User) -> AppResult<()> {
        loop {
            self.console.println("\n=== Admin Menu ===")?;
            self.console.println("1. View all users")?;
            self.console.println("2. Delete user")?;
            self.console.println("3. Revenue report")?;
            self.console.println("4. View all classes")?;
            self.console.println("5. View all memberships")?;
            self.console.println("6. Logout")?;

            let result = match self.console.read_int(CHOICE_PROMPT, 1, 6)? {
                1 => self.view_all_users().await,
                2 => self.delete_user(admin).await,
                3 => self.revenue_report().await,
                4 => self.view_all_classes().await,
                5 => self.view_all_memberships().await,
                _ => return Ok(()),
            };
            self.report(result)?;
        }
    }

    async fn view_all_users(&mut self) -> AppResult<()> {
        let users = self.services.users.list_users().await?;
        self.show(&users, "No users found.", tables::users_table)
    }

    async fn delete_user(&mut self, admin: &User) -> AppResult<()> {
        let id = self.console.read_int("User ID to delete: ", 1, i64::MAX)?;
        let target = self.services.users.find_user(id).await?;
        let question = format!(
            "Delete {} ({}) with all their memberships, classes, and enrollments?",
            target.username, target.role
        );
        if !self.console.confirm(&question)? {
            self.console.println("Deletion cancelled.")?;
            return Ok(());
        }

        if self.services.users.delete_user(admin, id).await? {
            self.console.println("User deleted.")?;
        } else {
            self.console.println("User not found.")?;
        }
        Ok(())
    }

    async fn revenue_report(&mut self) -> AppResult<()> {
        let report = self.services.memberships.revenue_report().await?;
        self.console.println("=== Revenue Report ===")?;
        self.console.println(tables::revenue_table(&report))?;
        Ok(())
    }

    async fn view_all_classes(&mut self) -> AppResult<()> {
        let classes = self.services.classes.list_all().await?;
        self.show(&classes, "No classes scheduled.", tables::classes_table)
    }

    async fn view_all_memberships(&mut self) -> AppResult<()> {
        let memberships = self.services.memberships.list_all().await?;
        self.show(
            &memberships,
            "No memberships found.",
            tables::memberships_table,
        )?;
        let total = self.services.memberships.total_revenue().await?;
        self.console.println(format!("Total paid revenue: ${total:.2}"))?;
        Ok(())
    }
}
