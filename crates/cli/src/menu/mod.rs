//! Interactive menus.
//!
//! [`App::run`] loops the top-level menu until the user exits or input runs
//! out. Each role menu lives in its own submodule. Errors from a single
//! action are printed to the error stream and the menu carries on; only
//! console failures end the loop.

mod admin;
mod member;
mod trainer;

use gym_core::account::Registration;
use gym_core::membership::MembershipTier;
use gym_core::roles::{Role, RoleProfile};
use gym_db::models::user::User;

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::services::Services;

/// Prompt used by every numbered menu.
const CHOICE_PROMPT: &str = "Choose an option: ";

pub struct App {
    services: Services,
    console: Console,
}

impl App {
    pub fn new(services: Services, console: Console) -> Self {
        Self { services, console }
    }

    /// Run until the user picks Exit or input ends.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.main_menu().await {
            Ok(()) => Ok(()),
            Err(e) if e.is_end_of_input() => {
                tracing::debug!("Input closed, exiting");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn main_menu(&mut self) -> AppResult<()> {
        loop {
            self.console.println("\n=== Gym Management System ===")?;
            self.console.println("1. Login")?;
            self.console.println("2. Register")?;
            self.console.println("3. Exit")?;

            match self.console.read_int(CHOICE_PROMPT, 1, 3)? {
                1 => {
                    let result = self.login().await;
                    if let Some(user) = self.report(result)? {
                        self.session(user).await?;
                    }
                }
                2 => {
                    let result = self.register().await;
                    self.report(result)?;
                }
                _ => {
                    self.console.println("Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    async fn login(&mut self) -> AppResult<User> {
        let username = self.console.read_non_empty("Username: ")?;
        let password = self.console.read_password("Password: ")?;
        let user = self.services.users.login(&username, &password).await?;
        self.console.println(format!("Welcome, {}! Role: {}", user.username, user.role))?;
        Ok(user)
    }

    async fn register(&mut self) -> AppResult<()> {
        let username = self.console.read_non_empty("Username: ")?;
        let password = self.console.read_password("Password: ")?;
        let email = self.console.read_non_empty("Email: ")?;
        let phone_number = self.console.read_optional("Phone number (optional): ")?;
        let address = self.console.read_optional("Address (optional): ")?;

        self.console.println("Select role:")?;
        for (i, role) in Role::ALL.iter().enumerate() {
            self.console.println(format!("{}. {}", i + 1, role))?;
        }
        let choice = self.console.read_int(CHOICE_PROMPT, 1, Role::ALL.len() as i64)?;
        let profile = match Role::ALL[(choice - 1) as usize] {
            Role::Admin => RoleProfile::Admin,
            Role::Trainer => RoleProfile::Trainer {
                specialization: self.console.read_optional("Specialization (optional): ")?,
                years_of_experience: self.console.read_with("Years of experience: ", parse_years)?,
            },
            Role::Member => RoleProfile::Member {
                fitness_goals: self.console.read_optional("Fitness goals (optional): ")?,
            },
        };

        let registration = Registration {
            username,
            password,
            email,
            phone_number,
            address,
            profile,
        };
        let user = self.services.users.register(registration).await?;
        self.console.println(format!(
            "Registration successful. You can now log in as {}.",
            user.username
        ))?;
        Ok(())
    }

    async fn session(&mut self, user: User) -> AppResult<()> {
        match user.role {
            Role::Admin => self.admin_menu(&user).await?,
            Role::Trainer => self.trainer_menu(&user).await?,
            Role::Member => self.member_menu(&user).await?,
        }
        self.console.println("Logged out.")?;
        Ok(())
    }

    /// Tier catalogue, shared by the trainer and member menus.
    async fn purchase_membership(&mut self, user: &User) -> AppResult<()> {
        self.console.println("Available memberships:")?;
        for (i, tier) in MembershipTier::ALL.iter().enumerate() {
            self.console.println(format!(
                "{}. {} - ${:.2}/month",
                i + 1,
                tier.label(),
                tier.monthly_price()
            ))?;
        }
        let cancel = MembershipTier::ALL.len() as i64 + 1;
        self.console.println(format!("{cancel}. Cancel"))?;

        let choice = self.console.read_int(CHOICE_PROMPT, 1, cancel)?;
        if choice == cancel {
            return Ok(());
        }
        let tier = MembershipTier::ALL[(choice - 1) as usize];
        let membership = self
            .services
            .memberships
            .purchase_tier(user.id, tier)
            .await?;
        self.console.println(format!(
            "Purchased {} membership valid {} to {}. Payment status: {}",
            membership.membership_type,
            membership.start_date,
            membership.end_date,
            membership.payment_status
        ))?;
        Ok(())
    }

    /// Print a table, or `empty` when there is nothing to show.
    fn show<T>(&mut self, items: &[T], empty: &str, table: fn(&[T]) -> String) -> AppResult<()> {
        if items.is_empty() {
            self.console.println(empty)?;
        } else {
            self.console.println(table(items))?;
        }
        Ok(())
    }

    /// Print a failed action's error and keep going. Console failures are
    /// passed through so the caller can stop.
    fn report<T>(&mut self, result: AppResult<T>) -> AppResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e @ AppError::Io(_)) => Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "Action failed");
                self.console.error(&e)?;
                Ok(None)
            }
        }
    }
}

fn parse_years(answer: &str) -> Result<i32, String> {
    match answer.parse::<i32>() {
        Ok(years) if years >= 0 => Ok(years),
        _ => Err("Years must be a whole number, 0 or more".to_string()),
    }
}

fn parse_number(answer: &str) -> Result<i32, String> {
    answer
        .parse::<i32>()
        .map_err(|_| format!("{answer:?} is not a whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_must_be_non_negative_integers() {
        assert_eq!(parse_years("0"), Ok(0));
        assert_eq!(parse_years("12"), Ok(12));
        assert!(parse_years("-1").is_err());
        assert!(parse_years("ten").is_err());
    }

    #[test]
    fn numbers_may_be_negative_for_later_validation() {
        assert_eq!(parse_number("-5"), Ok(-5));
        assert!(parse_number("4.5").is_err());
    }
}
