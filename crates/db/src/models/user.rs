//! User entity model and DTOs.

use gym_core::roles::{Role, RoleProfile};
use gym_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- never print it. The console renders users
/// through a fixed column set that leaves it out.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub specialization: Option<String>,
    pub years_of_experience: Option<i32>,
    pub fitness_goals: Option<String>,
    pub created_at: Timestamp,
}

impl User {
    /// The role together with its role-specific columns.
    pub fn profile(&self) -> RoleProfile {
        RoleProfile::from_columns(
            self.role,
            self.specialization.clone(),
            self.years_of_experience,
            self.fitness_goals.clone(),
        )
    }
}

/// DTO for creating a new user. The role is implied by `profile`.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub profile: RoleProfile,
}
