//! Account roles and the role-specific profile attached to each account.
//!
//! The role strings must match the `ck_users_role` constraint in
//! `db/sql/schema.sql`.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_TRAINER: &str = "TRAINER";
pub const ROLE_MEMBER: &str = "MEMBER";

/// The closed set of account roles. Decides which menu a user reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Trainer,
    Member,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Trainer, Role::Member];

    /// Database and display representation (`"ADMIN"`, `"TRAINER"`, `"MEMBER"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Trainer => ROLE_TRAINER,
            Role::Member => ROLE_MEMBER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_TRAINER => Ok(Role::Trainer),
            ROLE_MEMBER => Ok(Role::Member),
            other => Err(CoreError::Validation(format!("Unknown role: {other:?}"))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Role plus the extra fields only that role carries.
///
/// Admins have no extra data; trainers record a specialization and their
/// years of experience; members record free-text fitness goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleProfile {
    Admin,
    Trainer {
        specialization: Option<String>,
        years_of_experience: i32,
    },
    Member {
        fitness_goals: Option<String>,
    },
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Admin => Role::Admin,
            RoleProfile::Trainer { .. } => Role::Trainer,
            RoleProfile::Member { .. } => Role::Member,
        }
    }

    /// Rebuild a profile from the flat `users` columns.
    ///
    /// Columns that do not belong to `role` are ignored; a trainer row with a
    /// NULL experience column reads as zero years.
    pub fn from_columns(
        role: Role,
        specialization: Option<String>,
        years_of_experience: Option<i32>,
        fitness_goals: Option<String>,
    ) -> Self {
        match role {
            Role::Admin => RoleProfile::Admin,
            Role::Trainer => RoleProfile::Trainer {
                specialization,
                years_of_experience: years_of_experience.unwrap_or(0),
            },
            Role::Member => RoleProfile::Member { fitness_goals },
        }
    }

    pub fn specialization(&self) -> Option<&str> {
        match self {
            RoleProfile::Trainer { specialization, .. } => specialization.as_deref(),
            _ => None,
        }
    }

    pub fn years_of_experience(&self) -> Option<i32> {
        match self {
            RoleProfile::Trainer {
                years_of_experience,
                ..
            } => Some(*years_of_experience),
            _ => None,
        }
    }

    pub fn fitness_goals(&self) -> Option<&str> {
        match self {
            RoleProfile::Member { fitness_goals } => fitness_goals.as_deref(),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(years) = self.years_of_experience() {
            if years < 0 {
                return Err(CoreError::Validation(
                    "Experience cannot be negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}
