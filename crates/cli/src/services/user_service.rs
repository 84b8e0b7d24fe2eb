//! Registration, login, and account administration.

use gym_core::account::Registration;
use gym_core::error::CoreError;
use gym_core::roles::{Role, RoleProfile};
use gym_core::types::DbId;
use gym_db::models::user::{CreateUser, User};
use gym_db::repositories::UserRepo;
use gym_db::Database;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::config::DefaultAdmin;
use crate::error::{AppError, AppResult};

/// Shown for both unknown usernames and wrong passwords.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Clone)]
pub struct UserService {
    db: Database,
    min_password_length: usize,
}

impl UserService {
    pub fn new(db: Database, min_password_length: usize) -> Self {
        Self {
            db,
            min_password_length,
        }
    }

    /// Create the configured administrator unless that username is taken.
    ///
    /// Returns `true` when the account was created on this call.
    pub async fn ensure_default_admin(&self, admin: &DefaultAdmin) -> AppResult<bool> {
        let mut conn = self.db.connect().await?;
        if let Some(existing) = UserRepo::find_by_username(&mut conn, &admin.username).await? {
            if existing.role != Role::Admin {
                tracing::warn!(
                    username = %existing.username,
                    role = %existing.role,
                    "Default admin username belongs to a non-admin account"
                );
            }
            return Ok(false);
        }

        let input = CreateUser {
            username: admin.username.clone(),
            password_hash: hash(&admin.password)?,
            email: admin.email.clone(),
            phone_number: None,
            address: None,
            profile: RoleProfile::Admin,
        };
        match UserRepo::create(&mut conn, &input).await {
            Ok(user) => {
                tracing::info!(
                    user_id = user.id,
                    username = %user.username,
                    "Default admin created"
                );
                Ok(true)
            }
            // Another process created it between our lookup and insert.
            Err(e) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Register a new account of any role.
    pub async fn register(&self, registration: Registration) -> AppResult<User> {
        registration.check()?;
        validate_password_strength(&registration.password, self.min_password_length)?;

        let mut conn = self.db.connect().await?;
        if UserRepo::find_by_username(&mut conn, &registration.username)
            .await?
            .is_some()
        {
            return Err(username_taken(&registration.username));
        }

        let input = CreateUser {
            password_hash: hash(&registration.password)?,
            username: registration.username,
            email: registration.email,
            phone_number: registration.phone_number,
            address: registration.address,
            profile: registration.profile,
        };
        match UserRepo::create(&mut conn, &input).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, role = %user.role, "User registered");
                Ok(user)
            }
            Err(e) if e.is_unique_violation() => Err(username_taken(&input.username)),
            Err(e) => Err(e.into()),
        }
    }

    /// Authenticate with a username and plaintext password.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let mut conn = self.db.connect().await?;
        let Some(user) = UserRepo::find_by_username(&mut conn, username).await? else {
            return Err(invalid_credentials());
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => {
                tracing::info!(user_id = user.id, role = %user.role, "User logged in");
                Ok(user)
            }
            Ok(false) => Err(invalid_credentials()),
            Err(e) => {
                tracing::warn!(
                    user_id = user.id,
                    error = %e,
                    "Stored password hash is unusable"
                );
                Err(invalid_credentials())
            }
        }
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let mut conn = self.db.connect().await?;
        Ok(UserRepo::list(&mut conn).await?)
    }

    pub async fn find_user(&self, id: DbId) -> AppResult<User> {
        let mut conn = self.db.connect().await?;
        UserRepo::find_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "User", id }.into())
    }

    /// Delete `id` on behalf of `acting`, who must be an admin other than
    /// the target. Returns `false` when no such user exists.
    pub async fn delete_user(&self, acting: &User, id: DbId) -> AppResult<bool> {
        if acting.role != Role::Admin {
            return Err(forbidden("Only admins can delete users"));
        }
        if acting.id == id {
            return Err(forbidden("You cannot delete your own account"));
        }

        let mut conn = self.db.connect().await?;
        let deleted = UserRepo::delete(&mut conn, id).await?;
        if deleted {
            tracing::info!(user_id = id, deleted_by = acting.id, "User deleted");
        }
        Ok(deleted)
    }
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password).map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

fn invalid_credentials() -> AppError {
    CoreError::Unauthorized(INVALID_CREDENTIALS.to_string()).into()
}

fn forbidden(message: &str) -> AppError {
    CoreError::Forbidden(message.to_string()).into()
}

fn username_taken(username: &str) -> AppError {
    CoreError::Conflict(format!("Username {username:?} is already taken")).into()
}
