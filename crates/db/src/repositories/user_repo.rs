//! Repository for the `users` table.

use gym_core::types::DbId;
use sqlx::{Connection, PgConnection};

use crate::error::DbError;
use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, email, phone_number, address, role, \
                       specialization, years_of_experience, fitness_goals, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row with its generated id.
    pub async fn create(conn: &mut PgConnection, input: &CreateUser) -> Result<User, DbError> {
        let query = format!(
            "INSERT INTO users
                (username, password_hash, email, phone_number, address, role,
                 specialization, years_of_experience, fitness_goals)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.address)
            .bind(input.profile.role().as_str())
            .bind(input.profile.specialization())
            .bind(input.profile.years_of_experience())
            .bind(input.profile.fitness_goals())
            .fetch_one(conn)
            .await
            .map_err(DbError::query(format!(
                "Error creating user: {}",
                input.username
            )))?;
        tracing::debug!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(DbError::query(format!("Error finding user with ID: {id}")))
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        conn: &mut PgConnection,
        username: &str,
    ) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(conn)
            .await
            .map_err(DbError::query(format!(
                "Error finding user by username: {username}"
            )))
    }

    /// List all users in id order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<User>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id ASC");
        sqlx::query_as::<_, User>(&query)
            .fetch_all(conn)
            .await
            .map_err(DbError::query("Error finding all users"))
    }

    /// True once the `users` table has been created.
    pub async fn exists_table(conn: &mut PgConnection) -> Result<bool, DbError> {
        sqlx::query_scalar::<_, bool>("SELECT to_regclass('users') IS NOT NULL")
            .fetch_one(conn)
            .await
            .map_err(DbError::query("Error checking for the users table"))
    }

    /// Delete a user together with everything that references them.
    ///
    /// Memberships, owned classes, and enrollments go with the row through
    /// `ON DELETE CASCADE`. Before that, the enrollment counters of classes the
    /// user was enrolled in are decremented in the same transaction so each
    /// counter keeps matching its enrollment rows.
    ///
    /// Returns `false` if no user with `id` exists.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, DbError> {
        let context = format!("Error deleting user with ID: {id}");
        let mut tx = conn.begin().await.map_err(DbError::query(&context))?;

        sqlx::query(
            "UPDATE workout_classes SET current_enrollment = current_enrollment - 1
             WHERE id IN (SELECT class_id FROM class_enrollments WHERE member_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(DbError::query(&context))?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::query(&context))?;

        tx.commit().await.map_err(DbError::query(&context))?;
        Ok(result.rows_affected() > 0)
    }
}
