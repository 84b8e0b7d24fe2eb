//! Repository for the `memberships` table.

use gym_core::membership::PAYMENT_PAID;
use gym_core::types::DbId;
use sqlx::PgConnection;

use crate::error::DbError;
use crate::models::membership::{CreateMembership, Membership, TypeRevenue};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, membership_type, description, start_date, end_date, price, payment_status";

/// Provides create/read operations and revenue aggregates for memberships.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Insert a new membership, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMembership,
    ) -> Result<Membership, DbError> {
        let query = format!(
            "INSERT INTO memberships
                (user_id, membership_type, description, start_date, end_date, price, payment_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let membership = sqlx::query_as::<_, Membership>(&query)
            .bind(input.user_id)
            .bind(&input.membership_type)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.price)
            .bind(&input.payment_status)
            .fetch_one(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to create membership for user {}",
                input.user_id
            )))?;
        tracing::debug!(
            membership_id = membership.id,
            user_id = membership.user_id,
            "Membership created"
        );
        Ok(membership)
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Membership>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM memberships WHERE id = $1");
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(DbError::query(format!("Failed to find membership {id}")))
    }

    /// All memberships owned by `user_id`, newest first.
    pub async fn list_for_user(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<Vec<Membership>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM memberships WHERE user_id = $1
             ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(user_id)
            .fetch_all(conn)
            .await
            .map_err(DbError::query(format!(
                "Failed to find memberships for user {user_id}"
            )))
    }

    /// Every membership in id order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Membership>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM memberships ORDER BY id ASC");
        sqlx::query_as::<_, Membership>(&query)
            .fetch_all(conn)
            .await
            .map_err(DbError::query("Failed to list memberships"))
    }

    /// Sum of prices over memberships whose status is `PAID`; zero when there are none.
    pub async fn total_revenue(conn: &mut PgConnection) -> Result<f64, DbError> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(price), 0)::float8 FROM memberships WHERE payment_status = $1",
        )
        .bind(PAYMENT_PAID)
        .fetch_one(conn)
        .await
        .map_err(DbError::query("Error calculating total revenue"))
    }

    /// Per membership type: number of memberships (any status) and revenue
    /// from the paid ones. Ordered by type name.
    pub async fn revenue_by_type(conn: &mut PgConnection) -> Result<Vec<TypeRevenue>, DbError> {
        sqlx::query_as::<_, TypeRevenue>(
            "SELECT membership_type,
                    COUNT(*) AS membership_count,
                    COALESCE(SUM(price) FILTER (WHERE payment_status = $1), 0)::float8 AS revenue
             FROM memberships
             GROUP BY membership_type
             ORDER BY membership_type ASC",
        )
        .bind(PAYMENT_PAID)
        .fetch_all(conn)
        .await
        .map_err(DbError::query(
            "Error calculating revenue by membership type",
        ))
    }
}
