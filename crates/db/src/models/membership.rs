//! Membership entity model and DTOs.

use chrono::NaiveDate;
use gym_core::types::DbId;
use sqlx::FromRow;

/// A row from the `memberships` table.
#[derive(Debug, Clone, FromRow)]
pub struct Membership {
    pub id: DbId,
    pub user_id: DbId,
    pub membership_type: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub payment_status: String,
}

/// DTO for inserting a membership. Dates and status are chosen by the caller.
#[derive(Debug, Clone)]
pub struct CreateMembership {
    pub user_id: DbId,
    pub membership_type: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub payment_status: String,
}

/// One line of the revenue report: how many memberships of a type exist and
/// how much the paid ones brought in.
#[derive(Debug, Clone, FromRow)]
pub struct TypeRevenue {
    pub membership_type: String,
    pub membership_count: i64,
    pub revenue: f64,
}
