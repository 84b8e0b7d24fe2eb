//! Membership purchases and revenue reporting.

use chrono::{Local, NaiveDate};
use gym_core::error::CoreError;
use gym_core::membership::{
    revenue_share, validate_price, validity_period, MembershipTier, DEFAULT_DESCRIPTION,
    PAYMENT_PENDING,
};
use gym_core::types::DbId;
use gym_db::models::membership::{CreateMembership, Membership, TypeRevenue};
use gym_db::repositories::{MembershipRepo, UserRepo};
use gym_db::Database;

use crate::error::AppResult;

/// What a user is buying. Dates and payment status are filled in by the service.
#[derive(Debug, Clone)]
pub struct PurchaseRequest {
    pub membership_type: String,
    pub description: Option<String>,
    pub price: f64,
}

impl From<MembershipTier> for PurchaseRequest {
    fn from(tier: MembershipTier) -> Self {
        Self {
            membership_type: tier.label().to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            price: tier.monthly_price(),
        }
    }
}

/// Per-type revenue lines plus the overall paid total.
#[derive(Debug, Clone)]
pub struct RevenueReport {
    pub lines: Vec<TypeRevenue>,
    pub total: f64,
}

impl RevenueReport {
    /// Percentage of the total contributed by `line`.
    pub fn share(&self, line: &TypeRevenue) -> f64 {
        revenue_share(line.revenue, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct MembershipService {
    db: Database,
}

impl MembershipService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Buy a membership starting today, valid for one month, payment pending.
    pub async fn purchase(&self, user_id: DbId, request: PurchaseRequest) -> AppResult<Membership> {
        self.purchase_starting(user_id, request, Local::now().date_naive())
            .await
    }

    /// Buy one of the catalogue tiers starting today.
    pub async fn purchase_tier(
        &self,
        user_id: DbId,
        tier: MembershipTier,
    ) -> AppResult<Membership> {
        self.purchase(user_id, tier.into()).await
    }

    /// Buy a membership starting on `start`.
    pub async fn purchase_starting(
        &self,
        user_id: DbId,
        request: PurchaseRequest,
        start: NaiveDate,
    ) -> AppResult<Membership> {
        let membership_type = request.membership_type.trim();
        if membership_type.is_empty() {
            return Err(CoreError::Validation(
                "Membership type is required".to_string(),
            )
            .into());
        }
        validate_price(request.price)?;
        let (start_date, end_date) = validity_period(start)?;

        let mut conn = self.db.connect().await?;
        if UserRepo::find_by_id(&mut conn, user_id)
            .await?
            .is_none()
        {
            return Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into());
        }

        let input = CreateMembership {
            user_id,
            membership_type: membership_type.to_string(),
            description: request.description,
            start_date,
            end_date,
            price: request.price,
            payment_status: PAYMENT_PENDING.to_string(),
        };
        let membership = MembershipRepo::create(&mut conn, &input).await?;
        tracing::info!(
            membership_id = membership.id,
            user_id,
            membership_type = %membership.membership_type,
            "Membership purchased"
        );
        Ok(membership)
    }

    pub async fn memberships_for_user(&self, user_id: DbId) -> AppResult<Vec<Membership>> {
        let mut conn = self.db.connect().await?;
        Ok(MembershipRepo::list_for_user(&mut conn, user_id).await?)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Membership>> {
        let mut conn = self.db.connect().await?;
        Ok(MembershipRepo::list(&mut conn).await?)
    }

    /// Sum of paid membership prices.
    pub async fn total_revenue(&self) -> AppResult<f64> {
        let mut conn = self.db.connect().await?;
        Ok(MembershipRepo::total_revenue(&mut conn).await?)
    }

    pub async fn revenue_report(&self) -> AppResult<RevenueReport> {
        let mut conn = self.db.connect().await?;
        let lines = MembershipRepo::revenue_by_type(&mut conn).await?;
        let total = MembershipRepo::total_revenue(&mut conn).await?;
        Ok(RevenueReport { lines, total })
    }
}
