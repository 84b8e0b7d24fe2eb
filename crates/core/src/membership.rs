//! Membership tiers, payment statuses, and the validity-period default.

use chrono::{Months, NaiveDate};

use crate::error::CoreError;

/// Status assigned to every newly purchased membership.
pub const PAYMENT_PENDING: &str = "PENDING";

/// Status counted towards revenue. Nothing in the application sets it; it
/// arrives from outside (seed data or manual SQL).
pub const PAYMENT_PAID: &str = "PAID";

/// Description attached to memberships bought from the tier catalogue.
pub const DEFAULT_DESCRIPTION: &str = "Standard membership";

/// Length of a membership purchased today.
pub const VALIDITY_MONTHS: u32 = 1;

/// The purchasable membership tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipTier {
    Basic,
    Premium,
    Platinum,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 3] = [
        MembershipTier::Basic,
        MembershipTier::Premium,
        MembershipTier::Platinum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MembershipTier::Basic => "Basic",
            MembershipTier::Premium => "Premium",
            MembershipTier::Platinum => "Platinum",
        }
    }

    /// Monthly price in dollars.
    pub fn monthly_price(self) -> f64 {
        match self {
            MembershipTier::Basic => 29.99,
            MembershipTier::Premium => 49.99,
            MembershipTier::Platinum => 79.99,
        }
    }
}

/// Start and end dates for a membership starting on `start`.
///
/// Month arithmetic clamps to the last day of shorter months, so a membership
/// bought on January 31st ends on the last day of February.
pub fn validity_period(start: NaiveDate) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let end = start
        .checked_add_months(Months::new(VALIDITY_MONTHS))
        .ok_or_else(|| CoreError::Validation(format!("Start date {start} is out of range")))?;
    Ok((start, end))
}

pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(format!(
            "Price must be a non-negative amount, got {price}"
        )));
    }
    Ok(())
}

/// Percentage of `total` contributed by `revenue`; zero when there is no revenue at all.
pub fn revenue_share(revenue: f64, total: f64) -> f64 {
    if total > 0.0 {
        revenue / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn validity_period_is_one_calendar_month() {
        let (start, end) = validity_period(date(2026, 3, 15)).unwrap();
        assert_eq!(start, date(2026, 3, 15));
        assert_eq!(end, date(2026, 4, 15));
    }

    #[test]
    fn validity_period_clamps_to_month_end() {
        let (_, end) = validity_period(date(2027, 1, 31)).unwrap();
        assert_eq!(end, date(2027, 2, 28));
    }

    #[test]
    fn end_date_is_always_after_start_date() {
        let mut day = date(2026, 1, 1);
        while day < date(2027, 1, 1) {
            let (start, end) = validity_period(day).unwrap();
            assert!(end > start, "{start} -> {end}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn tiers_have_distinct_increasing_prices() {
        let prices: Vec<f64> = MembershipTier::ALL
            .iter()
            .map(|t| t.monthly_price())
            .collect();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn negative_or_nan_prices_are_rejected() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(29.99).is_ok());
        assert_matches!(validate_price(-1.0), Err(CoreError::Validation(_)));
        assert_matches!(validate_price(f64::NAN), Err(CoreError::Validation(_)));
    }

    #[test]
    fn revenue_share_handles_zero_total() {
        assert_eq!(revenue_share(0.0, 0.0), 0.0);
        assert!((revenue_share(25.0, 100.0) - 25.0).abs() < f64::EPSILON);
    }
}
