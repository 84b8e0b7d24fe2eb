//! Service layer.
//!
//! Each service holds a [`Database`] and opens one connection per
//! operation. Services validate input, apply defaults, and enforce role and
//! ownership rules before handing typed values to the repositories.

pub mod class_service;
pub mod membership_service;
pub mod user_service;

use gym_db::Database;

pub use class_service::WorkoutClassService;
pub use membership_service::{MembershipService, PurchaseRequest, RevenueReport};
pub use user_service::UserService;

use crate::config::AppConfig;

/// The services the menus dispatch to.
#[derive(Debug, Clone)]
pub struct Services {
    pub users: UserService,
    pub memberships: MembershipService,
    pub classes: WorkoutClassService,
}

impl Services {
    pub fn new(db: Database, config: &AppConfig) -> Self {
        Self {
            users: UserService::new(db.clone(), config.min_password_length),
            memberships: MembershipService::new(db.clone()),
            classes: WorkoutClassService::new(db),
        }
    }
}
