//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut PgConnection` as the first argument. The caller owns the
//! connection and decides how long it lives.

pub mod membership_repo;
pub mod user_repo;
pub mod workout_class_repo;

pub use membership_repo::MembershipRepo;
pub use user_repo::UserRepo;
pub use workout_class_repo::WorkoutClassRepo;
