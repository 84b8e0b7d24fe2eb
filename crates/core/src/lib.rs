//! Domain types and rules shared by the data-access layer and the console.
//!
//! Nothing in here touches the database or standard input.

pub mod account;
pub mod error;
pub mod membership;
pub mod roles;
pub mod types;
pub mod workout_class;
