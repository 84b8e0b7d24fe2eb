//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Where the entity is editable, an update DTO (all `Option` fields)

pub mod enrollment;
pub mod membership;
pub mod user;
pub mod workout_class;
