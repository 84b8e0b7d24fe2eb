//! Shared fixtures for the repository integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use gym_core::roles::RoleProfile;
use gym_core::workout_class::ClassDetails;
use gym_db::models::user::{CreateUser, User};
use gym_db::models::workout_class::{CreateWorkoutClass, WorkoutClass};
use gym_db::repositories::{UserRepo, WorkoutClassRepo};
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

/// Acquire a connection and create the schema (with seed data) on it.
pub async fn bootstrapped(pool: &PgPool) -> PoolConnection<Postgres> {
    let mut conn = pool.acquire().await.unwrap();
    gym_db::bootstrap::initialize(&mut conn).await.unwrap();
    conn
}

pub fn new_user(username: &str, profile: RoleProfile) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        email: format!("{username}@example.com"),
        phone_number: None,
        address: None,
        profile,
    }
}

pub fn member_profile() -> RoleProfile {
    RoleProfile::Member {
        fitness_goals: Some("Run a 10k".to_string()),
    }
}

pub fn trainer_profile() -> RoleProfile {
    RoleProfile::Trainer {
        specialization: Some("Strength".to_string()),
        years_of_experience: 4,
    }
}

pub async fn insert_member(conn: &mut sqlx::PgConnection, username: &str) -> User {
    UserRepo::create(conn, &new_user(username, member_profile()))
        .await
        .unwrap()
}

pub async fn insert_trainer(conn: &mut sqlx::PgConnection, username: &str) -> User {
    UserRepo::create(conn, &new_user(username, trainer_profile()))
        .await
        .unwrap()
}

pub fn schedule() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 5, 6)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
}

pub fn class_details(name: &str, max_capacity: i32) -> ClassDetails {
    ClassDetails {
        name: name.to_string(),
        description: Some("Test class".to_string()),
        class_type: "Cardio".to_string(),
        schedule: schedule(),
        duration_minutes: 45,
        max_capacity,
    }
}

pub async fn insert_class(
    conn: &mut sqlx::PgConnection,
    trainer_id: i64,
    name: &str,
    max_capacity: i32,
) -> WorkoutClass {
    let input = CreateWorkoutClass {
        trainer_id,
        details: class_details(name, max_capacity),
    };
    WorkoutClassRepo::create(conn, &input).await.unwrap()
}

/// Number of enrollment rows for a class, read straight from the table.
pub async fn enrollment_rows(conn: &mut sqlx::PgConnection, class_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM class_enrollments WHERE class_id = $1")
        .bind(class_id)
        .fetch_one(conn)
        .await
        .unwrap()
}
