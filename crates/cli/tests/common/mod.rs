//! Shared fixtures for the service and menu integration tests.

#![allow(dead_code)]

use std::io::Cursor;

use chrono::NaiveDate;
use gym_cli::config::AppConfig;
use gym_cli::console::{Console, SharedBuffer};
use gym_cli::menu::App;
use gym_cli::services::Services;
use gym_core::account::Registration;
use gym_core::roles::RoleProfile;
use gym_core::workout_class::ClassDetails;
use gym_db::models::user::User;
use gym_db::Database;
use sqlx::PgPool;

pub const PASSWORD: &str = "s3cure-pass";

/// Output captured from one scripted run of the menus.
pub struct Transcript {
    pub out: String,
    pub err: String,
}

/// Services bound to the test database, with schema, seed, and default admin in place.
pub async fn setup(pool: &PgPool) -> (Services, AppConfig) {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let db = Database::from_options((*pool.connect_options()).clone());
    let services = Services::new(db.clone(), &config);
    gym_cli::startup::prepare(&db, &services, &config)
        .await
        .unwrap();
    (services, config)
}

pub fn registration(username: &str, profile: RoleProfile) -> Registration {
    Registration {
        username: username.to_string(),
        password: PASSWORD.to_string(),
        email: format!("{username}@example.com"),
        phone_number: Some("555-0100".to_string()),
        address: None,
        profile,
    }
}

pub async fn register_member(services: &Services, username: &str) -> User {
    let profile = RoleProfile::Member {
        fitness_goals: Some("Stay active".to_string()),
    };
    services
        .users
        .register(registration(username, profile))
        .await
        .unwrap()
}

pub async fn register_trainer(services: &Services, username: &str) -> User {
    let profile = RoleProfile::Trainer {
        specialization: Some("HIIT".to_string()),
        years_of_experience: 3,
    };
    services
        .users
        .register(registration(username, profile))
        .await
        .unwrap()
}

pub fn details(name: &str, duration_minutes: i32, max_capacity: i32) -> ClassDetails {
    ClassDetails {
        name: name.to_string(),
        description: None,
        class_type: "Cardio".to_string(),
        schedule: NaiveDate::from_ymd_opt(2030, 1, 7)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        duration_minutes,
        max_capacity,
    }
}

/// Drive the menus with `input` (one answer per line) until it runs out.
pub async fn run_script(services: &Services, input: &[&str]) -> Transcript {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let mut script = input.join("\n");
    script.push('\n');
    let console = Console::new(
        Box::new(Cursor::new(script)),
        Box::new(out.clone()),
        Box::new(err.clone()),
    );
    App::new(services.clone(), console).run().await.unwrap();
    Transcript {
        out: out.contents(),
        err: err.contents(),
    }
}
