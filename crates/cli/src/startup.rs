//! One-time work done before the first menu is shown.

use gym_db::Database;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::services::Services;

/// Create the schema on an empty database, then make sure the configured
/// administrator exists. Safe to run on every start.
pub async fn prepare(db: &Database, services: &Services, config: &AppConfig) -> AppResult<()> {
    let mut conn = db.connect().await?;
    if gym_db::bootstrap::initialize(&mut conn).await? {
        tracing::info!("Initialized empty database with schema and sample data");
    }
    drop(conn);

    if services
        .users
        .ensure_default_admin(&config.admin)
        .await?
    {
        tracing::info!(
            username = %config.admin.username,
            "Created default admin account"
        );
    }
    Ok(())
}
