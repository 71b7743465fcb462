use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::AppError, scheduler::status_sync};

/// Connects to the SQLite database and runs pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Runs the membership status sweep once at boot, if enabled.
///
/// A failing startup sweep is logged and swallowed; the nightly scheduler
/// will retry, and boot must not depend on it.
pub async fn run_startup_sync(db: &DatabaseConnection, config: &Config) {
    if !config.run_jobs_on_startup {
        tracing::info!("Startup jobs disabled via RUN_JOBS_ON_STARTUP=false");
        return;
    }

    tracing::info!("Running membership status sync on startup");
    match status_sync::run_sync(db, true).await {
        Ok(result) => tracing::info!("Startup membership status sync: {}", result.message),
        Err(e) => tracing::warn!("Startup membership status sync failed: {}", e),
    }
}
