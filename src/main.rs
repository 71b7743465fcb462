mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::status_sync, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    // Run the membership status sweep once at boot. Failures are logged and
    // swallowed; they must never prevent the server from starting.
    startup::run_startup_sync(&db, &config).await;

    // Daily membership status reconciliation
    let scheduler_db = db.clone();
    let sync_cron = config.status_sync_cron.clone();
    tokio::spawn(async move {
        if let Err(e) = status_sync::start_scheduler(scheduler_db, sync_cron).await {
            tracing::error!("Membership status scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(tower_http::cors::CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
