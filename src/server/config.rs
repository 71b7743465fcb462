use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

// Daily at 00:10 local time.
const DEFAULT_STATUS_SYNC_CRON: &str = "0 10 0 * * *";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Cron expression for the daily membership status sweep.
    pub status_sync_cron: String,

    /// Run the membership status sweep once during boot.
    pub run_jobs_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            status_sync_cron: std::env::var("STATUS_SYNC_CRON")
                .unwrap_or_else(|_| DEFAULT_STATUS_SYNC_CRON.to_string()),
            run_jobs_on_startup: match std::env::var("RUN_JOBS_ON_STARTUP") {
                Ok(value) => value
                    .parse::<bool>()
                    .map_err(|_| ConfigError::InvalidValue("RUN_JOBS_ON_STARTUP".to_string()))?,
                Err(_) => true,
            },
        })
    }
}
