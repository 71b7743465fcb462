//! Background jobs running on cron schedules.

pub mod status_sync;
