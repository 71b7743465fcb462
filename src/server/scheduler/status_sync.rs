use chrono::Local;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    model::jobs::SyncResultDto,
    server::{
        data::membership::MembershipRepository,
        error::AppError,
        service::{membership_status, notification::NotificationService},
    },
};
use entity::enums::MembershipStatus;

/// Starts the daily membership status reconciliation scheduler.
///
/// The job reads every membership, re-derives its status from the stored
/// dates, and batch-writes the rows whose status changed.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Six-field cron expression; defaults to ten seconds past
///   midnight so the derivation sees the new local day
pub async fn start_scheduler(db: DatabaseConnection, cron: String) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            match run_sync(&db, true).await {
                Ok(result) => tracing::info!("Membership status sync: {}", result.message),
                Err(e) => tracing::error!("Membership status sync failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Membership status scheduler started");

    Ok(())
}

/// One reconciliation pass over the whole membership table.
///
/// CANCELLED memberships are skipped, everything else is re-derived from
/// its dates. Changed rows are written in a single transaction; a failure
/// anywhere aborts the whole pass. Re-running the pass immediately is a
/// no-op. When `notify` is set, exactly one owner summary notification is
/// emitted per pass, best-effort.
pub async fn run_sync(db: &DatabaseConnection, notify: bool) -> Result<SyncResultDto, AppError> {
    let memberships = MembershipRepository::new(db).find_all().await?;

    if memberships.is_empty() {
        tracing::info!("No memberships found.");
        if notify {
            notify_owner(
                db,
                "Membership status sync",
                "No memberships found. Scheduler ran with no work to do.",
            )
            .await;
        }
        return Ok(SyncResultDto::empty("No memberships found."));
    }

    let today = Local::now().date_naive();
    let mut to_active = 0u32;
    let mut to_expired = 0u32;
    let mut to_pending = 0u32;
    let mut changed = Vec::new();

    for membership in memberships {
        if membership.status == MembershipStatus::Cancelled {
            continue;
        }
        let derived = membership_status::derive_status(
            membership.status,
            membership.start_date,
            membership.end_date,
            today,
        );
        if derived != membership.status {
            match derived {
                MembershipStatus::Active => to_active += 1,
                MembershipStatus::Expired => to_expired += 1,
                MembershipStatus::Pending => to_pending += 1,
                MembershipStatus::Cancelled => {}
            }
            changed.push((membership, derived));
        }
    }

    let updates = changed.len() as u32;
    if updates > 0 {
        let txn = db.begin().await?;
        let repo = MembershipRepository::new(&txn);
        for (membership, status) in changed {
            repo.set_status(membership, status).await?;
        }
        txn.commit().await?;
    }

    let message = if updates > 0 {
        format!(
            "Updated {} memberships. ACTIVE={}, EXPIRED={}, PENDING={}",
            updates, to_active, to_expired, to_pending
        )
    } else {
        "No status changes today.".to_string()
    };
    tracing::info!("{}", message);

    if notify {
        notify_owner(db, "Membership status sync completed", &message).await;
    }

    Ok(SyncResultDto {
        updates,
        to_active,
        to_expired,
        to_pending,
        message,
    })
}

async fn notify_owner(db: &DatabaseConnection, title: &str, message: &str) {
    if let Err(err) = NotificationService::new(db).notify_owner(title, message).await {
        tracing::warn!("Failed to persist sync notification: {}", err);
    }
}
