use chrono::Local;
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::{
    model::attendance::{today_bounds, AttendanceLogDto, RangeQuery},
    server::{
        data::{attendance_log::AttendanceLogRepository, member::MemberRepository},
        error::AppError,
        model::attendance::{CheckInParams, CheckOutParams},
        service::notification::NotificationService,
    },
};
use entity::enums::{AttendanceStatus, Status};

/// Attendance session tracker.
///
/// A member has at most one open session (check-in with no check-out).
/// Both mutating operations run their find-then-write inside a
/// transaction so two concurrent check-ins for the same member cannot
/// both observe no open session.
pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a session for the member.
    ///
    /// Check-in time defaults to now, status to PRESENT. After the commit
    /// an owner notification is emitted best-effort; a notification
    /// failure never fails the check-in.
    pub async fn check_in(
        &self,
        member_id: i32,
        params: CheckInParams,
    ) -> Result<AttendanceLogDto, AppError> {
        let txn = self.db.begin().await?;

        let member = find_member(&MemberRepository::new(&txn), member_id).await?;
        if member.status != Status::Active {
            return Err(AppError::Inactive(
                "Member is inactive and cannot check in".to_string(),
            ));
        }

        let log_repo = AttendanceLogRepository::new(&txn);
        if let Some(open) = log_repo.find_open_session(member_id).await? {
            return Err(AppError::Conflict(format!(
                "Member is already checked in since {}",
                open.check_in_time.format("%Y-%m-%d %H:%M")
            )));
        }

        let check_in_time = params
            .check_in_time
            .unwrap_or_else(|| Local::now().naive_local());
        let status = params.status.unwrap_or(AttendanceStatus::Present);
        let log = log_repo
            .insert(member_id, check_in_time, status, params.recorded_by)
            .await?;

        txn.commit().await?;

        let message = format!(
            "{} {} checked in at {} (by {})",
            member.first_name,
            member.last_name,
            check_in_time.format("%Y-%m-%d %H:%M"),
            params.recorded_by.to_value()
        );
        if let Err(err) = NotificationService::new(self.db)
            .notify_owner("New check-in", &message)
            .await
        {
            tracing::warn!("Failed to persist check-in notification: {}", err);
        }

        Ok(AttendanceLogDto::from(log))
    }

    /// Closes the member's open session. The log row is immutable after
    /// its check-out time is set.
    pub async fn check_out(
        &self,
        member_id: i32,
        params: CheckOutParams,
    ) -> Result<AttendanceLogDto, AppError> {
        let txn = self.db.begin().await?;

        let member = find_member(&MemberRepository::new(&txn), member_id).await?;
        if member.status != Status::Active {
            return Err(AppError::Inactive(
                "Member is inactive and cannot check out".to_string(),
            ));
        }

        let log_repo = AttendanceLogRepository::new(&txn);
        let open = log_repo.find_open_session(member_id).await?.ok_or_else(|| {
            AppError::Conflict("No active check-in session to check out".to_string())
        })?;

        let check_out_time = params
            .check_out_time
            .unwrap_or_else(|| Local::now().naive_local());
        if check_out_time < open.check_in_time {
            return Err(AppError::InvalidTimeRange(
                "Check-out time cannot be before check-in time".to_string(),
            ));
        }

        let log = log_repo.set_check_out(open, check_out_time).await?;
        txn.commit().await?;

        Ok(AttendanceLogDto::from(log))
    }

    pub async fn list_for_member(&self, member_id: i32) -> Result<Vec<AttendanceLogDto>, AppError> {
        find_member(&MemberRepository::new(self.db), member_id).await?;
        let logs = AttendanceLogRepository::new(self.db)
            .find_by_member(member_id)
            .await?;
        Ok(logs.into_iter().map(AttendanceLogDto::from).collect())
    }

    pub async fn list_by_status(
        &self,
        status: AttendanceStatus,
    ) -> Result<Vec<AttendanceLogDto>, AppError> {
        let logs = AttendanceLogRepository::new(self.db)
            .find_by_status(status)
            .await?;
        Ok(logs.into_iter().map(AttendanceLogDto::from).collect())
    }

    pub async fn list_in_range(&self, range: RangeQuery) -> Result<Vec<AttendanceLogDto>, AppError> {
        if range.end < range.start {
            return Err(AppError::InvalidTimeRange(
                "Range end cannot be before range start".to_string(),
            ));
        }
        let logs = AttendanceLogRepository::new(self.db)
            .find_in_range(range.start, range.end)
            .await?;
        Ok(logs.into_iter().map(AttendanceLogDto::from).collect())
    }

    /// Logs checked in during the current local day.
    pub async fn list_today(&self) -> Result<Vec<AttendanceLogDto>, AppError> {
        let (start, end) = today_bounds(Local::now().naive_local());
        let logs = AttendanceLogRepository::new(self.db)
            .find_in_range(start, end)
            .await?;
        Ok(logs.into_iter().map(AttendanceLogDto::from).collect())
    }
}

async fn find_member<C: sea_orm::ConnectionTrait>(
    repo: &MemberRepository<'_, C>,
    member_id: i32,
) -> Result<entity::member::Model, AppError> {
    repo.find_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", member_id)))
}
