use super::*;

/// Tests a plain check-in with every field defaulted.
///
/// Expected: open session with status PRESENT stamped with the caller's
/// actor type, plus one owner notification
#[tokio::test]
async fn opens_session_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let log = AttendanceService::new(db)
        .check_in(member.id, default_check_in(RecordedBy::Receptionist))
        .await?;

    assert_eq!(log.member_id, member.id);
    assert_eq!(log.status, AttendanceStatus::Present);
    assert_eq!(log.recorded_by, RecordedBy::Receptionist);
    assert!(log.check_out_time.is_none());
    assert!(log.duration_minutes.is_none());

    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "New check-in");
    Ok(())
}

/// Tests that an explicit time and status are honored.
///
/// Expected: the stored log carries the requested values
#[tokio::test]
async fn honors_requested_time_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let requested = Local::now().naive_local() - Duration::minutes(15);

    let log = AttendanceService::new(db)
        .check_in(
            member.id,
            CheckInParams {
                check_in_time: Some(requested),
                status: Some(AttendanceStatus::Late),
                recorded_by: RecordedBy::Owner,
            },
        )
        .await?;

    assert_eq!(log.check_in_time, requested);
    assert_eq!(log.status, AttendanceStatus::Late);
    assert_eq!(log.recorded_by, RecordedBy::Owner);
    Ok(())
}

/// Tests the guard against inactive members.
///
/// Expected: Err(AppError::Inactive) and no log created
#[tokio::test]
async fn rejects_inactive_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .status(Status::Inactive)
        .build()
        .await?;

    let result = AttendanceService::new(db)
        .check_in(member.id, default_check_in(RecordedBy::System))
        .await;

    assert!(matches!(result, Err(AppError::Inactive(_))));
    let logs = entity::prelude::AttendanceLog::find().all(db).await?;
    assert!(logs.is_empty());
    Ok(())
}

/// Tests the open-session guard.
///
/// Expected: Err(AppError::Conflict) on the second check-in
#[tokio::test]
async fn rejects_double_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let service = AttendanceService::new(db);

    service
        .check_in(member.id, default_check_in(RecordedBy::Receptionist))
        .await?;
    let second = service
        .check_in(member.id, default_check_in(RecordedBy::Receptionist))
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    Ok(())
}

/// Tests that a closed session does not block a new check-in.
///
/// Expected: Ok on check-in after checking out
#[tokio::test]
async fn allows_check_in_after_check_out() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let service = AttendanceService::new(db);
    let base = Local::now().naive_local();

    service
        .check_in(
            member.id,
            CheckInParams {
                check_in_time: Some(base - Duration::hours(3)),
                status: None,
                recorded_by: RecordedBy::Receptionist,
            },
        )
        .await?;
    service
        .check_out(
            member.id,
            CheckOutParams {
                check_out_time: Some(base - Duration::hours(2)),
            },
        )
        .await?;

    let again = service
        .check_in(member.id, default_check_in(RecordedBy::Receptionist))
        .await?;
    assert!(again.check_out_time.is_none());
    Ok(())
}
