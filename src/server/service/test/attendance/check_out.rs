use super::*;

/// Tests closing a session and the derived duration.
///
/// Expected: check-out time set, duration in whole minutes
#[tokio::test]
async fn closes_session_with_duration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let base = Local::now().naive_local();
    factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(base - Duration::minutes(90))
        .build()
        .await?;

    let log = AttendanceService::new(db)
        .check_out(
            member.id,
            CheckOutParams {
                check_out_time: Some(base),
            },
        )
        .await?;

    assert_eq!(log.check_out_time, Some(base));
    assert_eq!(log.duration_minutes, Some(90));
    Ok(())
}

/// Tests check-out with no open session.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_without_open_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let result = AttendanceService::new(db)
        .check_out(member.id, CheckOutParams { check_out_time: None })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    Ok(())
}

/// Tests the ordering guard between check-in and check-out.
///
/// Expected: Err(AppError::InvalidTimeRange) and the session stays open
#[tokio::test]
async fn rejects_check_out_before_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let base = Local::now().naive_local();
    factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(base)
        .build()
        .await?;

    let service = AttendanceService::new(db);
    let result = service
        .check_out(
            member.id,
            CheckOutParams {
                check_out_time: Some(base - Duration::minutes(5)),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidTimeRange(_))));
    // The open session must survive the rejected attempt.
    let open = service.list_for_member(member.id).await?;
    assert!(open[0].check_out_time.is_none());
    Ok(())
}

/// Tests a check-out at the exact check-in instant.
///
/// Expected: Ok with a zero-minute duration, not a range error
#[tokio::test]
async fn allows_check_out_at_check_in_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let base = Local::now().naive_local();
    factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(base)
        .build()
        .await?;

    let log = AttendanceService::new(db)
        .check_out(
            member.id,
            CheckOutParams {
                check_out_time: Some(base),
            },
        )
        .await?;

    assert_eq!(log.duration_minutes, Some(0));
    Ok(())
}
