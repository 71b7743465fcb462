use super::*;

/// Tests closing an open session.
///
/// Expected: Ok(log) with the check-out time set and no longer open
#[tokio::test]
async fn closes_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let now = Local::now().naive_local();
    let open = factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(now - Duration::hours(1))
        .build()
        .await?;

    let repo = AttendanceLogRepository::new(db);
    let closed = repo.set_check_out(open, now).await?;

    assert_eq!(closed.check_out_time, Some(now));
    assert!(repo.find_open_session(member.id).await?.is_none());
    Ok(())
}

/// Tests that closing one session leaves other fields untouched.
///
/// Expected: status and recorded_by unchanged after check-out
#[tokio::test]
async fn preserves_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let now = Local::now().naive_local();
    let open = factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(now - Duration::minutes(30))
        .status(AttendanceStatus::Late)
        .recorded_by(RecordedBy::Owner)
        .build()
        .await?;

    let repo = AttendanceLogRepository::new(db);
    let closed = repo.set_check_out(open, now).await?;

    assert_eq!(closed.status, AttendanceStatus::Late);
    assert_eq!(closed.recorded_by, RecordedBy::Owner);
    Ok(())
}
