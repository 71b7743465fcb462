use super::*;

/// Tests that only logs with a null check-out time count as open.
///
/// Expected: Ok(None) once every session is closed
#[tokio::test]
async fn ignores_closed_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let now = Local::now().naive_local();
    factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(now - Duration::hours(3))
        .check_out_time(now - Duration::hours(2))
        .build()
        .await?;

    let repo = AttendanceLogRepository::new(db);
    let open = repo.find_open_session(member.id).await?;

    assert!(open.is_none());
    Ok(())
}

/// Tests that the latest open log is selected when several exist.
///
/// Expected: Ok(Some(log)) with the most recent check-in time
#[tokio::test]
async fn picks_latest_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let now = Local::now().naive_local();
    factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(now - Duration::hours(5))
        .build()
        .await?;
    let latest = factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(now - Duration::hours(1))
        .build()
        .await?;

    let repo = AttendanceLogRepository::new(db);
    let open = repo.find_open_session(member.id).await?;

    assert_eq!(open.map(|log| log.id), Some(latest.id));
    Ok(())
}

/// Tests that another member's open session is not returned.
///
/// Expected: Ok(None) for the member with no logs
#[tokio::test]
async fn scoped_to_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let checked_in = factory::member::create_member(db).await?;
    let other = factory::member::create_member(db).await?;
    factory::attendance_log::create_open_session(db, checked_in.id).await?;

    let repo = AttendanceLogRepository::new(db);
    let open = repo.find_open_session(other.id).await?;

    assert!(open.is_none());
    Ok(())
}
