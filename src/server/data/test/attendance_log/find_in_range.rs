use super::*;

/// Tests inclusive range filtering on the check-in time.
///
/// Expected: logs on the boundaries are included, logs outside are not
#[tokio::test]
async fn range_is_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let base = Local::now().naive_local();
    let start = base - Duration::hours(2);
    let end = base;

    let on_start = factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(start)
        .build()
        .await?;
    let on_end = factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(end)
        .build()
        .await?;
    factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(start - Duration::minutes(1))
        .build()
        .await?;

    let repo = AttendanceLogRepository::new(db);
    let logs = repo.find_in_range(start, end).await?;

    let ids: Vec<i32> = logs.iter().map(|log| log.id).collect();
    assert_eq!(ids, vec![on_start.id, on_end.id]);
    Ok(())
}

/// Tests that results come back ordered by check-in time ascending.
///
/// Expected: earliest check-in first regardless of insertion order
#[tokio::test]
async fn ordered_by_check_in_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let base = Local::now().naive_local();

    let later = factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(base - Duration::minutes(10))
        .build()
        .await?;
    let earlier = factory::attendance_log::AttendanceLogFactory::new(db, member.id)
        .check_in_time(base - Duration::hours(1))
        .build()
        .await?;

    let repo = AttendanceLogRepository::new(db);
    let logs = repo
        .find_in_range(base - Duration::hours(2), base)
        .await?;

    let ids: Vec<i32> = logs.iter().map(|log| log.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    Ok(())
}
