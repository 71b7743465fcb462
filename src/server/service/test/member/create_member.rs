use super::*;

/// Tests the full signup: account, member, membership, profile, payment.
///
/// Expected: all five records created, membership window computed from
/// the plan duration with the renewal date mirroring the end date
#[tokio::test]
async fn creates_full_aggregate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let today = Local::now().date_naive();

    let member = MemberService::new(db)
        .create_member(signup_dto(plan.id, "alex@example.com", today))
        .await?;

    assert_eq!(member.email, "alex@example.com");
    assert_eq!(member.status, Status::Active);

    let membership = member.membership.expect("membership created at signup");
    assert_eq!(membership.start_date, today);
    assert_eq!(membership.end_date, membership.renewal_date);
    assert_eq!(membership.status, MembershipStatus::Active);

    assert!(member.fitness_profile.is_some());

    let payments = entity::prelude::Payment::find().all(db).await?;
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount_paid, 29.99);

    let users = entity::prelude::User::find().all(db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "alex@example.com");
    assert_ne!(users[0].password_hash, "hunter2hunter2");
    Ok(())
}

/// Tests a signup with a start date in the future.
///
/// Expected: the membership derives PENDING, not ACTIVE
#[tokio::test]
async fn future_start_date_derives_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let start = Local::now().date_naive() + Duration::days(5);

    let member = MemberService::new(db)
        .create_member(signup_dto(plan.id, "alex@example.com", start))
        .await?;

    let membership = member.membership.expect("membership created at signup");
    assert_eq!(membership.status, MembershipStatus::Pending);
    Ok(())
}

/// Tests the duplicate email guard.
///
/// Expected: Err(AppError::Duplicate) and no second member persisted
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let existing = factory::member::create_member(db).await?;

    let result = MemberService::new(db)
        .create_member(signup_dto(plan.id, &existing.email, Local::now().date_naive()))
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));
    let members = entity::prelude::Member::find().all(db).await?;
    assert_eq!(members.len(), 1);
    Ok(())
}

/// Tests that a mid-sequence failure rolls back the whole signup.
///
/// Expected: Err(AppError::NotFound) for the missing plan, and neither a
/// member nor an account row survives
#[tokio::test]
async fn missing_plan_rolls_back_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberService::new(db)
        .create_member(signup_dto(999, "alex@example.com", Local::now().date_naive()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(entity::prelude::Member::find().all(db).await?.is_empty());
    assert!(entity::prelude::User::find().all(db).await?.is_empty());
    Ok(())
}
