use super::*;

/// Tests that deactivation cancels the membership even when its dates
/// would still derive ACTIVE.
///
/// Expected: member INACTIVE, membership CANCELLED despite a future end
#[tokio::test]
async fn deactivate_overrides_future_end_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_plan, member, membership) = factory::helpers::create_member_with_membership(db).await?;
    assert!(membership.end_date >= Local::now().date_naive());

    let updated = MemberService::new(db).deactivate_member(member.id).await?;

    assert_eq!(updated.status, Status::Inactive);
    let after = updated.membership.expect("membership still present");
    assert_eq!(after.status, MembershipStatus::Cancelled);
    Ok(())
}

/// Tests the activation override.
///
/// Expected: membership forced ACTIVE even though its dates are expired
#[tokio::test]
async fn activate_forces_active_over_expired_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let member = factory::member::MemberFactory::new(db)
        .status(Status::Inactive)
        .build()
        .await?;
    let today = Local::now().date_naive();
    factory::membership::MembershipFactory::new(db, member.id, plan.id)
        .start_date(today - Duration::days(60))
        .end_date(today - Duration::days(30))
        .status(MembershipStatus::Expired)
        .build()
        .await?;

    let updated = MemberService::new(db).activate_member(member.id).await?;

    assert_eq!(updated.status, Status::Active);
    let after = updated.membership.expect("membership still present");
    assert_eq!(after.status, MembershipStatus::Active);
    Ok(())
}

/// Tests activation of an unknown member.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn activate_unknown_member_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberService::new(db).activate_member(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    Ok(())
}
