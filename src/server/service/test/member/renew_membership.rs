use super::*;

/// Tests that renewal always wins over a cancelled membership.
///
/// Expected: membership ACTIVE with a new window, member ACTIVE again
#[tokio::test]
async fn renewal_reactivates_cancelled_membership() -> Result<(), AppError> {
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
        .start_date(today - Duration::days(90))
        .end_date(today - Duration::days(60))
        .status(MembershipStatus::Cancelled)
        .build()
        .await?;

    let renewed = MemberService::new(db)
        .renew_membership(member.id, RenewMembershipDto { start_date: today })
        .await?;

    assert_eq!(renewed.status, Status::Active);
    let membership = renewed.membership.expect("membership still present");
    assert_eq!(membership.status, MembershipStatus::Active);
    assert_eq!(membership.start_date, today);
    let expected_end = today.checked_add_months(chrono::Months::new(1)).unwrap();
    assert_eq!(membership.end_date, expected_end);
    assert_eq!(membership.renewal_date, expected_end);
    Ok(())
}

/// Tests renewal for a member without a membership.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_without_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let result = MemberService::new(db)
        .renew_membership(
            member.id,
            RenewMembershipDto {
                start_date: Local::now().date_naive(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    Ok(())
}
