use super::*;

/// Tests inserting a membership with all fields.
///
/// Expected: Ok(membership) with the stored values matching the params
#[tokio::test]
async fn stores_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let member = factory::member::create_member(db).await?;

    let repo = MembershipRepository::new(db);
    let membership = repo
        .insert(NewMembership {
            member_id: member.id,
            plan_id: plan.id,
            start_date: date(2025, 1, 10),
            end_date: date(2025, 2, 10),
            auto_renew: true,
            status: MembershipStatus::Active,
            renewal_date: date(2025, 2, 10),
        })
        .await?;

    assert_eq!(membership.member_id, member.id);
    assert_eq!(membership.plan_id, plan.id);
    assert_eq!(membership.start_date, date(2025, 1, 10));
    assert_eq!(membership.end_date, date(2025, 2, 10));
    assert!(membership.auto_renew);
    assert_eq!(membership.status, MembershipStatus::Active);
    assert_eq!(membership.renewal_date, date(2025, 2, 10));
    Ok(())
}

/// Tests the one-membership-per-member constraint.
///
/// Expected: Err on a second insert for the same member
#[tokio::test]
async fn rejects_second_membership_for_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan, member, _membership) = factory::helpers::create_member_with_membership(db).await?;

    let repo = MembershipRepository::new(db);
    let result = repo
        .insert(NewMembership {
            member_id: member.id,
            plan_id: plan.id,
            start_date: date(2025, 1, 10),
            end_date: date(2025, 2, 10),
            auto_renew: false,
            status: MembershipStatus::Active,
            renewal_date: date(2025, 2, 10),
        })
        .await;

    assert!(result.is_err());
    Ok(())
}
