use super::*;

/// Tests that only fields set in the update are applied.
///
/// Expected: end_date changed, every other field untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_plan, _member, membership) = factory::helpers::create_member_with_membership(db).await?;
    let original_start = membership.start_date;
    let original_status = membership.status;

    let repo = MembershipRepository::new(db);
    let updated = repo
        .update(
            membership,
            MembershipUpdate {
                end_date: Some(date(2026, 6, 1)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.end_date, date(2026, 6, 1));
    assert_eq!(updated.start_date, original_start);
    assert_eq!(updated.status, original_status);
    Ok(())
}

/// Tests updating the status together with the renewal window.
///
/// Expected: all supplied fields applied in one write
#[tokio::test]
async fn applies_full_renewal_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_plan, member, membership) = factory::helpers::create_member_with_membership(db).await?;

    let repo = MembershipRepository::new(db);
    let updated = repo
        .update(
            membership,
            MembershipUpdate {
                start_date: Some(date(2026, 1, 1)),
                end_date: Some(date(2026, 2, 1)),
                renewal_date: Some(date(2026, 2, 1)),
                status: Some(MembershipStatus::Active),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.member_id, member.id);
    assert_eq!(updated.start_date, date(2026, 1, 1));
    assert_eq!(updated.end_date, date(2026, 2, 1));
    assert_eq!(updated.renewal_date, date(2026, 2, 1));
    assert_eq!(updated.status, MembershipStatus::Active);
    Ok(())
}
