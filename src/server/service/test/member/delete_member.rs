use super::*;

/// Tests the soft-delete cascade.
///
/// Expected: member INACTIVE, membership CANCELLED, account INACTIVE;
/// every row stays in place
#[tokio::test]
async fn cascades_soft_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let today = Local::now().date_naive();
    let created = MemberService::new(db)
        .create_member(signup_dto(plan.id, "alex@example.com", today))
        .await?;

    MemberService::new(db).delete_member(created.id).await?;

    let member = entity::prelude::Member::find_by_id(created.id)
        .one(db)
        .await?
        .expect("row soft-deleted, not removed");
    assert_eq!(member.status, Status::Inactive);

    let memberships = entity::prelude::Membership::find().all(db).await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].status, MembershipStatus::Cancelled);

    let users = entity::prelude::User::find().all(db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].status, Status::Inactive);
    Ok(())
}

/// Tests that soft-deleted members drop out of the listing.
///
/// Expected: empty list after deletion
#[tokio::test]
async fn deleted_member_leaves_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_plan, member, _membership) = factory::helpers::create_member_with_membership(db).await?;
    let service = MemberService::new(db);

    service.delete_member(member.id).await?;

    assert!(service.list_members().await?.is_empty());
    Ok(())
}

/// Tests deleting an unknown member.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_member_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberService::new(db).delete_member(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    Ok(())
}
