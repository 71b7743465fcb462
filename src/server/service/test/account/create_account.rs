use super::*;

/// Tests that the stored credential is a hash, never the clear text.
///
/// Expected: argon2 PHC-format hash in the password column
#[tokio::test]
async fn stores_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AccountService::new(db)
        .create_account(new_account("jo@example.com"))
        .await?;

    assert_eq!(user.email, "jo@example.com");
    assert_eq!(user.role, UserRole::Member);
    assert_ne!(user.password_hash, "correct horse battery staple");
    assert!(user.password_hash.starts_with("$argon2"));
    Ok(())
}

/// Tests the duplicate account guard.
///
/// Expected: Err(AppError::Duplicate) on the second create
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service.create_account(new_account("jo@example.com")).await?;
    let second = service.create_account(new_account("jo@example.com")).await;

    assert!(matches!(second, Err(AppError::Duplicate(_))));
    Ok(())
}

/// Tests deactivation by email.
///
/// Expected: account INACTIVE; a missing email is a no-op
#[tokio::test]
async fn deactivates_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service.create_account(new_account("jo@example.com")).await?;

    service.deactivate_by_email("jo@example.com").await?;
    service.deactivate_by_email("nobody@example.com").await?;

    use sea_orm::EntityTrait;
    let users = User::find().all(db).await?;
    assert_eq!(users[0].status, Status::Inactive);
    Ok(())
}
