use super::*;

/// Tests that absent fields are left untouched and the email stays fixed.
///
/// Expected: only shift and salary change
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReceptionistService::new(db);
    let created = service.create_receptionist(staff_dto("dana@example.com")).await?;

    let updated = service
        .update_receptionist(
            created.id,
            UpdateReceptionistDto {
                shift: Some(Shift::Night),
                salary: Some(3100.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.shift, Shift::Night);
    assert_eq!(updated.salary, 3100.0);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.first_name, created.first_name);
    assert_eq!(updated.date_of_joining, created.date_of_joining);
    Ok(())
}

/// Tests the missing-receptionist guard.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_receptionist_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReceptionistService::new(db)
        .update_receptionist(
            9999,
            UpdateReceptionistDto {
                salary: Some(3100.0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    Ok(())
}
