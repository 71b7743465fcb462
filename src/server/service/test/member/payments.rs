use super::*;

use crate::model::member::RecordPaymentDto;

/// Tests recording a desk payment without an explicit date.
///
/// Expected: payment stored with today's date
#[tokio::test]
async fn records_payment_with_default_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let payment = MemberService::new(db)
        .record_payment(
            member.id,
            RecordPaymentDto {
                amount_paid: 50.0,
                payment_date: None,
                payment_method: PaymentMethod::Cash,
            },
        )
        .await?;

    assert_eq!(payment.amount_paid, 50.0);
    assert_eq!(payment.payment_date, Local::now().date_naive());
    assert_eq!(payment.payment_method, PaymentMethod::Cash);

    let history = MemberService::new(db).list_payments(member.id).await?;
    assert_eq!(history.len(), 1);
    Ok(())
}

/// Tests the amount guard.
///
/// Expected: Err(AppError::BadRequest), nothing stored
#[tokio::test]
async fn rejects_nonpositive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let result = MemberService::new(db)
        .record_payment(
            member.id,
            RecordPaymentDto {
                amount_paid: 0.0,
                payment_date: None,
                payment_method: PaymentMethod::Card,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(MemberService::new(db).list_payments(member.id).await?.is_empty());
    Ok(())
}

/// Tests recording against an unknown member.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn record_for_unknown_member_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberService::new(db)
        .record_payment(
            9999,
            RecordPaymentDto {
                amount_paid: 25.0,
                payment_date: None,
                payment_method: PaymentMethod::BankTransfer,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    Ok(())
}

/// Tests the date-window query. Both endpoints are inclusive and results
/// come back newest first.
///
/// Expected: the two payments inside the window, newest first
#[tokio::test]
async fn range_is_inclusive_and_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let today = Local::now().date_naive();
    let service = MemberService::new(db);
    for days_ago in [10, 5, 0] {
        service
            .record_payment(
                member.id,
                RecordPaymentDto {
                    amount_paid: 30.0,
                    payment_date: Some(today - Duration::days(days_ago)),
                    payment_method: PaymentMethod::Cash,
                },
            )
            .await?;
    }

    let window = service
        .list_payments_between(member.id, today - Duration::days(5), today)
        .await?;

    assert_eq!(window.len(), 2);
    assert_eq!(window[0].payment_date, today);
    assert_eq!(window[1].payment_date, today - Duration::days(5));
    Ok(())
}

/// Tests the inverted-window guard.
///
/// Expected: Err(AppError::InvalidTimeRange)
#[tokio::test]
async fn rejects_inverted_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let today = Local::now().date_naive();

    let result = MemberService::new(db)
        .list_payments_between(member.id, today, today - Duration::days(1))
        .await;

    assert!(matches!(result, Err(AppError::InvalidTimeRange(_))));
    Ok(())
}
