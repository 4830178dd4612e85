use super::*;

/// Tests recording a payout for an order.
///
/// Expected: Ok(payment) pending, of type order payment
#[tokio::test]
async fn records_pending_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParams {
            order_id: order.id,
            amount: Money::from_major(700),
            driver_share: DriverShare::default(),
        })
        .await?;

    assert_eq!(payment.order_id, order.id);
    assert_eq!(payment.amount, Money::from_major(700));
    assert_eq!(payment.driver_share_bps, 7_000);
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.kind, PaymentKind::OrderPayment);

    let stored = repo.find_by_order_id(order.id).await?;
    assert_eq!(stored.map(|payment| payment.id), Some(payment.id));

    Ok(())
}

/// Tests a second payout for the same order.
///
/// Verifies that the unique constraint on the order rejects the insert.
///
/// Expected: Err(DbErr) and a single payment row
#[tokio::test]
async fn rejects_second_payment_for_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let params = CreatePaymentParams {
        order_id: order.id,
        amount: Money::from_major(700),
        driver_share: DriverShare::default(),
    };

    let repo = PaymentRepository::new(db);
    repo.create(params).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());
    assert_eq!(repo.count_by_order_id(order.id).await?, 1);

    Ok(())
}
