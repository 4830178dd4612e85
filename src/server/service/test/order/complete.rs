use super::*;

/// Tests completing an order priced at 1000.00 with the default 70% share.
///
/// Expected: Ok(completed) with a pending payment of exactly 700.00
#[tokio::test]
async fn pays_driver_share_of_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let order = OrderFactory::new(db, category.id)
        .price(1000_00)
        .build()
        .await?;
    service(db).accept(order.id, &driver.id).await?;
    service(db).start_trip(order.id, &driver.id).await?;

    let completed = service(db).complete(order.id, &driver.id).await?;

    assert_eq!(completed.order.status, OrderStatus::Completed);
    assert_eq!(completed.payment.order_id, order.id);
    assert_eq!(completed.payment.amount, Money::from_major(700));
    assert_eq!(completed.payment.amount.as_major_f64(), 700.0);
    assert_eq!(completed.payment.driver_share_bps, 7_000);

    let stored = entity::prelude::Payment::find()
        .filter(entity::payment::Column::OrderId.eq(order.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.amount, 700_00);
    assert_eq!(stored.status, entity::payment::PaymentStatus::Pending);

    Ok(())
}

/// Tests completing an accepted order directly, skipping the trip start.
///
/// Expected: Ok(completed)
#[tokio::test]
async fn completes_accepted_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    service(db).accept(order.id, &driver.id).await?;

    let completed = service(db).complete(order.id, &driver.id).await?;

    assert_eq!(completed.order.status, OrderStatus::Completed);

    Ok(())
}

/// Tests completing out of order or by the wrong driver.
///
/// Expected: Err(InvalidTransition) and no payment recorded
#[tokio::test]
async fn rejects_invalid_completion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, category, pending) = factory::helpers::create_order_with_dependencies(db).await?;
    let other = factory::create_driver(db).await?;
    let accepted = OrderFactory::new(db, category.id)
        .driver_id(&driver.id)
        .status(StoredStatus::Accepted)
        .build()
        .await?;

    let on_pending = service(db).complete(pending.id, &driver.id).await;
    let by_other = service(db).complete(accepted.id, &other.id).await;

    assert_eq!(on_pending.unwrap_err().kind(), ErrorKind::InvalidTransition);
    assert_eq!(by_other.unwrap_err().kind(), ErrorKind::InvalidTransition);
    assert_eq!(payment_count(db, pending.id).await?, 0);
    assert_eq!(payment_count(db, accepted.id).await?, 0);

    Ok(())
}

/// Tests completing an order twice.
///
/// Verifies that the second call fails and the order keeps exactly one payment.
///
/// Expected: Err(InvalidTransition) and one payment row
#[tokio::test]
async fn records_exactly_one_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    service(db).accept(order.id, &driver.id).await?;
    service(db).complete(order.id, &driver.id).await?;

    let again = service(db).complete(order.id, &driver.id).await;

    assert_eq!(again.unwrap_err().kind(), ErrorKind::InvalidTransition);
    assert_eq!(payment_count(db, order.id).await?, 1);

    Ok(())
}

/// Tests completing an order already linked to the active shift.
///
/// Verifies that the existing link is tolerated and not duplicated.
///
/// Expected: Ok(completed) with one link and one payment
#[tokio::test]
async fn tolerates_existing_shift_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    factory::create_shift(db, &driver.id).await?;
    service(db).accept(order.id, &driver.id).await?;
    assert_eq!(link_count(db, order.id).await?, 1);

    service(db).complete(order.id, &driver.id).await?;

    assert_eq!(link_count(db, order.id).await?, 1);
    assert_eq!(payment_count(db, order.id).await?, 1);

    Ok(())
}

/// Tests completing an order accepted before the driver started a shift.
///
/// Expected: Ok(completed) and a link to the shift active at completion
#[tokio::test]
async fn links_order_to_shift_at_completion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    service(db).accept(order.id, &driver.id).await?;
    let shift = factory::create_shift(db, &driver.id).await?;

    service(db).complete(order.id, &driver.id).await?;

    let links = entity::prelude::OrderShiftLink::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].shift_id, shift.id);

    Ok(())
}

/// Tests that a failed payment insert rolls the whole completion back.
///
/// A payment row already exists for the order, so the insert at completion violates
/// the one-payment-per-order constraint after the status change and shift link have
/// been written inside the same transaction.
///
/// Expected: Err(StorageFailure), status still `accepted`, no shift link, one payment
#[tokio::test]
async fn rolls_back_when_payment_insert_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    service(db).accept(order.id, &driver.id).await?;
    factory::create_shift(db, &driver.id).await?;
    factory::create_payment(db, order.id, 1_00).await?;
    let links_before = link_count(db, order.id).await?;

    let result = service(db).complete(order.id, &driver.id).await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::StorageFailure);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::Accepted);
    assert_eq!(link_count(db, order.id).await?, links_before);
    assert_eq!(payment_count(db, order.id).await?, 1);

    Ok(())
}

/// Tests completing an order while off shift.
///
/// Verifies that the payment is still recorded, no link is created and the driver's
/// next shift does not count the order.
///
/// Expected: Ok(completed), no link, next shift totals of zero
#[tokio::test]
async fn pays_without_active_shift() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    WorkShiftFactory::new(db, &driver.id)
        .started_at(Utc::now() - Duration::hours(9))
        .ended(Utc::now() - Duration::hours(1), 0, 0)
        .build()
        .await?;
    service(db).accept(order.id, &driver.id).await?;

    service(db).complete(order.id, &driver.id).await?;

    assert_eq!(payment_count(db, order.id).await?, 1);
    assert_eq!(link_count(db, order.id).await?, 0);

    let shifts = crate::server::service::shift::ShiftService::new(db);
    let next = shifts.start_shift(&driver.id).await?;
    let totals = shifts.aggregate(next.id).await?;
    assert_eq!(totals.order_count, 0);
    assert_eq!(totals.earnings, Money::ZERO);

    Ok(())
}

/// Tests completing an order that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;

    let result = service(db).complete(4242, &driver.id).await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);

    Ok(())
}
