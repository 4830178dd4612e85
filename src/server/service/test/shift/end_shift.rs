use super::*;

/// Tests ending a shift.
///
/// Expected: Ok(summary) closed, with totals equal to the live aggregate
#[tokio::test]
async fn ends_shift_with_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let service = ShiftService::new(db);
    let shift = service.start_shift(&driver.id).await?;
    complete_order(db, category.id, &driver.id, 1_000_00).await?;
    complete_order(db, category.id, &driver.id, 250_00).await?;
    let live = service.aggregate(shift.id).await?;

    let summary = service.end_shift(shift.id, &driver.id).await?;

    assert!(!summary.shift.is_active());
    assert_eq!(summary.totals, live);
    assert_eq!(summary.totals.order_count, 2);
    assert_eq!(summary.totals.earnings, Money::from_major(875));
    assert!(service.get_active_shift(&driver.id).await?.is_none());

    let stored = entity::prelude::WorkShift::find_by_id(shift.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.ended_at.is_some());
    assert_eq!(stored.total_orders, Some(2));
    assert_eq!(stored.total_earnings, Some(875_00));

    Ok(())
}

/// Tests totals stay frozen after the shift ends.
///
/// Verifies that neither completing an order accepted during the shift nor linking
/// an unrelated completed order to the closed shift changes its aggregate.
///
/// Expected: Ok with the aggregate equal to the frozen totals
#[tokio::test]
async fn freezes_totals_after_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let service = ShiftService::new(db);
    let shift = service.start_shift(&driver.id).await?;
    complete_order(db, category.id, &driver.id, 1_000_00).await?;
    let carried = factory::create_order(db, category.id).await?;
    orders(db).accept(carried.id, &driver.id).await?;

    let summary = service.end_shift(shift.id, &driver.id).await?;

    orders(db).complete(carried.id, &driver.id).await?;
    let late = complete_order(db, category.id, &driver.id, 2_000_00).await?;
    factory::helpers::link_order_to_shift(db, late, shift.id).await?;

    assert_eq!(service.aggregate(shift.id).await?, summary.totals);
    assert_eq!(
        summary.totals,
        ShiftTotals {
            order_count: 1,
            earnings: Money::from_major(700),
        }
    );

    Ok(())
}

/// Tests ending a shift of another driver, an ended shift and an unknown shift.
///
/// Expected: Err(ShiftNotFound) in each case
#[tokio::test]
async fn rejects_foreign_ended_and_unknown_shift() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let other = factory::create_driver(db).await?;
    let service = ShiftService::new(db);
    let active = service.start_shift(&driver.id).await?;
    let ended = WorkShiftFactory::new(db, &driver.id)
        .started_at(Utc::now() - Duration::hours(12))
        .ended(Utc::now() - Duration::hours(4), 0, 0)
        .build()
        .await?;

    let foreign = service.end_shift(active.id, &other.id).await;
    let twice = service.end_shift(ended.id, &driver.id).await;
    let unknown = service.end_shift(active.id + 100, &driver.id).await;

    for result in [foreign, twice, unknown] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ShiftNotFound);
    }
    assert!(service.get_active_shift(&driver.id).await?.is_some());

    Ok(())
}

/// Tests ending a shift whose stored payouts sum past the range of `Money`.
///
/// Verifies that aggregation fails with a storage error instead of overflowing,
/// and that the shift is not closed with a wrong total.
///
/// Expected: Err(StorageFailure) from both aggregate and end_shift, shift still active
#[tokio::test]
async fn fails_without_freezing_on_earnings_overflow() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let service = ShiftService::new(db);
    let shift = service.start_shift(&driver.id).await?;

    for _ in 0..2 {
        let order = OrderFactory::new(db, category.id)
            .driver_id(&driver.id)
            .status(StoredStatus::Completed)
            .build()
            .await?;
        factory::create_payment(db, order.id, i64::MAX / 2 + 1).await?;
        factory::helpers::link_order_to_shift(db, order.id, shift.id).await?;
    }

    let aggregate = service.aggregate(shift.id).await;
    let ended = service.end_shift(shift.id, &driver.id).await;

    assert_eq!(aggregate.unwrap_err().kind(), ErrorKind::StorageFailure);
    assert_eq!(ended.unwrap_err().kind(), ErrorKind::StorageFailure);
    assert!(service.get_active_shift(&driver.id).await?.is_some());

    Ok(())
}
