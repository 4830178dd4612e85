use super::*;

/// Tests moving an accepted order to in progress.
///
/// Expected: Ok(true) and the stored status is `in_progress`
#[tokio::test]
async fn moves_order_forward() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let order = OrderFactory::new(db, category.id)
        .driver_id(&driver.id)
        .status(StoredStatus::Accepted)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let moved = repo
        .transition(
            order.id,
            &driver.id,
            &[OrderStatus::Accepted],
            OrderStatus::InProgress,
        )
        .await?;

    assert!(moved);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::InProgress);

    Ok(())
}

/// Tests a transition by a driver the order is not assigned to.
///
/// Expected: Ok(false) and the status is unchanged
#[tokio::test]
async fn rejects_other_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let other = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let order = OrderFactory::new(db, category.id)
        .driver_id(&driver.id)
        .status(StoredStatus::Accepted)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let moved = repo
        .transition(
            order.id,
            &other.id,
            &[OrderStatus::Accepted],
            OrderStatus::InProgress,
        )
        .await?;

    assert!(!moved);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::Accepted);

    Ok(())
}

/// Tests a transition from a status outside the expected set.
///
/// Expected: Ok(false)
#[tokio::test]
async fn rejects_unexpected_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let order = OrderFactory::new(db, category.id)
        .driver_id(&driver.id)
        .status(StoredStatus::Completed)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let moved = repo
        .transition(
            order.id,
            &driver.id,
            &[OrderStatus::Accepted, OrderStatus::InProgress],
            OrderStatus::Completed,
        )
        .await?;

    assert!(!moved);

    Ok(())
}

/// Tests a transition issued from a stale view of the order.
///
/// The first transition moves the order on; a second one still expecting `accepted`
/// must not apply.
///
/// Expected: Ok(false) and the status set by the first transition remains
#[tokio::test]
async fn stale_transition_does_not_apply() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let order = OrderFactory::new(db, category.id)
        .driver_id(&driver.id)
        .status(StoredStatus::Accepted)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    assert!(
        repo.transition(
            order.id,
            &driver.id,
            &[OrderStatus::Accepted],
            OrderStatus::Completed,
        )
        .await?
    );

    let moved = repo
        .transition(
            order.id,
            &driver.id,
            &[OrderStatus::Accepted],
            OrderStatus::InProgress,
        )
        .await?;

    assert!(!moved);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::Completed);

    Ok(())
}
