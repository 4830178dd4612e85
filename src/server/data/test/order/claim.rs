use super::*;

/// Tests claiming a pending order.
///
/// Expected: Ok(true) and the order is accepted by the driver
#[tokio::test]
async fn claims_pending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let claimed = repo.claim(order.id, &driver.id).await?;

    assert!(claimed);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::Accepted);
    assert_eq!(stored.driver_id.as_deref(), Some(driver.id.as_str()));

    Ok(())
}

/// Tests claiming an order stored with the legacy `created` label.
///
/// Expected: Ok(true)
#[tokio::test]
async fn claims_legacy_created_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let order = OrderFactory::new(db, category.id)
        .status(StoredStatus::Created)
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    assert!(repo.claim(order.id, &driver.id).await?);

    Ok(())
}

/// Tests a second claim on the same order is rejected.
///
/// Verifies the compare-and-swap leaves the first driver's assignment intact.
///
/// Expected: Ok(false) and the order stays with the first driver
#[tokio::test]
async fn rejects_second_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let second = factory::create_driver(db).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.claim(order.id, &first.id).await?);

    let claimed = repo.claim(order.id, &second.id).await?;

    assert!(!claimed);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.driver_id.as_deref(), Some(first.id.as_str()));

    Ok(())
}

/// Tests a claim that read the order as pending after another driver took it.
///
/// The status is reset to `pending` while the first driver stays recorded, which is
/// what a second transaction acting on a stale read sees. Only the driver filter of
/// the compare-and-swap stands between it and an overwrite.
///
/// Expected: Ok(false) and the first driver keeps the order
#[tokio::test]
async fn stale_claim_does_not_overwrite_driver() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let second = factory::create_driver(db).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.claim(order.id, &first.id).await?);

    entity::order::ActiveModel {
        id: ActiveValue::Unchanged(order.id),
        status: ActiveValue::Set(StoredStatus::Pending),
        ..Default::default()
    }
    .update(db)
    .await?;

    let claimed = repo.claim(order.id, &second.id).await?;

    assert!(!claimed);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.driver_id.as_deref(), Some(first.id.as_str()));

    Ok(())
}

/// Tests a claim on an unassigned order that is no longer pending.
///
/// Only the status filter of the compare-and-swap rejects this claim.
///
/// Expected: Ok(false) and the order is left untouched
#[tokio::test]
async fn does_not_claim_order_past_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let category = factory::create_category(db).await?;
    let order = OrderFactory::new(db, category.id)
        .status(StoredStatus::Completed)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let claimed = repo.claim(order.id, &driver.id).await?;

    assert!(!claimed);
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::Completed);
    assert_eq!(stored.driver_id, None);

    Ok(())
}
