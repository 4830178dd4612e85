use super::*;

/// Tests the claimable list follows an order through its lifecycle.
///
/// Verifies that a pending order is visible to every driver, stays visible only to
/// its driver once accepted, and disappears once completed.
///
/// Expected: Ok with the order listed accordingly
#[tokio::test]
async fn claimable_list_follows_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let other = factory::create_driver(db).await?;
    let ids = |orders: Vec<crate::server::model::order::Order>| -> Vec<i32> {
        orders.into_iter().map(|order| order.id).collect()
    };

    assert_eq!(ids(service(db).list_claimable(&other.id).await?), vec![order.id]);

    service(db).accept(order.id, &driver.id).await?;
    assert_eq!(ids(service(db).list_claimable(&driver.id).await?), vec![order.id]);
    assert!(service(db).list_claimable(&other.id).await?.is_empty());

    service(db).complete(order.id, &driver.id).await?;
    assert!(service(db).list_claimable(&driver.id).await?.is_empty());

    Ok(())
}

/// Tests listing a rider's orders.
///
/// Expected: Ok(orders) with only the rider's orders, newest first
#[tokio::test]
async fn lists_rider_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let older = OrderFactory::new(db, category.id)
        .rider_id("rider-x")
        .created_at(Utc::now() - Duration::minutes(30))
        .build()
        .await?;
    let newer = OrderFactory::new(db, category.id)
        .rider_id("rider-x")
        .build()
        .await?;
    factory::create_order(db, category.id).await?;

    let orders = service(db).list_rider_orders("rider-x").await?;

    let ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
