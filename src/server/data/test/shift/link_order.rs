use super::*;

/// Tests linking an order to a shift twice.
///
/// Verifies that the second link is ignored rather than failing.
///
/// Expected: Ok(true) then Ok(false), with a single link row
#[tokio::test]
async fn ignores_existing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dispatch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _category, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let shift = factory::create_shift(db, &driver.id).await?;

    let repo = ShiftRepository::new(db);

    assert!(repo.link_order(order.id, shift.id).await?);
    assert!(!repo.link_order(order.id, shift.id).await?);

    let links = entity::prelude::OrderShiftLink::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].order_id, order.id);
    assert_eq!(links[0].shift_id, shift.id);

    Ok(())
}
