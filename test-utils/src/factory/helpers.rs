//! Shared helper utilities for factory methods.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending order with its dependencies.
///
/// This is a convenience method that creates:
/// 1. Driver (not assigned to the order)
/// 2. Service category
/// 3. Pending, unassigned order in that category
///
/// # Returns
/// - `Ok((driver, category, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::driver::Model,
        entity::service_category::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let driver = crate::factory::driver::create_driver(db).await?;
    let category = crate::factory::service_category::create_category(db).await?;
    let order = crate::factory::order::create_order(db, category.id).await?;

    Ok((driver, category, order))
}

/// Links an order to a shift.
pub async fn link_order_to_shift(
    db: &DatabaseConnection,
    order_id: i32,
    shift_id: i32,
) -> Result<(), DbErr> {
    entity::prelude::OrderShiftLink::insert(entity::order_shift_link::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        shift_id: ActiveValue::Set(shift_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
