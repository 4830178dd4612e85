//! Factory for creating order entities in tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test orders.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, category.id)
///     .driver_id("driver-1")
///     .status(OrderStatus::Accepted)
///     .price(1000_00)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    service_category_id: i32,
    rider_id: String,
    driver_id: Option<String>,
    status: entity::order::OrderStatus,
    price: i64,
    origin_street: String,
    destination_street: String,
    created_at: DateTime<Utc>,
    option_ids: Vec<i32>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - rider_id: `"rider-{n}"` where n is auto-incremented
    /// - driver_id: `None`
    /// - status: `Pending`
    /// - price: `1000_00` (1000.00)
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, service_category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            service_category_id,
            rider_id: format!("rider-{}", id),
            driver_id: None,
            status: entity::order::OrderStatus::Pending,
            price: 1000_00,
            origin_street: format!("Origin street {}", id),
            destination_street: format!("Destination street {}", id),
            created_at: Utc::now(),
            option_ids: Vec::new(),
        }
    }

    /// Sets the rider who placed the order.
    pub fn rider_id(mut self, rider_id: impl Into<String>) -> Self {
        self.rider_id = rider_id.into();
        self
    }

    /// Assigns the order to a driver.
    pub fn driver_id(mut self, driver_id: impl Into<String>) -> Self {
        self.driver_id = Some(driver_id.into());
        self
    }

    /// Sets the stored status.
    pub fn status(mut self, status: entity::order::OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the price in minor units.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the creation time.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Attaches a service option by ID.
    pub fn option(mut self, option_id: i32) -> Self {
        self.option_ids.push(option_id);
        self
    }

    /// Builds and inserts the order and its options.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let order = entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            rider_id: ActiveValue::Set(self.rider_id),
            driver_id: ActiveValue::Set(self.driver_id),
            service_category_id: ActiveValue::Set(self.service_category_id),
            city: ActiveValue::Set("Moscow".to_string()),
            origin_street: ActiveValue::Set(self.origin_street),
            origin_house: ActiveValue::Set("1".to_string()),
            origin_build: ActiveValue::Set(None),
            destination_street: ActiveValue::Set(self.destination_street),
            destination_house: ActiveValue::Set("2".to_string()),
            destination_build: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        for option_id in self.option_ids {
            entity::order_option::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                option_id: ActiveValue::Set(option_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates a pending, unassigned order with default values.
pub async fn create_order(
    db: &DatabaseConnection,
    service_category_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, service_category_id).build().await
}
