//! Factory for creating payment entities in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    amount: i64,
    driver_share_bps: i32,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - amount: `700_00` (700.00)
    /// - driver_share_bps: `7000`
    pub fn new(db: &'a DatabaseConnection, order_id: i32) -> Self {
        Self {
            db,
            order_id,
            amount: 700_00,
            driver_share_bps: 7_000,
        }
    }

    /// Sets the payout amount in minor units.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Builds and inserts a pending payment.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();

        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            order_id: ActiveValue::Set(self.order_id),
            amount: ActiveValue::Set(self.amount),
            driver_share_bps: ActiveValue::Set(self.driver_share_bps),
            status: ActiveValue::Set(entity::payment::PaymentStatus::Pending),
            kind: ActiveValue::Set(entity::payment::PaymentKind::OrderPayment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending payment of `amount` minor units for an order.
pub async fn create_payment(
    db: &DatabaseConnection,
    order_id: i32,
    amount: i64,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, order_id).amount(amount).build().await
}
