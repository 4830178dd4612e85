use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::payment::{CreatePaymentParams, Payment};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a pending driver payout for an order
    ///
    /// `order_id` is unique in the payment table; a second insert for the same order
    /// fails with a unique constraint violation.
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let now = Utc::now();

        let payment = entity::payment::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            amount: ActiveValue::Set(params.amount.minor()),
            driver_share_bps: ActiveValue::Set(params.driver_share.basis_points() as i32),
            status: ActiveValue::Set(entity::payment::PaymentStatus::Pending),
            kind: ActiveValue::Set(entity::payment::PaymentKind::OrderPayment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    /// Gets the payment recorded for an order
    pub async fn find_by_order_id(&self, order_id: i32) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find()
            .filter(entity::payment::Column::OrderId.eq(order_id))
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Counts payments recorded for an order
    pub async fn count_by_order_id(&self, order_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::OrderId.eq(order_id))
            .count(self.db)
            .await
    }
}
