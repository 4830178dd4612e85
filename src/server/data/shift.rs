use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::{
    money::Money,
    shift::{Shift, ShiftTotals},
};

pub struct ShiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a new shift for a driver
    ///
    /// Callers must check that the driver has no active shift within the same
    /// transaction while holding the driver's row lock.
    pub async fn create(&self, driver_id: &str, started_at: DateTime<Utc>) -> Result<Shift, DbErr> {
        let shift = entity::work_shift::ActiveModel {
            driver_id: ActiveValue::Set(driver_id.to_string()),
            started_at: ActiveValue::Set(started_at),
            ended_at: ActiveValue::Set(None),
            total_orders: ActiveValue::Set(None),
            total_earnings: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Shift::from_entity(shift)
    }

    /// Gets a shift by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Shift>, DbErr> {
        let shift = entity::prelude::WorkShift::find_by_id(id)
            .one(self.db)
            .await?;

        shift.map(Shift::from_entity).transpose()
    }

    /// Gets a shift by ID and locks it until the surrounding transaction ends
    pub async fn lock_by_id(&self, id: i32) -> Result<Option<Shift>, DbErr> {
        let shift = entity::prelude::WorkShift::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        shift.map(Shift::from_entity).transpose()
    }

    /// Gets the driver's active shift, if any
    pub async fn find_active_by_driver(&self, driver_id: &str) -> Result<Option<Shift>, DbErr> {
        let shift = Self::active_by_driver(driver_id).one(self.db).await?;

        shift.map(Shift::from_entity).transpose()
    }

    /// Gets the driver's active shift and locks it until the surrounding transaction ends
    ///
    /// Holding this lock while linking an order keeps the link from racing a
    /// concurrent `close`.
    pub async fn lock_active_by_driver(&self, driver_id: &str) -> Result<Option<Shift>, DbErr> {
        let shift = Self::active_by_driver(driver_id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        shift.map(Shift::from_entity).transpose()
    }

    /// Gets all shifts of a driver, most recent first
    pub async fn get_by_driver(&self, driver_id: &str) -> Result<Vec<Shift>, DbErr> {
        let shifts = entity::prelude::WorkShift::find()
            .filter(entity::work_shift::Column::DriverId.eq(driver_id))
            .order_by_desc(entity::work_shift::Column::StartedAt)
            .order_by_desc(entity::work_shift::Column::Id)
            .all(self.db)
            .await?;

        shifts.into_iter().map(Shift::from_entity).collect()
    }

    /// Closes an active shift and freezes its totals
    ///
    /// # Returns
    /// - `Ok(true)`: Shift closed
    /// - `Ok(false)`: The shift does not exist or was already closed
    /// - `Err(DbErr)`: The order count does not fit the column, or database error
    pub async fn close(
        &self,
        shift_id: i32,
        ended_at: DateTime<Utc>,
        totals: ShiftTotals,
    ) -> Result<bool, DbErr> {
        let total_orders = i32::try_from(totals.order_count).map_err(|_| {
            DbErr::Custom(format!(
                "Order count {} of shift {} exceeds the stored range",
                totals.order_count, shift_id
            ))
        })?;

        let result = entity::prelude::WorkShift::update_many()
            .col_expr(entity::work_shift::Column::EndedAt, Expr::value(ended_at))
            .col_expr(
                entity::work_shift::Column::TotalOrders,
                Expr::value(total_orders),
            )
            .col_expr(
                entity::work_shift::Column::TotalEarnings,
                Expr::value(totals.earnings.minor()),
            )
            .filter(entity::work_shift::Column::Id.eq(shift_id))
            .filter(entity::work_shift::Column::EndedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Attributes an order to a shift
    ///
    /// # Returns
    /// - `Ok(true)`: Link inserted
    /// - `Ok(false)`: The order was already linked to this shift
    /// - `Err(DbErr)`: Database error
    pub async fn link_order(&self, order_id: i32, shift_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::OrderShiftLink::insert(
            entity::order_shift_link::ActiveModel {
                order_id: ActiveValue::Set(order_id),
                shift_id: ActiveValue::Set(shift_id),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::order_shift_link::Column::OrderId,
                entity::order_shift_link::Column::ShiftId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Computes totals from the completed orders linked to a shift
    ///
    /// Counts one per completed order with a payment and sums the payouts. Fails
    /// instead of wrapping when the sum does not fit in `Money`.
    pub async fn compute_totals(&self, shift_id: i32) -> Result<ShiftTotals, DbErr> {
        let payments = entity::prelude::Payment::find()
            .join(JoinType::InnerJoin, entity::payment::Relation::Order.def())
            .join(
                JoinType::InnerJoin,
                entity::order::Relation::OrderShiftLink.def(),
            )
            .filter(entity::order_shift_link::Column::ShiftId.eq(shift_id))
            .filter(
                entity::order::Column::Status.eq(entity::order::OrderStatus::Completed),
            )
            .all(self.db)
            .await?;

        let earnings = Money::checked_sum(
            payments
                .iter()
                .map(|payment| Money::from_minor(payment.amount)),
        )
        .ok_or_else(|| DbErr::Custom(format!("Earnings of shift {} overflow", shift_id)))?;

        Ok(ShiftTotals {
            order_count: payments.len() as u64,
            earnings,
        })
    }

    fn active_by_driver(driver_id: &str) -> Select<entity::prelude::WorkShift> {
        entity::prelude::WorkShift::find()
            .filter(entity::work_shift::Column::DriverId.eq(driver_id))
            .filter(entity::work_shift::Column::EndedAt.is_null())
            .order_by_desc(entity::work_shift::Column::StartedAt)
    }
}
