//! Factory for creating work shift entities in tests.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shifts.
///
/// Shifts are active unless `ended()` is called.
///
/// # Example
///
/// ```rust,ignore
/// let shift = WorkShiftFactory::new(&db, &driver.id)
///     .ended(Utc::now(), 3, 2100_00)
///     .build()
///     .await?;
/// ```
pub struct WorkShiftFactory<'a> {
    db: &'a DatabaseConnection,
    driver_id: String,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    total_orders: Option<i32>,
    total_earnings: Option<i64>,
}

impl<'a> WorkShiftFactory<'a> {
    /// Creates a new WorkShiftFactory for an active shift started an hour ago.
    pub fn new(db: &'a DatabaseConnection, driver_id: impl Into<String>) -> Self {
        Self {
            db,
            driver_id: driver_id.into(),
            started_at: Utc::now() - Duration::hours(1),
            ended_at: None,
            total_orders: None,
            total_earnings: None,
        }
    }

    /// Sets the start time.
    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Closes the shift with frozen totals.
    ///
    /// # Arguments
    /// - `ended_at` - End time
    /// - `total_orders` - Frozen completed-order count
    /// - `total_earnings` - Frozen earnings in minor units
    pub fn ended(mut self, ended_at: DateTime<Utc>, total_orders: i32, total_earnings: i64) -> Self {
        self.ended_at = Some(ended_at);
        self.total_orders = Some(total_orders);
        self.total_earnings = Some(total_earnings);
        self
    }

    /// Builds and inserts the shift entity into the database.
    pub async fn build(self) -> Result<entity::work_shift::Model, DbErr> {
        entity::work_shift::ActiveModel {
            id: ActiveValue::NotSet,
            driver_id: ActiveValue::Set(self.driver_id),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(self.ended_at),
            total_orders: ActiveValue::Set(self.total_orders),
            total_earnings: ActiveValue::Set(self.total_earnings),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active shift for a driver.
pub async fn create_shift(
    db: &DatabaseConnection,
    driver_id: impl Into<String>,
) -> Result<entity::work_shift::Model, DbErr> {
    WorkShiftFactory::new(db, driver_id).build().await
}
