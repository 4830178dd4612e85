use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{driver::DriverRepository, shift::ShiftRepository},
    error::{shift::ShiftError, AppError},
    model::shift::{Shift, ShiftSummary, ShiftTotals},
};

/// Shift accounting manager.
pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a shift for a driver
    ///
    /// The driver row is locked before the active-shift check, so concurrent starts
    /// for the same driver serialize and at most one shift is ever active.
    ///
    /// # Returns
    /// - `Ok(Shift)`: The new active shift
    /// - `Err(AppError::NotFound)`: Driver does not exist
    /// - `Err(AppError::ShiftErr(AlreadyActive))`: Driver already has an active shift
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn start_shift(&self, driver_id: &str) -> Result<Shift, AppError> {
        let txn = self.db.begin().await?;

        if DriverRepository::new(&txn)
            .lock_by_id(driver_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Driver {} not found", driver_id)));
        }

        let shifts = ShiftRepository::new(&txn);
        if let Some(active) = shifts.find_active_by_driver(driver_id).await? {
            return Err(ShiftError::AlreadyActive {
                driver_id: driver_id.to_string(),
                shift_id: active.id,
            }
            .into());
        }

        let shift = shifts.create(driver_id, Utc::now()).await?;

        txn.commit().await?;

        tracing::info!("Shift {} started for driver {}", shift.id, driver_id);

        Ok(shift)
    }

    /// Gets the driver's active shift, if any
    pub async fn get_active_shift(&self, driver_id: &str) -> Result<Option<Shift>, AppError> {
        let repo = ShiftRepository::new(self.db);

        Ok(repo.find_active_by_driver(driver_id).await?)
    }

    /// Completed-order count and earnings of a shift
    ///
    /// Live while the shift is active; the frozen totals once it has ended.
    ///
    /// # Returns
    /// - `Ok(ShiftTotals)`: Totals of the shift
    /// - `Err(AppError::ShiftErr(NotFound))`: Shift does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn aggregate(&self, shift_id: i32) -> Result<ShiftTotals, AppError> {
        let repo = ShiftRepository::new(self.db);

        let shift = repo
            .find_by_id(shift_id)
            .await?
            .ok_or(ShiftError::NotFound { shift_id })?;

        Ok(totals_of(&repo, &shift).await?)
    }

    /// Same as `aggregate`, but only for a shift owned by `driver_id`
    ///
    /// # Returns
    /// - `Ok(ShiftTotals)`: Totals of the shift
    /// - `Err(AppError::ShiftErr(NotFound))`: Shift does not exist or belongs to
    ///   another driver
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn totals_for_driver(
        &self,
        shift_id: i32,
        driver_id: &str,
    ) -> Result<ShiftTotals, AppError> {
        let repo = ShiftRepository::new(self.db);

        let shift = repo
            .find_by_id(shift_id)
            .await?
            .filter(|shift| shift.driver_id == driver_id)
            .ok_or(ShiftError::NotFound { shift_id })?;

        Ok(totals_of(&repo, &shift).await?)
    }

    /// Ends a driver's active shift and freezes its totals
    ///
    /// # Returns
    /// - `Ok(ShiftSummary)`: The closed shift with its frozen totals
    /// - `Err(AppError::ShiftErr(NotFound))`: Shift does not exist, belongs to another
    ///   driver or has already ended
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn end_shift(&self, shift_id: i32, driver_id: &str) -> Result<ShiftSummary, AppError> {
        let txn = self.db.begin().await?;
        let shifts = ShiftRepository::new(&txn);

        let shift = shifts
            .lock_by_id(shift_id)
            .await?
            .filter(|shift| shift.driver_id == driver_id && shift.is_active())
            .ok_or(ShiftError::NotFound { shift_id })?;

        let totals = shifts.compute_totals(shift_id).await?;
        let ended_at = Utc::now();

        if !shifts.close(shift_id, ended_at, totals).await? {
            return Err(ShiftError::NotFound { shift_id }.into());
        }

        txn.commit().await?;

        tracing::info!(
            "Shift {} ended for driver {}: {} orders, {} earned",
            shift_id,
            driver_id,
            totals.order_count,
            totals.earnings
        );

        Ok(ShiftSummary {
            shift: Shift {
                ended_at: Some(ended_at),
                frozen_totals: Some(totals),
                ..shift
            },
            totals,
        })
    }

    /// Lists every shift of a driver, most recent first, each with its totals
    pub async fn list_shifts(&self, driver_id: &str) -> Result<Vec<ShiftSummary>, AppError> {
        let repo = ShiftRepository::new(self.db);

        let shifts = repo.get_by_driver(driver_id).await?;

        let mut summaries = Vec::with_capacity(shifts.len());
        for shift in shifts {
            let totals = totals_of(&repo, &shift).await?;
            summaries.push(ShiftSummary { shift, totals });
        }

        Ok(summaries)
    }
}

async fn totals_of<C: ConnectionTrait>(
    repo: &ShiftRepository<'_, C>,
    shift: &Shift,
) -> Result<ShiftTotals, sea_orm::DbErr> {
    match shift.frozen_totals {
        Some(totals) => Ok(totals),
        None => repo.compute_totals(shift.id).await,
    }
}
