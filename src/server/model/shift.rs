//! Domain models for driver work shifts.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::shift::{EndShiftDto, ShiftDto, ShiftTotalsDto},
    server::model::money::Money,
};

/// Completed-order count and driver earnings attributed to a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftTotals {
    pub order_count: u64,
    pub earnings: Money,
}

impl ShiftTotals {
    pub fn into_dto(self, shift_id: i32) -> ShiftTotalsDto {
        ShiftTotalsDto {
            shift_id: shift_id.to_string(),
            total_orders: self.order_count,
            total_earnings: self.earnings.as_major_f64(),
        }
    }
}

/// Work session of a driver. Active while `ended_at` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub id: i32,
    pub driver_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// Totals frozen when the shift was closed.
    pub frozen_totals: Option<ShiftTotals>,
}

impl Shift {
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Converts a stored shift, rejecting a negative frozen order count.
    pub fn from_entity(entity: entity::work_shift::Model) -> Result<Self, DbErr> {
        let frozen_totals = match (entity.total_orders, entity.total_earnings) {
            (Some(order_count), Some(earnings)) => Some(ShiftTotals {
                order_count: u64::try_from(order_count).map_err(|_| {
                    DbErr::Custom(format!(
                        "Shift {} has invalid order count {}",
                        entity.id, order_count
                    ))
                })?,
                earnings: Money::from_minor(earnings),
            }),
            _ => None,
        };

        Ok(Self {
            id: entity.id,
            driver_id: entity.driver_id,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            frozen_totals,
        })
    }
}

/// Shift together with its totals: a live preview while active, frozen once closed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSummary {
    pub shift: Shift,
    pub totals: ShiftTotals,
}

impl ShiftSummary {
    pub fn into_dto(self) -> ShiftDto {
        let status = if self.shift.is_active() {
            "active"
        } else {
            "ended"
        };

        ShiftDto {
            id: self.shift.id.to_string(),
            start_time: self.shift.started_at,
            end_time: self.shift.ended_at,
            status: status.to_string(),
            total_orders: self.totals.order_count,
            total_earnings: self.totals.earnings.as_major_f64(),
        }
    }

    pub fn into_end_dto(self) -> EndShiftDto {
        EndShiftDto {
            shift_id: self.shift.id.to_string(),
            total_orders: self.totals.order_count,
            total_earnings: self.totals.earnings.as_major_f64(),
            message: "Shift ended successfully".to_string(),
        }
    }
}
