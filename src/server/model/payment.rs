//! Domain models for driver payouts.

use chrono::{DateTime, Utc};

use crate::{model::payment::PaymentDto, server::model::money::Money};

/// Fraction of an order's price paid out to the driver, in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverShare {
    basis_points: u32,
}

impl DriverShare {
    /// Basis points in a whole (100%).
    pub const WHOLE: u32 = 10_000;

    /// Returns `None` when the share exceeds 100%.
    pub const fn from_basis_points(basis_points: u32) -> Option<Self> {
        if basis_points > Self::WHOLE {
            return None;
        }
        Some(Self { basis_points })
    }

    /// Parses a fraction such as `0.70`.
    pub fn from_fraction(fraction: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return None;
        }
        Self::from_basis_points((fraction * Self::WHOLE as f64).round() as u32)
    }

    pub const fn basis_points(self) -> u32 {
        self.basis_points
    }

    pub fn as_fraction(self) -> f64 {
        self.basis_points as f64 / Self::WHOLE as f64
    }
}

impl Default for DriverShare {
    /// 70%.
    fn default() -> Self {
        Self {
            basis_points: 7_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    OrderPayment,
}

impl PaymentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OrderPayment => "order_payment",
        }
    }
}

/// Payout record created when an order completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    /// Driver payout.
    pub amount: Money,
    /// Driver share in basis points at the time of completion.
    pub driver_share_bps: i32,
    pub status: PaymentStatus,
    pub kind: PaymentKind,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            amount: Money::from_minor(entity.amount),
            driver_share_bps: entity.driver_share_bps,
            status: match entity.status {
                entity::payment::PaymentStatus::Pending => PaymentStatus::Pending,
                entity::payment::PaymentStatus::Paid => PaymentStatus::Paid,
            },
            kind: match entity.kind {
                entity::payment::PaymentKind::OrderPayment => PaymentKind::OrderPayment,
            },
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id.to_string(),
            order_id: self.order_id.to_string(),
            amount: self.amount.as_major_f64(),
            driver_share: self.driver_share_bps as f64 / DriverShare::WHOLE as f64,
            status: self.status.as_str().to_string(),
            kind: self.kind.as_str().to_string(),
        }
    }
}

/// Parameters for recording a driver payout.
#[derive(Debug, Clone, Copy)]
pub struct CreatePaymentParams {
    pub order_id: i32,
    pub amount: Money,
    pub driver_share: DriverShare,
}
