use thiserror::Error;

use crate::{
    model::api::ErrorKind,
    server::model::order::{OrderOption, OrderStatus, MAX_ORDER_PRICE},
};

#[derive(Error, Debug)]
pub enum OrderError {
    /// Order is not pending at claim time.
    #[error("Order {order_id} is not available for acceptance")]
    NotClaimable {
        /// The order the driver tried to claim
        order_id: i32,
    },

    /// Order is already bound to a different driver.
    #[error("Order {order_id} is already assigned to another driver")]
    AlreadyAssigned {
        /// The order the driver tried to claim
        order_id: i32,
    },

    /// Status does not permit the transition, or the caller is not the assigned driver.
    #[error("Order {order_id} cannot move from {from} to {to} for driver {driver_id}")]
    InvalidTransition {
        /// The order being transitioned
        order_id: i32,
        /// The driver attempting the transition
        driver_id: String,
        /// Status observed at the time of the attempt
        from: OrderStatus,
        /// Requested status
        to: OrderStatus,
    },

    /// Requested add-on is not available for the order's service category.
    #[error("Option '{option}' is not available in service category '{category}'")]
    OptionNotSupported {
        /// The requested add-on
        option: OrderOption,
        /// Name of the service category
        category: String,
    },

    /// Price outside `0..=MAX_ORDER_PRICE`, or not representable as money.
    #[error("Order price must be between 0.00 and {}", MAX_ORDER_PRICE)]
    PriceOutOfRange,
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotClaimable { .. } => ErrorKind::NotClaimable,
            Self::AlreadyAssigned { .. } => ErrorKind::AlreadyAssigned,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::OptionNotSupported { .. } => ErrorKind::OptionNotSupported,
            Self::PriceOutOfRange => ErrorKind::InvalidInput,
        }
    }
}
