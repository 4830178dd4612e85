use thiserror::Error;

use crate::model::api::ErrorKind;

#[derive(Error, Debug)]
pub enum ShiftError {
    /// Driver already has an open shift.
    #[error("Driver {driver_id} already has an active shift ({shift_id})")]
    AlreadyActive {
        /// The driver attempting to start a shift
        driver_id: String,
        /// The shift that is still open
        shift_id: i32,
    },

    /// Shift does not exist, belongs to another driver, or has already ended.
    #[error("Shift {shift_id} not found or already ended")]
    NotFound {
        /// The requested shift
        shift_id: i32,
    },
}

impl ShiftError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyActive { .. } => ErrorKind::ShiftAlreadyActive,
            Self::NotFound { .. } => ErrorKind::ShiftNotFound,
        }
    }
}
