use serde::{Deserialize, Serialize};

/// Caller-visible failure kind.
///
/// Every manager failure maps to exactly one of these. Only `StorageFailure` is
/// worth retrying verbatim.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotClaimable,
    AlreadyAssigned,
    InvalidTransition,
    OptionNotSupported,
    ShiftAlreadyActive,
    ShiftNotFound,
    NotFound,
    Forbidden,
    InvalidInput,
    /// Process started with missing or invalid settings.
    Misconfigured,
    StorageFailure,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::StorageFailure)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorDto {
    pub kind: ErrorKind,
    pub error: String,
}
