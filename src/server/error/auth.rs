use thiserror::Error;

use crate::server::model::identity::Role;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Caller's role does not permit the operation.
    ///
    /// The identity was authenticated elsewhere and is trusted, but e.g. a rider
    /// attempted a driver-only operation.
    #[error("Operation requires the {required} role, caller {subject_id} is a {actual}")]
    RoleMismatch {
        /// Id of the calling subject
        subject_id: String,
        /// Role the operation requires
        required: Role,
        /// Role the caller has
        actual: Role,
    },
}
