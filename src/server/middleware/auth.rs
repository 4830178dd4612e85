use crate::server::{
    error::{auth::AuthError, AppError},
    model::identity::{Identity, Role},
};

/// Checks the role of an already-authenticated caller.
pub struct AuthGuard<'a> {
    identity: &'a Identity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(identity: &'a Identity) -> Self {
        Self { identity }
    }

    /// Requires the caller to hold `role`
    ///
    /// # Returns
    /// - `Ok(&str)`: Subject id of the caller
    /// - `Err(AppError::AuthErr(RoleMismatch))`: Caller holds a different role
    pub fn require(&self, role: Role) -> Result<&'a str, AppError> {
        if self.identity.role != role {
            return Err(AuthError::RoleMismatch {
                subject_id: self.identity.subject_id.clone(),
                required: role,
                actual: self.identity.role,
            }
            .into());
        }

        Ok(&self.identity.subject_id)
    }
}
