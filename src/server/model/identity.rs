//! Caller identity handed over by the authentication collaborator.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Rider,
    Driver,
    Staff,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Rider => "rider",
            Role::Driver => "driver",
            Role::Staff => "staff",
        };
        f.write_str(name)
    }
}

/// Already-authenticated caller. Trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque id of the rider, driver or staff member.
    pub subject_id: String,
    pub role: Role,
}

impl Identity {
    pub fn new(subject_id: impl Into<String>, role: Role) -> Self {
        Self {
            subject_id: subject_id.into(),
            role,
        }
    }
}
