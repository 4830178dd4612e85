//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Legacy storage details (the
//! duplicate `created` status label, nullable columns, minor-unit integers) stop here.

pub mod catalog;
pub mod identity;
pub mod money;
pub mod order;
pub mod payment;
pub mod shift;
