//! Service layer for business logic and orchestration.
//!
//! This module contains the managers of the application, which sit between the
//! controller (façade) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the order and shift lifecycles
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Applying each multi-step operation all-or-nothing

pub mod catalog;
pub mod order;
pub mod payment;
pub mod shift;
