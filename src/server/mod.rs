//! Server-side business logic and persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - Driver- and rider-facing façade, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Order lifecycle and shift accounting managers
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and their caller-visible kinds
//! - **Middleware** (`middleware/`) - Identity role guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB handle, payout share)
//! - **Startup** (`startup`) - Database connection, migrations and catalog seeding
//!
//! # Request Flow
//!
//! 1. **Controller** checks the caller's role, parses ids, calls a service
//! 2. **Service** opens a transaction and orchestrates repository calls
//! 3. **Data** locks, validates and updates rows, converts entities to domain models
//! 4. **Service** commits and returns the domain model
//! 5. **Controller** converts the domain model to a DTO, or the error to an `ErrorDto`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
