//! Application state shared across all request handlers.
//!
//! Holds the explicitly constructed persistence handle and the payout configuration.
//! The state is initialized once during startup and cloned for each request; there
//! is no ambient global state.

use sea_orm::DatabaseConnection;

use crate::server::{
    model::payment::DriverShare,
    service::{order::OrderService, shift::ShiftService},
};

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool whose clones share
/// the pool, and `DriverShare` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Fraction of an order's price paid out to drivers.
    pub driver_share: DriverShare,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `driver_share` - Configured driver payout share
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, driver_share: DriverShare) -> Self {
        Self { db, driver_share }
    }

    /// Order lifecycle manager bound to this state's connection.
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(&self.db, self.driver_share)
    }

    /// Shift accounting manager bound to this state's connection.
    pub fn shifts(&self) -> ShiftService<'_> {
        ShiftService::new(&self.db)
    }
}
