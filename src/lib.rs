//! Ride-dispatch backend core.
//!
//! - `model` holds the serializable shapes handed to whatever transport fronts the core.
//! - `server` holds the managers, the persistence gateway and the driver-facing façade.

pub mod model;
pub mod server;
