//! Serializable response and request shapes exposed to the presentation layer.
//!
//! Nothing in here knows about the database: optional fields are either present or
//! skipped entirely, never emitted as raw null markers.

pub mod api;
pub mod order;
pub mod payment;
pub mod shift;
