//! Driver- and rider-facing façade.
//!
//! Each function takes the caller's already-authenticated identity, checks its role,
//! parses opaque string ids, calls the managers and renders the result as a DTO.
//! Failures are returned as an `ErrorDto` carrying the unaltered failure kind.

pub mod order;
pub mod shift;
