//! Data models for the vehicle data backend.
//!
//! Request payloads mirror the upstream feeds' wire format exactly; row
//! structs carry the coerced values in destination-column order.

mod fastag;
mod vehicle_rc;

pub use fastag::*;
pub use vehicle_rc::*;
