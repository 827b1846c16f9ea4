//! `fleet-core` — foundation building blocks for the vehicle model.
//!
//! This crate contains **pure** primitives: identifiers and errors.

pub mod error;
pub mod id;

pub use error::{FleetError, FleetResult};
pub use id::VehicleId;
