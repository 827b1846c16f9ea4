//! Vehicle object model (shared identity + composable capabilities).
//!
//! A single [`VehicleIdentity`] sits at the root. Capabilities ([`Wheeled`],
//! [`Motorised`]) are traits over that identity rather than separate copies
//! of it, so a composite such as [`Aircraft`] carries both while owning
//! exactly one identity.

pub mod aircraft;
pub mod motorised;
pub mod vehicle;
pub mod wheeled;

pub use aircraft::Aircraft;
pub use motorised::{Engine, Motorised, MotorisedVehicle};
pub use vehicle::{Vehicle, VehicleIdentity};
pub use wheeled::{WheelSet, Wheeled, WheeledVehicle};
