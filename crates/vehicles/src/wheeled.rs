//! Wheeled capability.

use crate::vehicle::{Vehicle, VehicleIdentity};

/// Wheel data attached to a vehicle identity.
///
/// The count is signed and stored as given; zero and negative counts are
/// accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WheelSet {
    wheels: i32,
}

impl WheelSet {
    pub fn new(wheels: i32) -> Self {
        Self { wheels }
    }

    pub fn count(&self) -> i32 {
        self.wheels
    }
}

/// Capability: the vehicle rolls on wheels.
pub trait Wheeled: Vehicle {
    fn wheel_set(&self) -> &WheelSet;

    fn wheels(&self) -> i32 {
        self.wheel_set().count()
    }
}

/// A vehicle that is only wheeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheeledVehicle {
    identity: VehicleIdentity,
    wheel_set: WheelSet,
}

impl WheeledVehicle {
    pub fn new(make: impl Into<String>, wheels: i32) -> Self {
        let identity = VehicleIdentity::new(make);
        tracing::debug!(vehicle_id = %identity.id(), wheels, "wheeled vehicle created");
        Self {
            identity,
            wheel_set: WheelSet::new(wheels),
        }
    }
}

impl Vehicle for WheeledVehicle {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }
}

impl Wheeled for WheeledVehicle {
    fn wheel_set(&self) -> &WheelSet {
        &self.wheel_set
    }
}
