//! Aircraft: wheeled and motorised over one shared identity.

use std::io::Write;

use fleet_core::FleetResult;

use crate::motorised::{Engine, Motorised};
use crate::vehicle::{Vehicle, VehicleIdentity};
use crate::wheeled::{WheelSet, Wheeled};

/// Composite vehicle carrying both capabilities.
///
/// Owns exactly one [`VehicleIdentity`]; the `Wheeled` and `Motorised` views
/// both resolve to it. No other state is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    identity: VehicleIdentity,
    wheel_set: WheelSet,
    engine: Engine,
}

impl Aircraft {
    /// Build the aircraft: identity first, then wheels, then the engine,
    /// whose start-up step writes `Wroom!` to `out`.
    pub fn new<W: Write + ?Sized>(
        make: impl Into<String>,
        wheels: i32,
        engine_type: impl Into<String>,
        out: &mut W,
    ) -> FleetResult<Self> {
        let identity = VehicleIdentity::new(make);
        let wheel_set = WheelSet::new(wheels);
        let engine = Engine::new(engine_type);
        engine.start(out)?;

        tracing::debug!(
            vehicle_id = %identity.id(),
            make = %identity.make(),
            wheels,
            engine_type = %engine.engine_type(),
            "aircraft created"
        );
        Ok(Self {
            identity,
            wheel_set,
            engine,
        })
    }

    /// Report make, wheels and engine type. Read-only and repeatable.
    pub fn take_off<W: Write + ?Sized>(&self, out: &mut W) -> FleetResult<()> {
        writeln!(out, "Aircraft preparing to take off")?;
        writeln!(out, "Make: {}", self.make())?;
        writeln!(out, "Wheels: {}", self.wheels())?;
        writeln!(out, "Engine type: {}", self.engine_type())?;

        tracing::info!(vehicle_id = %self.vehicle_id(), "aircraft preparing to take off");
        Ok(())
    }
}

impl Vehicle for Aircraft {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }
}

impl Wheeled for Aircraft {
    fn wheel_set(&self) -> &WheelSet {
        &self.wheel_set
    }
}

impl Motorised for Aircraft {
    fn engine(&self) -> &Engine {
        &self.engine
    }
}
