//! Motorised capability.

use std::io::Write;

use fleet_core::FleetResult;

use crate::vehicle::{Vehicle, VehicleIdentity};

/// Engine data attached to a vehicle identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    engine_type: String,
}

impl Engine {
    pub fn new(engine_type: impl Into<String>) -> Self {
        Self {
            engine_type: engine_type.into(),
        }
    }

    pub fn engine_type(&self) -> &str {
        &self.engine_type
    }

    /// Start-up step run once while a motorised vehicle is being built.
    ///
    /// Writes the `Wroom!` line. Constructors call this exactly once; nothing
    /// else should.
    pub fn start<W: Write + ?Sized>(&self, out: &mut W) -> FleetResult<()> {
        writeln!(out, "Wroom!")?;
        tracing::debug!(engine_type = %self.engine_type, "engine started");
        Ok(())
    }
}

/// Capability: the vehicle has an engine that can be switched on.
pub trait Motorised: Vehicle {
    fn engine(&self) -> &Engine;

    fn engine_type(&self) -> &str {
        self.engine().engine_type()
    }

    /// Announce the engine is on. Read-only; every call writes the same line.
    fn switch_on<W: Write + ?Sized>(&self, out: &mut W) -> FleetResult<()>
    where
        Self: Sized,
    {
        writeln!(out, "The {} engine is now on.", self.engine_type())?;
        tracing::info!(
            vehicle_id = %self.vehicle_id(),
            engine_type = %self.engine_type(),
            "engine switched on"
        );
        Ok(())
    }
}

/// A vehicle that is only motorised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorisedVehicle {
    identity: VehicleIdentity,
    engine: Engine,
}

impl MotorisedVehicle {
    /// Build the vehicle and start its engine, writing `Wroom!` to `out`.
    pub fn new<W: Write + ?Sized>(
        make: impl Into<String>,
        engine_type: impl Into<String>,
        out: &mut W,
    ) -> FleetResult<Self> {
        let identity = VehicleIdentity::new(make);
        let engine = Engine::new(engine_type);
        engine.start(out)?;

        tracing::debug!(
            vehicle_id = %identity.id(),
            engine_type = %engine.engine_type(),
            "motorised vehicle created"
        );
        Ok(Self { identity, engine })
    }
}

impl Vehicle for MotorisedVehicle {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }
}

impl Motorised for MotorisedVehicle {
    fn engine(&self) -> &Engine {
        &self.engine
    }
}
