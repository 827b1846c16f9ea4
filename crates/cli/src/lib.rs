//! Fixed demonstration scenario: a motorised car, then an aircraft that is
//! both wheeled and motorised.

use std::io::Write;

use fleet_core::FleetResult;
use fleet_vehicles::{Aircraft, Motorised, MotorisedVehicle, Vehicle};

/// Line printed between scenario sections.
pub const SEPARATOR: &str = "----------------------------------------";

/// Run the scenario, writing every status line to `out`.
pub fn run<W: Write + ?Sized>(out: &mut W) -> FleetResult<()> {
    writeln!(out, "Creating a motorised vehicle...")?;
    let ford = MotorisedVehicle::new("Ford", "petrol", out)?;
    writeln!(out, "Created a motorised vehicle: {}", ford.make())?;

    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "Creating an aircraft...")?;
    let boeing = Aircraft::new("Boeing", 3, "kerosene", out)?;
    writeln!(out, "Created an aircraft: {}", boeing.make())?;

    writeln!(out, "{SEPARATOR}")?;

    boeing.switch_on(out)?;
    writeln!(out)?;
    boeing.take_off(out)?;

    tracing::debug!(car = %ford.vehicle_id(), aircraft = %boeing.vehicle_id(), "scenario finished");
    Ok(())
}
