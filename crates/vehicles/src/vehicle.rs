//! Root vehicle identity.

use fleet_core::VehicleId;

/// The identity every vehicle-like value is built on.
///
/// Immutable once constructed. Composites own exactly one of these and lend
/// it to each capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleIdentity {
    id: VehicleId,
    make: String,
}

impl VehicleIdentity {
    /// No validation: an empty make is accepted.
    pub fn new(make: impl Into<String>) -> Self {
        Self::with_id(VehicleId::new(), make)
    }

    pub fn with_id(id: VehicleId, make: impl Into<String>) -> Self {
        let identity = Self {
            id,
            make: make.into(),
        };
        tracing::debug!(vehicle_id = %identity.id, make = %identity.make, "vehicle identity created");
        identity
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }
}

/// Anything built on a [`VehicleIdentity`].
///
/// Capability traits use this as their supertrait, so every capability path
/// of a composite resolves to the same `identity()`.
pub trait Vehicle {
    fn identity(&self) -> &VehicleIdentity;

    fn make(&self) -> &str {
        self.identity().make()
    }

    fn vehicle_id(&self) -> VehicleId {
        self.identity().id()
    }
}

impl Vehicle for VehicleIdentity {
    fn identity(&self) -> &VehicleIdentity {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_make_verbatim() {
        let identity = VehicleIdentity::new("Ford");
        assert_eq!(identity.make(), "Ford");
        assert_eq!(Vehicle::make(&identity), "Ford");
    }

    #[test]
    fn accepts_empty_make() {
        let identity = VehicleIdentity::new("");
        assert_eq!(identity.make(), "");
    }

    #[test]
    fn vehicle_id_matches_supplied_id() {
        let id = VehicleId::new();
        let identity = VehicleIdentity::with_id(id, "Boeing");
        assert_eq!(identity.id(), id);
        assert_eq!(identity.vehicle_id(), id);
    }

    #[test]
    fn separately_created_identities_are_distinct() {
        let a = VehicleIdentity::new("Ford");
        let b = VehicleIdentity::new("Ford");
        assert_eq!(a.make(), b.make());
        assert_ne!(a.id(), b.id());
    }
}
