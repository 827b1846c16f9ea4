//! Vehicle identifiers.

use uuid::Uuid;

/// Identifier of a vehicle identity (shared by every capability built on it).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VehicleId(Uuid);

impl VehicleId {
    /// Time-ordered (UUIDv7), so ids sort in creation order.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct() {
        assert_ne!(VehicleId::new(), VehicleId::new());
    }

    #[test]
    fn display_is_hyphenated_uuid() {
        let text = VehicleId::new().to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }
}
