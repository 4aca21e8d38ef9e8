//! Live adapter for the `IdGenerator` port.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

use crate::ports::{IdGenerator, PortError};

/// Live ID generator that produces random (version 4) UUIDs.
///
/// Bytes come straight from the operating system's randomness source so
/// that an unavailable source surfaces as an error instead of a panic.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> Result<String, PortError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| -> PortError { format!("OS randomness source unavailable: {e}").into() })?;
        Ok(Builder::from_random_bytes(bytes).into_uuid().hyphenated().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::{Uuid, Variant};

    #[test]
    fn generates_unique_ids() {
        let gen = LiveIdGenerator::new();
        let id1 = gen.generate_id().unwrap();
        let id2 = gen.generate_id().unwrap();

        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format: 8-4-4-4-12
    }

    #[test]
    fn ids_are_canonical_version_4() {
        let id = LiveIdGenerator::new().generate_id().unwrap();
        let parsed = Uuid::parse_str(&id).unwrap();

        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), Variant::RFC4122);
        assert_eq!(parsed.hyphenated().to_string(), id);
        assert_eq!(id, id.to_lowercase());
    }
}
