//! ID generator port for producing installation identifiers.

use super::PortError;

/// Generates unique identifiers.
///
/// Abstracting ID generation allows deterministic replay by substituting
/// a predictable sequence during tests and cassette playback.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier in canonical hyphenated form.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying randomness source is unavailable.
    fn generate_id(&self) -> Result<String, PortError>;
}
