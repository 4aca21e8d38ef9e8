//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the registrar and an external
//! system (randomness, filesystem, statistics endpoint).
//! Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod id_gen;
pub mod reporter;

pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
pub use reporter::{RegistrationPayload, ReportFuture, Reporter};

/// Error type returned by every port method.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
