//! Error taxonomy for the registration workflow.

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::PortError;

/// Errors surfaced by [`Registrar`](crate::registrar::Registrar).
///
/// Each variant maps to one step of the workflow. After any of them the
/// whole operation can be retried on the next run.
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// The registrar was constructed with unusable settings.
    #[error("invalid registrar configuration: {0}")]
    InvalidConfig(String),

    /// The blocking entry point was called from inside an async runtime.
    #[error("register_blocking called inside an async runtime; use register().await instead")]
    BlockingInRuntime,

    /// The private runtime for the blocking entry point could not be built.
    #[error("failed to build async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The randomness source could not produce an identifier.
    #[error("failed to generate identifier: {0}")]
    IdentifierGeneration(#[source] PortError),

    /// The request could not be built or the transport failed.
    #[error("failed to reach {url}: {source}")]
    Network {
        /// Endpoint the request was sent to.
        url: String,
        /// Underlying transport error.
        #[source]
        source: PortError,
    },

    /// The endpoint answered with a status other than 200.
    #[error("registration rejected by {url}: status code {status}")]
    Registration {
        /// Endpoint the request was sent to.
        url: String,
        /// Status code returned by the endpoint.
        status: u16,
    },

    /// The identifier file could not be written or read.
    #[error("failed to persist identifier at {}: {source}", path.display())]
    Persistence {
        /// Identifier file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: PortError,
    },
}

impl RegistrarError {
    /// Returns `true` if the failure came from talking to the endpoint.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Registration { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = RegistrarError> = std::result::Result<T, E>;
