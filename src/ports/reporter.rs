//! Reporter port for announcing a new installation to the statistics endpoint.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Boxed future type alias used by [`Reporter`] to keep the trait dyn-compatible.
///
/// Resolves to the HTTP status code of the completed round trip.
pub type ReportFuture<'a> = Pin<Box<dyn Future<Output = Result<u16, PortError>> + Send + 'a>>;

/// JSON body posted to the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    /// Name of the application being registered.
    pub app_name: String,
    /// The freshly generated installation identifier.
    pub uuid: String,
}

/// Sends registration payloads to a remote endpoint.
pub trait Reporter: Send + Sync {
    /// Posts `payload` as JSON to `url` and returns the response status code.
    ///
    /// Any completed round trip resolves to `Ok`, whatever the status; the
    /// caller decides which statuses count as success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the transport fails
    /// (connection refused, timeout, TLS, etc.).
    fn report<'a>(&'a self, url: &'a str, payload: &'a RegistrationPayload) -> ReportFuture<'a>;
}
