//! Registrar configuration and config-root resolution.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

use crate::error::{RegistrarError, Result};

/// Name of the identifier file inside the per-application directory.
pub const IDENTIFIER_FILE: &str = "uuid";

/// Path appended to the endpoint URL for registration requests.
pub const REGISTRATION_PATH: &str = "uuid";

/// Default request timeout for the registration POST.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Order of the persist and report steps of a first registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteOrder {
    /// Write the identifier file, then report it.
    ///
    /// A failed report leaves the file in place, so the identifier is never
    /// reported twice but may never be reported at all.
    #[default]
    SaveThenSend,
    /// Report the identifier, then write the file.
    ///
    /// A failed write after a successful report makes the next run register
    /// a fresh identifier.
    SendThenSave,
}

/// Settings for one [`Registrar`](crate::registrar::Registrar).
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    /// Application name; also the directory under the config root.
    pub app_name: String,
    /// Base URL of the statistics endpoint.
    pub endpoint: String,
    /// Directory holding per-application config directories.
    pub config_root: PathBuf,
    /// Treat any status other than 200 as a failed registration.
    pub strict_response_validation: bool,
    /// Ordering of the persist and report steps.
    pub write_order: WriteOrder,
    /// Upper bound on the registration request.
    pub timeout: Duration,
}

impl RegistrarConfig {
    /// Creates a config with strict validation, save-then-send ordering and
    /// the default timeout.
    pub fn new(
        app_name: impl Into<String>,
        endpoint: impl Into<String>,
        config_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            endpoint: endpoint.into(),
            config_root: config_root.into(),
            strict_response_validation: true,
            write_order: WriteOrder::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets whether non-200 responses fail the registration.
    #[must_use]
    pub fn strict_response_validation(mut self, strict: bool) -> Self {
        self.strict_response_validation = strict;
        self
    }

    /// Sets the ordering of the persist and report steps.
    #[must_use]
    pub fn write_order(mut self, order: WriteOrder) -> Self {
        self.write_order = order;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the application name and endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::InvalidConfig`] if the application name is
    /// empty or not a single path component, or if the endpoint is not an
    /// absolute `http`/`https` URL without query or fragment.
    pub fn validate(&self) -> Result<()> {
        let name = self.app_name.as_str();
        if name.trim().is_empty() {
            return Err(RegistrarError::InvalidConfig("application name is empty".into()));
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(RegistrarError::InvalidConfig(format!(
                "application name {name:?} must be a single path component"
            )));
        }

        self.parse_endpoint().map(|_| ())
    }

    fn parse_endpoint(&self) -> Result<Url> {
        let invalid = |reason: String| {
            RegistrarError::InvalidConfig(format!("endpoint {:?}: {reason}", self.endpoint))
        };
        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("must use http or https".into()));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment".into()));
        }
        Ok(url)
    }

    /// Path of the identifier file: `<config-root>/<app-name>/uuid`.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        identifier_path(&self.config_root, &self.app_name)
    }

    /// URL the registration is posted to: `<endpoint>/uuid`.
    ///
    /// `uuid` is appended as a path segment of the endpoint, so a trailing
    /// `/` is not doubled.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::InvalidConfig`] if the endpoint does not
    /// pass [`validate`](Self::validate).
    pub fn registration_url(&self) -> Result<String> {
        let mut url = self.parse_endpoint()?;
        url.path_segments_mut()
            .map_err(|()| {
                RegistrarError::InvalidConfig(format!("endpoint {:?} has no path", self.endpoint))
            })?
            .pop_if_empty()
            .push(REGISTRATION_PATH);
        Ok(url.into())
    }
}

/// Path of the identifier file for `app_name` under `config_root`.
#[must_use]
pub fn identifier_path(config_root: &Path, app_name: &str) -> PathBuf {
    config_root.join(app_name).join(IDENTIFIER_FILE)
}

/// Resolves the user's config root from the environment.
///
/// Uses `$HOME/.config`, falling back to `%APPDATA%/.config` on Windows.
/// Returns `None` when no home directory variable is set.
#[must_use]
pub fn default_config_root() -> Option<PathBuf> {
    config_root_from(|key| env::var(key).ok(), cfg!(windows))
}

fn config_root_from(lookup: impl Fn(&str) -> Option<String>, windows: bool) -> Option<PathBuf> {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let home = non_empty("HOME").or_else(|| if windows { non_empty("APPDATA") } else { None })?;
    Some(Path::new(&home).join(".config"))
}
