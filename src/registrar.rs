//! First-run registration workflow.
//!
//! On the first run for an application the registrar generates a random
//! identifier, stores it at `<config-root>/<app>/uuid` and posts it to
//! `<endpoint>/uuid`. Once the file exists every later run is a no-op.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{RegistrarConfig, WriteOrder};
use crate::context::ServiceContext;
use crate::error::{RegistrarError, Result};
use crate::ports::{PortError, RegistrationPayload};

/// Status code the endpoint answers a successful registration with.
const SUCCESS_STATUS: u16 = 200;

/// A completed first-run registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Application the identifier belongs to.
    pub app_name: String,
    /// The generated identifier.
    pub identifier: String,
    /// File the identifier was written to.
    pub target_path: PathBuf,
}

/// Result of [`Registrar::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The identifier file already existed; nothing was done.
    AlreadyRegistered {
        /// Existing identifier file.
        path: PathBuf,
    },
    /// A new identifier was generated, stored and reported.
    Registered(Registration),
}

/// Performs first-run registration for one application.
pub struct Registrar {
    config: RegistrarConfig,
    target_path: PathBuf,
    ctx: ServiceContext,
}

impl Registrar {
    /// Creates a registrar backed by live adapters. No I/O is performed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::InvalidConfig`] if the config is invalid.
    pub fn new(config: RegistrarConfig) -> Result<Self> {
        config.validate()?;
        let ctx = ServiceContext::live(config.timeout);
        Ok(Self::assemble(config, ctx))
    }

    /// Creates a registrar over the given service context.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::InvalidConfig`] if the config is invalid.
    pub fn with_context(config: RegistrarConfig, ctx: ServiceContext) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, ctx))
    }

    fn assemble(config: RegistrarConfig, ctx: ServiceContext) -> Self {
        let target_path = config.target_path();
        Self { config, target_path, ctx }
    }

    /// The registrar's configuration.
    #[must_use]
    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// Path of the identifier file.
    #[must_use]
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Reads back the stored identifier, if the application is registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Persistence`] if the file exists but cannot
    /// be read.
    pub fn stored_identifier(&self) -> Result<Option<String>> {
        if !self.ctx.fs.exists(&self.target_path) {
            return Ok(None);
        }
        self.ctx.fs.read_to_string(&self.target_path).map(Some).map_err(|e| self.persistence(e))
    }

    /// Registers this installation unless it is already registered.
    ///
    /// Only the presence of the identifier file is checked; its contents
    /// are not validated.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step. See [`RegistrarError`].
    pub async fn register(&self) -> Result<RegisterOutcome> {
        if self.ctx.fs.exists(&self.target_path) {
            debug!(path = %self.target_path.display(), "identifier file present, skipping");
            return Ok(RegisterOutcome::AlreadyRegistered { path: self.target_path.clone() });
        }

        let identifier =
            self.ctx.id_gen.generate_id().map_err(RegistrarError::IdentifierGeneration)?;
        debug!(app = %self.config.app_name, %identifier, "generated identifier");

        match self.config.write_order {
            WriteOrder::SaveThenSend => {
                self.save(&identifier)?;
                self.send(&identifier).await?;
            }
            WriteOrder::SendThenSave => {
                self.send(&identifier).await?;
                self.save(&identifier)?;
            }
        }

        info!(
            app = %self.config.app_name,
            %identifier,
            path = %self.target_path.display(),
            "registered installation"
        );
        Ok(RegisterOutcome::Registered(Registration {
            app_name: self.config.app_name.clone(),
            identifier,
            target_path: self.target_path.clone(),
        }))
    }

    /// Blocking form of [`register`](Self::register) for synchronous hosts.
    ///
    /// Drives the workflow on a private current-thread runtime.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register). Called from inside an async
    /// runtime it returns [`RegistrarError::BlockingInRuntime`] without
    /// touching any port; a runtime that cannot be built surfaces as
    /// [`RegistrarError::Runtime`].
    pub fn register_blocking(&self) -> Result<RegisterOutcome> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(RegistrarError::BlockingInRuntime);
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(RegistrarError::Runtime)?;
        runtime.block_on(self.register())
    }

    fn save(&self, identifier: &str) -> Result<()> {
        self.ctx.fs.write_private(&self.target_path, identifier).map_err(|e| self.persistence(e))?;
        debug!(path = %self.target_path.display(), "saved identifier");
        Ok(())
    }

    fn persistence(&self, source: PortError) -> RegistrarError {
        RegistrarError::Persistence { path: self.target_path.clone(), source }
    }

    async fn send(&self, identifier: &str) -> Result<()> {
        let url = self.config.registration_url()?;
        let payload = RegistrationPayload {
            app_name: self.config.app_name.clone(),
            uuid: identifier.to_string(),
        };

        let status = self
            .ctx
            .reporter
            .report(&url, &payload)
            .await
            .map_err(|source| RegistrarError::Network { url: url.clone(), source })?;

        if status != SUCCESS_STATUS {
            if self.config.strict_response_validation {
                return Err(RegistrarError::Registration { url, status });
            }
            warn!(%url, status, "endpoint did not acknowledge registration, continuing");
        }
        debug!(%url, status, "reported identifier");
        Ok(())
    }
}
