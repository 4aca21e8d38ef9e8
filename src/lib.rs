//! First-run installation registration for usage statistics.
//!
//! A [`Registrar`] generates a random identifier the first time an
//! application runs, stores it under the user's config directory and
//! reports it once to a statistics endpoint. Later runs find the stored
//! file and do nothing.
//!
//! ```no_run
//! use statreg::{Registrar, RegistrarConfig};
//!
//! let config = RegistrarConfig::new("myapp", "https://stats.example.com", "/home/me/.config");
//! let registrar = Registrar::new(config)?;
//! registrar.register_blocking()?;
//! # Ok::<(), statreg::RegistrarError>(())
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod registrar;

pub use config::{default_config_root, RegistrarConfig, WriteOrder};
pub use context::ServiceContext;
pub use error::RegistrarError;
pub use registrar::{RegisterOutcome, Registrar, Registration};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// `--help` and `--version` print their output and succeed.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print().map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_shows_unregistered_app() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let result = run(["statreg", "show", "--app", "myapp", "--config-root", root]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_treats_help_and_version_as_success() {
        assert!(run(["statreg", "--help"]).is_ok());
        assert!(run(["statreg", "register", "--help"]).is_ok());
        assert!(run(["statreg", "--version"]).is_ok());
    }

    #[test]
    fn run_errors_on_missing_required_flag() {
        let err = run(["statreg", "register"]).unwrap_err();
        assert!(err.contains("--app"));
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["statreg", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_invalid_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let result = run([
            "statreg",
            "register",
            "--app",
            "myapp",
            "--config-root",
            root,
            "--endpoint",
            "not a url",
        ]);
        assert!(result.unwrap_err().contains("invalid registrar configuration"));
        assert!(!dir.path().join("myapp").exists());
    }
}
