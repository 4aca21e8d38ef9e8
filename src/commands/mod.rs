//! Command dispatch and handlers.

pub mod register;
pub mod show;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::cli::{AppArgs, Command};
use crate::config::{default_config_root, DEFAULT_TIMEOUT};
use crate::cassette::session::RecordingSession;
use crate::context::ServiceContext;

/// Environment variable naming a directory to record port interactions into.
pub const RECORD_ENV: &str = "STATREG_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `STATREG_RECORD` is set to a directory path, all port interactions
/// are recorded to a cassette file in that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let timeout = match command {
        Command::Register { timeout_secs, .. } => Duration::from_secs(*timeout_secs),
        Command::Show { .. } => DEFAULT_TIMEOUT,
    };
    let app_name = &command.app().app_name;

    let (ctx, session) = if let Ok(path) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(PathBuf::from(path), app_name, timeout)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(timeout), None)
    };

    let result = match command {
        Command::Register { app, endpoint, lenient, send_first, timeout_secs: _ } => {
            register::run(ctx, app, endpoint.as_deref(), *lenient, *send_first, timeout)
        }
        Command::Show { app } => {
            let result = show::run(&ctx, app);
            drop(ctx);
            result
        }
    };

    match session {
        Some(session) => finish_recording(result, session),
        None => result,
    }
}

/// Finish recording after the command completes, even on error.
///
/// A command error takes precedence over a failure to write the cassette.
fn finish_recording(result: Result<(), String>, session: RecordingSession) -> Result<(), String> {
    match (session.finish(), result) {
        (Ok(path), result) => {
            eprintln!("Recording saved to: {}", path.display());
            result
        }
        (Err(finish_err), Err(command_err)) => {
            warn!(error = %finish_err, "failed to save recording");
            Err(command_err)
        }
        (Err(finish_err), Ok(())) => Err(finish_err),
    }
}

/// Resolve the config root from the flag or the environment.
fn config_root(app: &AppArgs) -> Result<PathBuf, String> {
    app.config_root
        .clone()
        .or_else(default_config_root)
        .ok_or_else(|| "Cannot locate config directory: set HOME or pass --config-root".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_survives_failed_recording() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(dir.path(), "myapp").unwrap();
        let _held = session.recorder();

        let result = finish_recording(Err("boom".to_string()), session);

        assert_eq!(result, Err("boom".to_string()));
    }

    #[test]
    fn failed_recording_fails_a_successful_command() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(dir.path(), "myapp").unwrap();
        let _held = session.recorder();

        let err = finish_recording(Ok(()), session).unwrap_err();

        assert!(err.contains("still hold the recorder"), "{err}");
    }

    #[test]
    fn finished_recording_keeps_command_result() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(dir.path(), "myapp").unwrap();

        assert_eq!(finish_recording(Err("boom".to_string()), session), Err("boom".to_string()));
        assert!(dir.path().join(crate::cassette::session::SESSION_CASSETTE).exists());
    }
}
