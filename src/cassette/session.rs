//! Recording session capturing every port interaction of one run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the cassette written by a [`RecordingSession`].
pub const SESSION_CASSETTE: &str = "session.cassette.yaml";

/// Owns the shared recorder that all recording adapters write into.
///
/// The cassette lands at `<output_dir>/session.cassette.yaml` when the
/// session is finished.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session writing into `output_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(output_dir: impl Into<PathBuf>, app_name: &str) -> Result<Self, String> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            format!("Failed to create cassette directory {}: {e}", output_dir.display())
        })?;

        let name = format!("{}-{app_name}", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(output_dir.join(SESSION_CASSETTE), name, app_name);
        Ok(Self { recorder: Arc::new(Mutex::new(recorder)), output_dir })
    }

    /// Handle to the shared recorder, for wiring recording adapters.
    #[must_use]
    pub fn recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(&self.recorder)
    }

    /// Directory the cassette is written into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the cassette to disk and return its path.
    ///
    /// Every adapter holding a recorder handle must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if adapters still hold the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use serde_json::json;

    #[test]
    fn session_writes_cassette_into_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("capture");

        let session = RecordingSession::new(&out, "myapp").unwrap();
        assert!(session.output_dir().exists());
        session.recorder().lock().unwrap().record("fs", "exists", json!({}), json!(true));

        let path = session.finish().unwrap();
        assert_eq!(path, out.join(SESSION_CASSETTE));
        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.app_name, "myapp");
        assert!(cassette.name.ends_with("-myapp"));
        assert_eq!(cassette.interactions.len(), 1);
    }

    #[test]
    fn finish_fails_while_a_handle_is_alive() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(dir.path(), "myapp").unwrap();
        let _handle = session.recorder();

        assert!(session.finish().is_err());
    }
}
