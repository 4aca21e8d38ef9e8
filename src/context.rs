//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::live::reporter::LiveReporter;
use crate::adapters::recording::{RecordingFileSystem, RecordingIdGenerator, RecordingReporter};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingIdGenerator, ReplayingReporter};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::{FileSystem, IdGenerator, Reporter};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// ID generator for installation identifiers.
    pub id_gen: Box<dyn IdGenerator>,
    /// Filesystem holding the identifier file.
    pub fs: Box<dyn FileSystem>,
    /// Reporter for the statistics endpoint.
    pub reporter: Box<dyn Reporter>,
}

impl ServiceContext {
    /// Creates a live context whose HTTP requests time out after `timeout`.
    #[must_use]
    pub fn live(timeout: Duration) -> Self {
        Self {
            id_gen: Box::new(LiveIdGenerator::new()),
            fs: Box::new(LiveFileSystem),
            reporter: Box::new(LiveReporter::new(timeout)),
        }
    }

    /// Creates a context with caller-supplied adapters.
    #[must_use]
    pub fn from_parts(
        id_gen: Box<dyn IdGenerator>,
        fs: Box<dyn FileSystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self { id_gen, fs, reporter }
    }

    /// Creates a live context that records every interaction into `dir`.
    ///
    /// The returned session must be finished after the context is dropped
    /// to write `dir/session.cassette.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created.
    pub fn recording_at(
        dir: impl Into<PathBuf>,
        app_name: &str,
        timeout: Duration,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(dir, app_name)?;
        let live = Self::live(timeout);

        let ctx = Self {
            id_gen: Box::new(RecordingIdGenerator::new(live.id_gen, session.recorder())),
            fs: Box::new(RecordingFileSystem::new(live.fs, session.recorder())),
            reporter: Box::new(RecordingReporter::new(live.reporter, session.recorder())),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// All ports share one replayer; each port/method pair is served from
    /// its own recorded sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Ok(Self::replaying_cassette(&Cassette::load(path)?))
    }

    /// Creates a replaying context from an in-memory cassette.
    #[must_use]
    pub fn replaying_cassette(cassette: &Cassette) -> Self {
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(cassette)));
        Self {
            id_gen: Box::new(ReplayingIdGenerator::new(Arc::clone(&replayer))),
            fs: Box::new(ReplayingFileSystem::new(Arc::clone(&replayer))),
            reporter: Box::new(ReplayingReporter::new(replayer)),
        }
    }
}
