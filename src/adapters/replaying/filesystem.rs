//! Replaying adapter for the `FileSystem` port.

use std::path::Path;

use super::{next_output, replay_result, replay_value, SharedReplayer};
use crate::ports::{FileSystem, PortError};

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: SharedReplayer,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a shared cassette replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl FileSystem for ReplayingFileSystem {
    /// A missing or malformed recording reads as "absent".
    fn exists(&self, _path: &Path) -> bool {
        next_output(&self.replayer, "fs", "exists")
            .and_then(|output| replay_value(output, "fs::exists"))
            .unwrap_or(false)
    }

    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        let output = next_output(&self.replayer, "fs", "read_to_string")?;
        replay_result(output, "fs::read_to_string")
    }

    fn write_private(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        let output = next_output(&self.replayer, "fs", "write_private")?;
        replay_result(output, "fs::write_private")
    }
}
