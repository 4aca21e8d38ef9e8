//! Filesystem port for the identifier file.

use std::path::Path;

use super::PortError;

/// Provides the filesystem access the registrar needs.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Writes `contents` to `path`, readable only by the owning user.
    ///
    /// Missing parent directories are created with owner-only permissions.
    /// An existing file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    fn write_private(&self, path: &Path, contents: &str) -> Result<(), PortError>;
}
