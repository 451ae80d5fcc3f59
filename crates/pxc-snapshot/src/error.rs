//! Error types for snapshot loading.

use std::path::PathBuf;

/// Errors that can occur while loading a snapshot file.
///
/// Every variant carries the path it failed on; the report contract requires
/// error messages to name the specific file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened or read.
    #[error("could not read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file was read but is not a well-formed document.
    #[error("malformed snapshot {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for snapshot results.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
