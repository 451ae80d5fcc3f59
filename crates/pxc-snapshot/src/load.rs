//! Loading a snapshot file into a generic document tree.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{SnapshotError, SnapshotResult};

/// Read and parse a snapshot file.
///
/// The whole file is read into memory and the handle closed before parsing
/// begins; nothing is streamed. Both failure modes carry `path` so the
/// caller's error message names the file.
pub fn load_snapshot(path: &Path) -> SnapshotResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = serde_json::from_str(&text).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loaded snapshot {}", path.display());
    Ok(doc)
}
