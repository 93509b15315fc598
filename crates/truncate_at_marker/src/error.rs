// crates/truncate_at_marker/src/error.rs

use std::io;
use std::path::PathBuf;

/// Failures surfaced by the truncation operations.
#[derive(Debug, thiserror::Error)]
pub enum TruncateError {
    /// The marker does not occur in the file; nothing was written.
    #[error("marker '{marker}' not found in {}", .path.display())]
    MarkerNotFound { marker: String, path: PathBuf },

    #[error("marker must not be empty")]
    EmptyMarker,

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

