// crates/truncate_at_marker/src/lib.rs

//! Truncates a text file right after the first occurrence of a marker,
//! keeping the marker, trimming trailing whitespace and ending the file with
//! exactly one newline.

use std::fs;
use std::path::Path;

pub mod config;
pub mod cut;
pub mod error;
pub mod writer;

pub use config::TruncateConfig;
pub use cut::{find_cut_index, normalize_newlines, truncate_content};
use cut::cut_at;
pub use error::TruncateError;
pub use trim_marker::{SUBSCRIPTIONS_MARKER, SUBSCRIPTIONS_PAGE_PATH};
pub use writer::write_atomically;

/// What a successful truncation did to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Byte offset just past the first marker occurrence, counted in the
    /// content after line endings are translated to `\n`.
    pub cut_index: usize,
    pub original_len: usize,
    pub truncated_len: usize,
    /// `false` when the file was already truncated and normalized, in which
    /// case nothing was written.
    pub changed: bool,
}

/// Truncates the file at `file_path` after the first occurrence of `marker`.
///
/// Line endings are read as universal newlines, so `\r\n` and lone `\r`
/// become `\n` in the written result. The file is only written when the
/// marker is found. If the marker is
/// missing the file is left byte‑identical and
/// [`TruncateError::MarkerNotFound`] is returned.
///
/// # Arguments
///
/// * `file_path` - An existing, readable and writable UTF‑8 text file.
/// * `marker` - Non‑empty literal text expected verbatim in the file.
pub fn truncate_at_marker<P: AsRef<Path>>(file_path: P, marker: &str) -> Result<Outcome, TruncateError> {
    let path = file_path.as_ref();
    let (content, truncated, cut_index) = load_and_cut(path, marker)?;

    let changed = truncated != content;
    if changed {
        write_atomically(path, &truncated).map_err(|source| TruncateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        log::debug!("{} is already truncated; skipping write", path.display());
    }

    Ok(Outcome {
        cut_index,
        original_len: content.len(),
        truncated_len: truncated.len(),
        changed,
    })
}

/// Computes what [`truncate_at_marker`] would write, without touching the file.
pub fn preview_truncation<P: AsRef<Path>>(file_path: P, marker: &str) -> Result<String, TruncateError> {
    let (_, truncated, _) = load_and_cut(file_path.as_ref(), marker)?;
    Ok(truncated)
}

// === Private Implementation === //

fn load_and_cut(path: &Path, marker: &str) -> Result<(String, String, usize), TruncateError> {
    if marker.is_empty() {
        return Err(TruncateError::EmptyMarker);
    }

    let content = fs::read_to_string(path).map_err(|source| TruncateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = normalize_newlines(&content);
    let cut_index = find_cut_index(&text, marker).ok_or_else(|| TruncateError::MarkerNotFound {
        marker: marker.to_string(),
        path: path.to_path_buf(),
    })?;

    let truncated = cut_at(&text, cut_index);

    log::debug!(
        "Marker found in {}: cutting at byte {} of {} ({} bytes kept)",
        path.display(),
        cut_index,
        content.len(),
        truncated.len()
    );

    Ok((content, truncated, cut_index))
}
