// crates/truncate_at_marker/src/config.rs

use std::path::PathBuf;

use trim_marker::{SUBSCRIPTIONS_MARKER, SUBSCRIPTIONS_PAGE_PATH};

use crate::{preview_truncation, truncate_at_marker, Outcome, TruncateError};

/// The two values a truncation needs: which file, and where to cut it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruncateConfig {
    pub file_path: PathBuf,
    pub marker: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(SUBSCRIPTIONS_PAGE_PATH),
            marker: SUBSCRIPTIONS_MARKER.to_string(),
        }
    }
}

impl TruncateConfig {
    /// Builds a config, falling back to the defaults for any value not given.
    pub fn new(file_path: Option<PathBuf>, marker: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            file_path: file_path.unwrap_or(defaults.file_path),
            marker: marker.unwrap_or(defaults.marker),
        }
    }

    pub fn truncate(&self) -> Result<Outcome, TruncateError> {
        truncate_at_marker(&self.file_path, &self.marker)
    }

    pub fn preview(&self) -> Result<String, TruncateError> {
        preview_truncation(&self.file_path, &self.marker)
    }
}
