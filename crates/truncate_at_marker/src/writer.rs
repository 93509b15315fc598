// crates/truncate_at_marker/src/writer.rs

use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the file at `path` with `contents`.
///
/// The new content goes to a temporary file in the same directory, which is
/// synced and then renamed over the target. The temporary file is removed if
/// any step fails. Symlinks are followed, so the file a link points to is
/// replaced and the link stays a link. An existing target keeps its
/// permissions, and must be openable for writing, as a direct overwrite
/// would require.
pub fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => return Err(err),
    };
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let existing_permissions = match OpenOptions::new().write(true).open(&target) {
        Ok(file) => Some(file.metadata()?.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(err),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    if let Some(permissions) = existing_permissions {
        fs::set_permissions(tmp.path(), permissions)?;
    }
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target)?;

    log::debug!("Replaced {} ({} bytes)", target.display(), contents.len());
    Ok(())
}
