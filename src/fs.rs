//! Filesystem helpers.

use crate::error::UpdateError;
use std::io::ErrorKind;
use std::path::Path;

/// Removes `path` and everything below it. A missing path is not an error.
pub fn remove_recursive(path: &Path) -> Result<(), UpdateError> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(filesystem_error(path, e)),
    };

    let result = if metadata.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(filesystem_error(path, e)),
    }
}

fn filesystem_error(path: &Path, source: std::io::Error) -> UpdateError {
    UpdateError::Filesystem {
        path: path.to_path_buf(),
        source,
    }
}
