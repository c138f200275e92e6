//! Symbolic-link queries used by the scanner and exposed to callers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Check whether the named entry under `parent_dir` is itself a symbolic link.
///
/// Inspects the entry without following it, so a symlink to a directory or
/// to a missing target still reports `true`.
///
/// # Arguments
/// * `parent_dir` - Directory containing the entry
/// * `name` - Entry name within `parent_dir`
///
/// # Errors
/// Returns an IO error if the entry cannot be inspected (e.g. it does not
/// exist).
pub fn is_symbolic_link(parent_dir: &Path, name: &str) -> Result<bool, ScanError> {
    let path: PathBuf = parent_dir.join(name);
    let metadata: fs::Metadata = fs::symlink_metadata(&path)
        .map_err(|e: std::io::Error| ScanError::from_io(path.display().to_string(), e))?;
    Ok(metadata.file_type().is_symlink())
}

/// Check whether the named entry's parent directory is reached through a
/// symbolic link.
///
/// Walks `parent_dir` and its lexical ancestors, reporting `true` if any
/// component is itself a symlink. An entry inside such a directory is only
/// visible because some ancestor was a followed symlink; the entry name
/// identifies what is being asked about but does not affect the answer.
/// Components that cannot be inspected are treated as regular.
///
/// # Arguments
/// * `parent_dir` - Directory whose ancestry to inspect
/// * `_name` - Entry name within `parent_dir`
pub fn is_parent_symbolic_link(parent_dir: &Path, _name: &str) -> bool {
    for ancestor in parent_dir.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        if let Ok(metadata) = fs::symlink_metadata(ancestor) {
            if metadata.file_type().is_symlink() {
                return true;
            }
        }
    }
    false
}
