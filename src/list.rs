//! String-configured file listing.
//!
//! Thin adapter over [`MatchPatterns`](crate::MatchPatterns) and
//! [`DirectoryScanner`](crate::DirectoryScanner) for callers that prefer
//! comma-separated pattern strings over programmatic configuration.

use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::pattern_set::split_pattern_list;
use crate::scanner::{DirectoryScanner, ScanOptions, ScanResult};

/// List files under `basedir` matching comma-separated pattern lists.
///
/// Whitespace and blank entries in the pattern strings are ignored; an empty
/// include string means "everything".
///
/// # Arguments
/// * `basedir` - Directory to scan
/// * `includes` - Comma-separated include patterns
/// * `excludes` - Comma-separated exclude patterns
/// * `use_default_excludes` - Whether to merge the default excludes
///
/// # Returns
/// Included file paths relative to `basedir`, sorted.
///
/// # Errors
/// Returns an error if a pattern fails to compile or `basedir` is not an
/// existing directory.
pub fn file_names(
    basedir: &Path,
    includes: &str,
    excludes: &str,
    use_default_excludes: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    let result: ScanResult = scan_lists(basedir, includes, excludes, use_default_excludes)?;
    Ok(result.included_files)
}

/// List directories under `basedir` matching comma-separated pattern lists.
///
/// Same contract as [`file_names`]; the base directory itself appears as the
/// empty path when it matches.
pub fn directory_names(
    basedir: &Path,
    includes: &str,
    excludes: &str,
    use_default_excludes: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    let result: ScanResult = scan_lists(basedir, includes, excludes, use_default_excludes)?;
    Ok(result.included_directories)
}

/// List files and directories, files first, each group sorted.
pub fn file_and_directory_names(
    basedir: &Path,
    includes: &str,
    excludes: &str,
    use_default_excludes: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    let mut result: ScanResult = scan_lists(basedir, includes, excludes, use_default_excludes)?;
    let mut names: Vec<PathBuf> = std::mem::take(&mut result.included_files);
    names.append(&mut result.included_directories);
    Ok(names)
}

fn scan_lists(
    basedir: &Path,
    includes: &str,
    excludes: &str,
    use_default_excludes: bool,
) -> Result<ScanResult, ScanError> {
    let options: ScanOptions = ScanOptions {
        basedir: basedir.to_path_buf(),
        includes: split_pattern_list(includes),
        excludes: split_pattern_list(excludes),
        use_default_excludes,
        ..Default::default()
    };
    DirectoryScanner::new(options)?.scan()
}
