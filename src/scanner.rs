//! Directory tree scanning with include/exclude pattern sets.
//!
//! The scanner walks a base directory recursively, classifying every file
//! and directory against compiled include/exclude patterns, pruning subtrees
//! that cannot contribute a match, and applying symbolic-link policy.

use std::fs;
use std::path::{Path, PathBuf};

use crate::default_excludes::DEFAULT_EXCLUDES;
use crate::error::ScanError;
use crate::pattern_set::MatchPatterns;

/// Options for a directory scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Base directory to scan from.
    pub basedir: PathBuf,
    /// Include patterns (empty = include everything).
    pub includes: Vec<String>,
    /// Exclude patterns; an exclude always overrides an include.
    pub excludes: Vec<String>,
    /// Whether to merge the default VCS/editor-artifact excludes.
    pub use_default_excludes: bool,
    /// Whether pattern matching respects character case.
    pub case_sensitive: bool,
    /// Whether to recurse into symlinked directories.
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            basedir: PathBuf::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
            use_default_excludes: true,
            case_sensitive: true,
            follow_symlinks: true,
        }
    }
}

/// Result of a completed scan.
///
/// Every path is relative to the base directory, in the host platform's
/// separator; the base directory itself appears as the empty path. Each list
/// is sorted and deduplicated before the result is returned, and the result
/// is never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Files matched by an include and no exclude.
    pub included_files: Vec<PathBuf>,
    /// Directories matched by an include and no exclude.
    pub included_directories: Vec<PathBuf>,
    /// Files visited but not included.
    pub excluded_files: Vec<PathBuf>,
    /// Directories visited but not included.
    pub excluded_directories: Vec<PathBuf>,
    /// Symlinks that were not followed because `follow_symlinks` was off.
    pub not_followed_symlinks: Vec<PathBuf>,
}

impl ScanResult {
    /// Sort and deduplicate all path lists.
    fn finalize(&mut self) {
        for list in [
            &mut self.included_files,
            &mut self.included_directories,
            &mut self.excluded_files,
            &mut self.excluded_directories,
            &mut self.not_followed_symlinks,
        ] {
            list.sort();
            list.dedup();
        }
    }
}

/// Recursive directory scanner with compiled pattern sets.
///
/// Pattern compilation happens once in [`new`](Self::new); the scanner is
/// read-only afterwards and [`scan`](Self::scan) builds a fresh
/// [`ScanResult`] on every invocation, so repeated scans never see stale
/// state and separate scanner instances can run on separate threads.
#[derive(Debug)]
pub struct DirectoryScanner {
    basedir: PathBuf,
    includes: MatchPatterns,
    excludes: MatchPatterns,
    case_sensitive: bool,
    follow_symlinks: bool,
}

impl DirectoryScanner {
    /// Compile scan options into a scanner.
    ///
    /// Blank pattern strings are dropped, like blank tokens in a
    /// comma-separated list. An include list that is empty (or blank) after
    /// that means "include everything" and is compiled as `["**"]`. When
    /// `use_default_excludes` is set, the default exclude table is appended
    /// to the user excludes before compilation, so it participates in
    /// matching and pruning identically to them.
    ///
    /// # Errors
    /// Returns `ScanError::InvalidPattern` on the first pattern that fails
    /// to compile; no partially-built scanner is produced.
    pub fn new(options: ScanOptions) -> Result<Self, ScanError> {
        let mut include_sources: Vec<String> = options.includes;
        include_sources.retain(|s: &String| !s.trim().is_empty());
        if include_sources.is_empty() {
            include_sources.push("**".to_string());
        }

        let mut exclude_sources: Vec<String> = options.excludes;
        if options.use_default_excludes {
            exclude_sources.extend(DEFAULT_EXCLUDES.iter().map(|s: &&str| s.to_string()));
        }

        Ok(Self {
            basedir: options.basedir,
            includes: MatchPatterns::from(include_sources)?,
            excludes: MatchPatterns::from(exclude_sources)?,
            case_sensitive: options.case_sensitive,
            follow_symlinks: options.follow_symlinks,
        })
    }

    /// The configured base directory.
    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    /// Source strings of the compiled include patterns.
    pub fn include_sources(&self) -> Vec<&str> {
        self.includes.sources()
    }

    /// Source strings of the compiled exclude patterns (default excludes
    /// included when they were enabled).
    pub fn exclude_sources(&self) -> Vec<&str> {
        self.excludes.sources()
    }

    /// Scan the tree under the base directory.
    ///
    /// Runs synchronously to completion on the calling thread. Directories
    /// whose entries cannot be listed are treated as empty and reported via
    /// `log::warn!`; results collected from sibling subtrees are preserved.
    ///
    /// # Returns
    /// The classified relative paths, sorted and deduplicated.
    ///
    /// # Errors
    /// Returns a fatal error before traversal if the base directory does not
    /// exist or is not a directory.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let metadata: fs::Metadata = fs::metadata(&self.basedir).map_err(|e: std::io::Error| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::BasedirMissing {
                    path: self.basedir.display().to_string(),
                }
            } else {
                ScanError::from_io(self.basedir.display().to_string(), e)
            }
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::BasedirNotDirectory {
                path: self.basedir.display().to_string(),
            });
        }

        let mut result: ScanResult = ScanResult::default();
        let mut segments: Vec<String> = Vec::new();

        // The base directory itself is classified by the same rule as any
        // other directory, under the empty relative path.
        self.classify_directory(&segments, &mut result);
        if self.should_descend(&segments) {
            self.scan_dir(&self.basedir, &mut segments, &mut result);
        }

        result.finalize();
        Ok(result)
    }

    /// Does some include pattern match this relative path?
    fn is_included(&self, tokens: &[&str]) -> bool {
        self.includes.matches_tokens(tokens, self.case_sensitive)
    }

    /// Does some exclude pattern match this relative path?
    fn is_excluded(&self, tokens: &[&str]) -> bool {
        self.excludes.matches_tokens(tokens, self.case_sensitive)
    }

    /// Could this directory still hold an included descendant?
    fn could_hold_included(&self, tokens: &[&str]) -> bool {
        self.includes.could_match_tokens(tokens, self.case_sensitive)
    }

    /// Recurse into a directory iff its descendants could still match an
    /// include and the directory itself is not excluded. Exclusion blocks
    /// descent outright: nothing inside an excluded directory is visited.
    fn should_descend(&self, segments: &[String]) -> bool {
        let tokens: Vec<&str> = as_tokens(segments);
        self.could_hold_included(&tokens) && !self.is_excluded(&tokens)
    }

    fn classify_directory(&self, segments: &[String], result: &mut ScanResult) {
        let tokens: Vec<&str> = as_tokens(segments);
        if self.is_included(&tokens) && !self.is_excluded(&tokens) {
            result.included_directories.push(relative_path(segments));
        } else {
            result.excluded_directories.push(relative_path(segments));
        }
    }

    fn classify_file(&self, segments: &[String], result: &mut ScanResult) {
        let tokens: Vec<&str> = as_tokens(segments);
        if self.is_included(&tokens) && !self.is_excluded(&tokens) {
            result.included_files.push(relative_path(segments));
        } else {
            result.excluded_files.push(relative_path(segments));
        }
    }

    /// List and classify the entries of one directory, recursing into
    /// subdirectories that pass [`should_descend`](Self::should_descend).
    ///
    /// `segments` holds the relative path of `dir` and is restored before
    /// returning. Listing failures and entries that vanish mid-scan are
    /// non-fatal: the directory contributes nothing and the scan continues.
    fn scan_dir(&self, dir: &Path, segments: &mut Vec<String>, result: &mut ScanResult) {
        let entries: fs::ReadDir = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Cannot list directory {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries {
            let entry: fs::DirEntry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Cannot read entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let file_type: fs::FileType = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    log::warn!("Cannot stat {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            let is_symlink: bool = file_type.is_symlink();
            // A symlink is classified by what it points at; a broken link
            // counts as a file.
            let is_dir: bool = if is_symlink {
                fs::metadata(entry.path())
                    .map(|m: fs::Metadata| m.is_dir())
                    .unwrap_or(false)
            } else {
                file_type.is_dir()
            };

            let name: String = entry.file_name().to_string_lossy().into_owned();
            segments.push(name);

            if is_dir {
                self.classify_directory(segments, result);
                if is_symlink && !self.follow_symlinks {
                    // Still classified above, but its contents stay invisible.
                    result.not_followed_symlinks.push(relative_path(segments));
                } else if self.should_descend(segments) {
                    self.scan_dir(&entry.path(), segments, result);
                }
            } else {
                if is_symlink && !self.follow_symlinks {
                    result.not_followed_symlinks.push(relative_path(segments));
                }
                self.classify_file(segments, result);
            }

            segments.pop();
        }
    }
}

fn as_tokens(segments: &[String]) -> Vec<&str> {
    segments.iter().map(String::as_str).collect()
}

/// Build a relative path in the host separator; zero segments yield the
/// empty path, denoting the base directory.
fn relative_path(segments: &[String]) -> PathBuf {
    segments.iter().collect()
}
