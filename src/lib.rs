//! Ant-style glob pattern matching and pruned directory scanning.
//!
//! This crate provides:
//! - `MatchPattern` / `MatchPatterns` - compiled include/exclude patterns
//!   with `*`, `?` and `**` wildcards, plus `%ant[...]` and `%regex[...]`
//!   syntax markers
//! - `DEFAULT_EXCLUDES` - the always-available VCS/editor artifact excludes
//! - `DirectoryScanner` - symlink-aware recursive traversal that prunes
//!   subtrees which cannot contribute a match
//! - `file_names()` / `directory_names()` - string-configured listing
//!
//! Matching is separator-agnostic (`/` and `\` are equivalent in patterns
//! and candidate paths); reported paths use the host platform's separator
//! and are relative to the scanned base directory.
//!
//! # Example
//!
//! ```no_run
//! use antscan::{DirectoryScanner, ScanOptions};
//!
//! let options = ScanOptions {
//!     basedir: "/some/project".into(),
//!     includes: vec!["**/*.rs".to_string()],
//!     excludes: vec!["target/".to_string()],
//!     ..Default::default()
//! };
//! let result = DirectoryScanner::new(options)?.scan()?;
//! for file in &result.included_files {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), antscan::ScanError>(())
//! ```

pub mod default_excludes;
pub mod error;
pub mod list;
pub mod pattern;
pub mod pattern_set;
pub mod scanner;
pub mod symlink;
pub mod wildcard;

// Re-export main types at the crate root
pub use default_excludes::DEFAULT_EXCLUDES;
pub use error::ScanError;
pub use list::{directory_names, file_and_directory_names, file_names};
pub use pattern::{
    tokenize, MatchPattern, ANT_HANDLER_PREFIX, PATTERN_HANDLER_SUFFIX, REGEX_HANDLER_PREFIX,
};
pub use pattern_set::{split_pattern_list, MatchPatterns};
pub use scanner::{DirectoryScanner, ScanOptions, ScanResult};
pub use symlink::{is_parent_symbolic_link, is_symbolic_link};
