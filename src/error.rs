//! Error types for pattern compilation and directory scanning.

use thiserror::Error;

/// Errors raised while compiling patterns or scanning a directory tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A pattern string could not be compiled.
    ///
    /// Raised at configuration time, before any traversal begins. In
    /// practice this means a malformed `%regex[...]` expression; Ant-glob
    /// patterns always compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The source pattern that failed to compile.
        pattern: String,
        /// Description of the compile failure.
        message: String,
    },

    /// The scan base directory does not exist.
    #[error("Base directory does not exist: {path}")]
    BasedirMissing {
        /// The configured base directory.
        path: String,
    },

    /// The scan base directory exists but is not a directory.
    #[error("Base directory is not a directory: {path}")]
    BasedirNotDirectory {
        /// The configured base directory.
        path: String,
    },

    /// IO error while inspecting a path.
    #[error("IO error at {path}: {source}")]
    IoError {
        /// Path where the error occurred.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an IoError from std::io::Error.
    ///
    /// # Arguments
    /// * `path` - Path where the error occurred
    /// * `err` - The underlying IO error
    pub fn from_io(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source: err,
        }
    }
}
