//! Error types for wordscout.
//!
//! The matching core never fails: filtering, automaton construction and `find`
//! are total over their inputs, and degenerate inputs (empty text, empty word
//! list) simply produce empty results. Errors only arise at the edges, when a
//! dictionary is read from disk or a configuration file is loaded.
//!
//! ```rust,ignore
//! match Dictionary::load(path) {
//!     Ok(dictionary) => // Build a searcher,
//!     Err(SearchError::FileNotFound(path)) => // Handle missing word list,
//!     Err(e) => // Handle other errors
//! }
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for fallible wordscout operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while loading dictionaries or configuration
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid UTF-8 in dictionary {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl SearchError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }

    /// Maps an IO error raised while opening `path` onto the matching variant.
    pub(crate) fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::IoError(err),
        }
    }
}
