//! Error types for the browser core
//!
//! Every fallible browser operation returns [`BrowserError`]. Failed operations
//! never leave the browser partially updated.

use std::io;
use std::path::PathBuf;

/// Error type for browser operations
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// The initial directory could not be accessed
    #[error("Startup error: {} does not exist or cannot be accessed: {source}", .path.display())]
    StartupFault {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No entry with this name in the current directory
    #[error("Not found: {name} does not exist in the current directory")]
    NotFound { name: String },

    /// The entry exists but is a file
    #[error("Not a directory: {name}")]
    NotADirectory { name: String },

    /// The entry was listed but failed the live access check
    #[error("Access denied: cannot access {}: {source}", .path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Already at the top of the filesystem
    #[error("Already at the root directory: {}", .path.display())]
    AtRoot { path: PathBuf },

    /// File content could not be read or written
    #[error("IO error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience Result type using BrowserError
pub type Result<T> = std::result::Result<T, BrowserError>;

impl BrowserError {
    /// Create a NotFound error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a NotADirectory error
    pub fn not_a_directory(name: impl Into<String>) -> Self {
        Self::NotADirectory { name: name.into() }
    }

    /// Create an Io error for a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for both "no such entry" and "entry is not a directory"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotADirectory { .. })
    }
}
