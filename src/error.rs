//! Error types for faltex
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for faltex operations
pub type FaltexResult<T> = Result<T, FaltexError>;

/// Coarse classification of a [`FaltexError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Resolution,
    Archive,
    Layout,
    Parse,
    Io,
    Interrupted,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Resolution => "resolution",
            ErrorKind::Archive => "archive",
            ErrorKind::Layout => "layout",
            ErrorKind::Parse => "parse",
            ErrorKind::Io => "io",
            ErrorKind::Interrupted => "interrupted",
        }
    }
}

/// Main error type for faltex operations
#[derive(Error, Debug)]
pub enum FaltexError {
    /// Request or transfer failure, including non-success HTTP status
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The release has no asset matching the desktop archive pattern
    #[error("no release asset matching '{keyword}' and ending in '{extension}' in release {version}")]
    Resolution {
        version: String,
        keyword: String,
        extension: String,
    },

    /// Corrupt archive or unexpected archive shape
    #[error("archive error in {path}: {message}")]
    Archive { path: PathBuf, message: String },

    /// Expected directory or file missing from the extracted tree
    #[error("expected {what} not found at {path}")]
    Layout { what: String, path: PathBuf },

    /// Two font files reduce to the same space-stripped name
    #[error("font files '{first}' and '{second}' both normalize to '{renamed}'")]
    FontNameCollision {
        first: String,
        second: String,
        renamed: String,
    },

    /// Malformed manifest or configuration
    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Run stopped by the user (Ctrl+C)
    #[error("interrupted by user")]
    Interrupted,
}

impl FaltexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FaltexError::Network { .. } => ErrorKind::Network,
            FaltexError::Resolution { .. } => ErrorKind::Resolution,
            FaltexError::Archive { .. } => ErrorKind::Archive,
            FaltexError::Layout { .. } | FaltexError::FontNameCollision { .. } => {
                ErrorKind::Layout
            }
            FaltexError::Parse { .. } => ErrorKind::Parse,
            FaltexError::Io(_) => ErrorKind::Io,
            FaltexError::Interrupted => ErrorKind::Interrupted,
        }
    }

    pub(crate) fn network(url: &str, message: impl std::fmt::Display) -> Self {
        FaltexError::Network {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn archive(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        FaltexError::Archive {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn layout(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        FaltexError::Layout {
            what: what.into(),
            path: path.into(),
        }
    }

    pub(crate) fn parse(file: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        FaltexError::Parse {
            file: file.into(),
            message: message.to_string(),
        }
    }
}
