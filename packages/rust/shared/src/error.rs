//! Error types for confkit.
//!
//! Library crates use [`ConfkitError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all confkit operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfkitError {
    /// Configuration or catalog loading/validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Timestamp, subtitle, or record parsing error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A talk source could not be read. The orchestrator catches this
    /// and degrades the affected event to an empty talk list.
    #[error("talk source unavailable at {path:?}: {message}")]
    TalkSource { path: PathBuf, message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (bad date, inconsistent catalog, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ConfkitError>;

impl ConfkitError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Create a talk-source error carrying the offending path.
    pub fn talk_source(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::TalkSource {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = ConfkitError::config("missing base_path");
        assert_eq!(err.to_string(), "config error: missing base_path");

        let err = ConfkitError::parse("timestamp has 2 components, expected 3");
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn talk_source_error_carries_path() {
        let err = ConfkitError::talk_source("/data/talks/cloudnative2024.json", "no such file");
        let text = err.to_string();
        assert!(text.contains("cloudnative2024.json"));
        assert!(text.contains("no such file"));
    }
}
