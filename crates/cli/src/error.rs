// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Suffix appended to errors that indicate a broken internal invariant.
pub const BUG_REPORT_HINT: &str = "this might be a bug, please report it";

/// Stepdefs error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Feature file lies outside the project root or integration folder.
    #[error("{} is not inside {}", .path.display(), .boundary.display())]
    Containment { path: PathBuf, boundary: PathBuf },

    /// A single step definition template uses both placeholders.
    #[error("pattern cannot contain both [filepath] and [filepart], but got {pattern:?}")]
    Pattern { pattern: String },

    /// A resolved pattern could not be compiled into a glob matcher.
    #[error("invalid glob pattern {pattern:?}: {message}")]
    Glob { pattern: String, message: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walker error while expanding a pattern on disk.
    #[error("walk error: {message}")]
    Walk { message: String },

    /// Internal error (bug)
    #[error("{0} ({BUG_REPORT_HINT})")]
    Internal(String),
}

/// Result type using stepdefs Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Resolution completed
    Success = 0,
    /// Feature file could not be resolved against the configuration
    ResolveFailed = 1,
    /// Configuration or pattern error
    ConfigError = 2,
    /// Internal or I/O error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Containment { .. } => ExitCode::ResolveFailed,
            Error::Pattern { .. } | Error::Glob { .. } | Error::Config { .. } => {
                ExitCode::ConfigError
            }
            Error::Io { .. } | Error::Walk { .. } | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
