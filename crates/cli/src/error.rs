// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Replacer error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rule list did not alternate old/new cleanly.
    #[error("odd argument count: {count} (rules must be old/new pairs)")]
    OddArgumentCount { count: usize },

    /// Rule file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using replacer Error
pub type Result<T> = std::result::Result<T, Error>;

/// A sink rejected a write during streaming emission.
///
/// `written` counts the bytes the sink accepted before it failed, including
/// any partial write of the failing fragment.
#[derive(Debug, thiserror::Error)]
#[error("sink write failed after {written} bytes: {source}")]
pub struct WriteError {
    pub written: usize,
    #[source]
    pub source: std::io::Error,
}

impl WriteError {
    /// The underlying sink error.
    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }
}

/// Exit codes for the replacer binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Input fully replaced and written
    Success = 0,
    /// Configuration or argument error
    ConfigError = 2,
    /// I/O or internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::OddArgumentCount { .. } | Error::Config { .. } | Error::Argument(_) => {
                ExitCode::ConfigError
            }
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
