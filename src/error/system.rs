//! Filesystem and environment failures, from session persistence and
//! configuration loading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SystemError {
    #[error("File not found: '{}'", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Permission denied: {operation} '{}'", .path.display())]
    PermissionDenied { path: PathBuf, operation: String },

    #[error("I/O error during {operation}{}: {message}", at(.path))]
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// A variable is set but its value is unusable.
    #[error("Environment variable '{variable}': {message}")]
    EnvironmentError { variable: String, message: String },
}

fn at(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p| format!(" on '{}'", p.display()))
        .unwrap_or_default()
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound { .. } | Self::EnvironmentError { .. } => self.to_string(),
            Self::PermissionDenied { path, operation } => {
                format!("Permission denied: Cannot {operation} '{}'.", path.display())
            }
            Self::IoError {
                operation, path, ..
            } => format!("Failed to {operation}{}", quoted(path.as_deref())),
            Self::NoHomeDirectory => "Could not determine your home directory. Please check your environment configuration.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            Self::PermissionDenied { .. } => "E_SYS_PERM",
            Self::IoError { .. } => "E_SYS_IO",
            Self::NoHomeDirectory => "E_SYS_NO_HOME",
            Self::EnvironmentError { .. } => "E_SYS_ENV",
        }
    }
}

fn quoted(path: Option<&Path>) -> String {
    path.map(|p| format!(" '{}'", p.display())).unwrap_or_default()
}

/// Map an I/O error to a [`SystemError`]. Not-found and permission errors
/// only get their own variants when the path is known.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
