use std::io;
use std::path::PathBuf;

/// Errors that can occur while preparing a cratecheck run.
///
/// Check failures are never reported through this type; they are recorded
/// as data in [`crate::RunState`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Project directory not found: {}", .0.display())]
    ProjectError(PathBuf),
}

/// Result type alias for cratecheck operations
pub type Result<T> = std::result::Result<T, Error>;
