//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while producing a report download.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("a report export is already running")]
    AlreadyRunning,
    #[error("failed to render report: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
