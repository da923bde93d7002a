use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::error::ExportError;

/// Where a finished report goes once it has been rendered.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Hand the rendered file to the user and return where it ended up.
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError>;
}

/// Saves reports into a downloads directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct DownloadDirSink {
    dir: PathBuf,
}

impl DownloadDirSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ReportSink for DownloadDirSink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, &bytes).await?;
        debug!(event = "services.sink.written", path = %path.display(), bytes = bytes.len());
        Ok(path)
    }
}

/// A report captured by `InMemorySink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Keeps delivered reports in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    delivered: Mutex<Vec<DeliveredReport>>,
}

impl InMemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delivered(&self) -> Vec<DeliveredReport> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReportSink for InMemorySink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DeliveredReport {
                file_name: file_name.to_string(),
                bytes,
            });
        Ok(PathBuf::from(file_name))
    }
}
