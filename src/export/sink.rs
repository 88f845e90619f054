//! Download targets for exported documents

use super::error::ExportError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Hands finished document bytes to the user
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Offer `bytes` under `file_name`, returning where they ended up
    async fn offer(&self, bytes: Vec<u8>, file_name: &str) -> Result<PathBuf, ExportError>;
}

/// Writes downloads into a directory, replacing any earlier file
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DownloadSink for FileSink {
    async fn offer(&self, bytes: Vec<u8>, file_name: &str) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(file_name);
        let write_err = |source| ExportError::Write {
            path: path.clone(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(write_err)?;
        tokio::fs::write(&path, &bytes).await.map_err(write_err)?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Download written");
        Ok(path)
    }
}
