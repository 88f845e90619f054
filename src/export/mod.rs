//! Submission export
//!
//! `document` lays submissions out as blocks, `docx` renders them into a
//! Word package and `sink` saves the result where the user can pick it up.

mod document;
mod docx;
mod error;
mod sink;

pub use document::EXPORT_FILE_NAME;
pub use docx::{DocumentBuilder, DocxBuilder};
pub use error::ExportError;
pub use sink::{DownloadSink, FileSink};

#[cfg(test)]
pub use docx::MockDocumentBuilder;
#[cfg(test)]
pub use sink::MockDownloadSink;

use crate::state::Submission;
use std::path::PathBuf;

/// Document builder paired with the place its output is offered
pub struct Exporter {
    builder: Box<dyn DocumentBuilder>,
    sink: Box<dyn DownloadSink>,
}

impl Exporter {
    pub fn new(builder: Box<dyn DocumentBuilder>, sink: Box<dyn DownloadSink>) -> Self {
        Self { builder, sink }
    }

    /// Word documents written into `dir`
    pub fn docx_to_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(DocxBuilder), Box::new(FileSink::new(dir)))
    }

    /// Build one document holding every submission and offer it for download
    pub async fn export(&self, submissions: &[Submission]) -> Result<PathBuf, ExportError> {
        let bytes = self.builder.build(submissions)?;
        tracing::debug!(
            submissions = submissions.len(),
            size = bytes.len(),
            "Document built"
        );
        self.sink.offer(bytes, EXPORT_FILE_NAME).await
    }
}
