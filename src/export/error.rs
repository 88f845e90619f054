//! Export error types

use std::path::PathBuf;
use thiserror::Error;

/// Failure while producing or saving the submissions document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not package document: {0}")]
    Package(String),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_path() {
        let err = ExportError::Write {
            path: PathBuf::from("/tmp/out/All_Submissions.docx"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/out/All_Submissions.docx"));
        assert!(text.contains("denied"));
    }
}
