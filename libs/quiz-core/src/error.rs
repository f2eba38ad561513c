//! Error types for quiz-core.

use std::path::PathBuf;
use thiserror::Error;

use crate::import::ImportNotice;

/// Result type alias using ImportError.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors at the document import boundary. Extraction itself never fails.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a markdown file: {file_name}")]
    UnsupportedFile { file_name: String },

    #[error("{file_name} is not valid UTF-8")]
    InvalidEncoding { file_name: String },
}

impl ImportError {
    /// Name of the document that failed to import.
    pub fn file_name(&self) -> String {
        match self {
            Self::Read { path, .. } => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::UnsupportedFile { file_name } | Self::InvalidEncoding { file_name } => {
                file_name.clone()
            }
        }
    }

    /// User-facing notice for this failure.
    pub fn notice(&self) -> ImportNotice {
        ImportNotice::Failed {
            file_name: self.file_name(),
        }
    }
}
