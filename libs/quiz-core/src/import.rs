//! Document import boundary.
//!
//! Reads a markdown document, runs extraction and classifies the outcome the
//! way the problem table reports it: imported, nothing found, or failed.
//! Finding no problems is a benign outcome, not an error.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::clock::Clock;
use crate::error::{ImportError, Result};
use crate::types::Problem;
use crate::extract_with_clock;

/// Accepted document extension.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Outcome message for one import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportNotice {
    Imported { file_name: String },
    NoProblems,
    Failed { file_name: String },
}

impl ImportNotice {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for ImportNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imported { file_name } => write!(f, "{file_name} 导入成功"),
            Self::NoProblems => f.write_str("未检测到题目"),
            Self::Failed { file_name } => write!(f, "{file_name} 导入失败"),
        }
    }
}

/// Problems extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub file_name: String,
    pub problems: Vec<Problem>,
}

impl ImportReport {
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn notice(&self) -> ImportNotice {
        if self.is_empty() {
            ImportNotice::NoProblems
        } else {
            ImportNotice::Imported {
                file_name: self.file_name.clone(),
            }
        }
    }
}

/// Reject names without the markdown extension.
pub fn ensure_markdown_name(file_name: &str) -> Result<()> {
    let is_markdown = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION));
    if is_markdown {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFile {
            file_name: file_name.to_string(),
        })
    }
}

/// Import an in-memory document.
pub fn import_str(file_name: &str, content: &str, clock: &dyn Clock) -> ImportReport {
    ImportReport {
        file_name: file_name.to_string(),
        problems: extract_with_clock(content, clock),
    }
}

/// Import uploaded bytes, which must be UTF-8.
pub fn import_bytes(file_name: &str, bytes: &[u8], clock: &dyn Clock) -> Result<ImportReport> {
    let content = std::str::from_utf8(bytes).map_err(|_| ImportError::InvalidEncoding {
        file_name: file_name.to_string(),
    })?;
    Ok(import_str(file_name, content, clock))
}

/// Import a markdown file from disk.
pub fn import_file(path: &Path, clock: &dyn Clock) -> Result<ImportReport> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    ensure_markdown_name(&file_name)?;

    let bytes = fs::read(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read markdown document");

    import_bytes(&file_name, &bytes, clock)
}
