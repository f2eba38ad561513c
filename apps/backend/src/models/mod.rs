//! API request and response types

use std::fmt;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::{ImportReport, Problem, ProblemType, QuizOption};

/// File name used when an import request does not name its document.
pub const DEFAULT_FILE_NAME: &str = "untitled.md";

/// Timestamp format of the problem table.
pub const TABLE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Markdown document sent as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    pub content: String,
}

impl ImportRequest {
    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }
}

/// Query parameters of a raw upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadParams {
    pub name: String,
}

/// Extracted problems with the import notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub file_name: String,
    pub message: String,
    pub problems: Vec<Problem>,
}

impl From<ImportReport> for ImportResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            message: report.notice().to_string(),
            file_name: report.file_name,
            problems: report.problems,
        }
    }
}

/// One row of the problem table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRow {
    pub id: usize,
    pub type_label: String,
    pub created_at: String,
    pub title: String,
    pub options: Vec<String>,
    pub answer: String,
    pub hint: String,
}

impl ProblemRow {
    /// Build a row rendering `created_at` in the given time zone.
    pub fn in_time_zone<Tz>(problem: &Problem, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            id: problem.id,
            type_label: problem.kind.label().to_string(),
            created_at: problem
                .created_at
                .with_timezone(tz)
                .format(TABLE_TIME_FORMAT)
                .to_string(),
            title: problem.title.clone(),
            options: problem.options.iter().map(ToString::to_string).collect(),
            answer: problem.answer.clone(),
            hint: problem.hint.clone(),
        }
    }
}

impl From<&Problem> for ProblemRow {
    fn from(problem: &Problem) -> Self {
        Self::in_time_zone(problem, &Local)
    }
}

/// Problem table for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResponse {
    pub file_name: String,
    pub message: String,
    pub rows: Vec<ProblemRow>,
}

impl From<ImportReport> for TableResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            message: report.notice().to_string(),
            rows: report.problems.iter().map(ProblemRow::from).collect(),
            file_name: report.file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn select_problem() -> Problem {
        Problem {
            id: 4,
            key: 3,
            kind: ProblemType::Select,
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
            title: "Capital of France?".to_string(),
            options: vec![QuizOption::new(1, "Paris"), QuizOption::new(2, "London")],
            answer: String::new(),
            hint: "Paris.".to_string(),
        }
    }

    #[test]
    fn test_row_from_problem() {
        let row = ProblemRow::in_time_zone(&select_problem(), &Utc);
        assert_eq!(
            row,
            ProblemRow {
                id: 4,
                type_label: "选择".to_string(),
                created_at: "2024/03/09 14:05:07".to_string(),
                title: "Capital of France?".to_string(),
                options: vec!["1. Paris".to_string(), "2. London".to_string()],
                answer: String::new(),
                hint: "Paris.".to_string(),
            }
        );
    }

    #[test]
    fn test_request_default_file_name() {
        let request: ImportRequest = serde_json::from_str(r#"{"content": ""}"#).unwrap();
        assert_eq!(request.file_name(), DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_response_message_for_empty_report() {
        let response = ImportResponse::from(ImportReport {
            file_name: "notes.md".to_string(),
            problems: vec![],
        });
        assert_eq!(response.message, "未检测到题目");
    }

    #[test]
    fn test_table_response_message() {
        let response = TableResponse::from(ImportReport {
            file_name: "quiz.md".to_string(),
            problems: vec![select_problem()],
        });
        assert_eq!(response.message, "quiz.md 导入成功");
        assert_eq!(response.rows[0].type_label, "选择");
    }
}
