//! Core types for quiz problems.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Problem type, inferred from whether the problem lists options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    /// Fill-in problem without options.
    Fill,
    /// Multiple-choice problem.
    Select,
}

impl Default for ProblemType {
    fn default() -> Self {
        Self::Fill
    }
}

impl ProblemType {
    /// `Select` iff there is at least one option.
    pub fn infer(options: &[QuizOption]) -> Self {
        if options.is_empty() {
            Self::Fill
        } else {
            Self::Select
        }
    }

    /// Get the type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fill => "FILL",
            Self::Select => "SELECT",
        }
    }

    /// Display label shown in the problem table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fill => "填空",
            Self::Select => "选择",
        }
    }
}

/// One choice of a multiple-choice problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// 1-based position rendered as a string.
    pub value: String,
    pub text: String,
}

impl QuizOption {
    /// Create the option at 1-based `ordinal`.
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            value: ordinal.to_string(),
            text: text.into(),
        }
    }
}

impl fmt::Display for QuizOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.value, self.text)
    }
}

/// Fields pulled out of one problem's tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemFields {
    pub title: String,
    pub answer: String,
    pub options: Vec<QuizOption>,
    pub hint: String,
}

/// A quiz problem extracted from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Boundary token index + 1.
    pub id: usize,
    /// Boundary token index.
    pub key: usize,
    #[serde(rename = "type")]
    pub kind: ProblemType,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub options: Vec<QuizOption>,
    pub answer: String,
    pub hint: String,
}
