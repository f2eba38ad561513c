//! Core quiz library: turns authored markdown into quiz problems.
//!
//! Provides:
//! - Markdown tokenizer producing a flat block token stream
//! - Segmenter splitting the stream at level-3 headings
//! - Positional field extraction (title, answer, options, hint)
//! - Problem assembly with an injectable clock
//! - Import boundary for files and uploaded bytes
//!
//! # Format
//! ```markdown
//! ### What is the capital of France?
//!
//! 1. Paris
//! 2. London
//!
//! 解答
//!
//! Paris has been the capital since 987.
//! ```

pub mod assembler;
pub mod clock;
pub mod cursor;
pub mod error;
pub mod extractor;
pub mod import;
pub mod segmenter;
pub mod token;
pub mod tokenizer;
pub mod types;

pub use assembler::assemble;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ImportError, Result};
pub use extractor::extract_fields;
pub use import::{ensure_markdown_name, import_bytes, import_file, import_str, ImportNotice, ImportReport};
pub use segmenter::{find_split_points, segment, Segment};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
pub use types::{Problem, ProblemFields, ProblemType, QuizOption};

/// Heading depth that opens a problem.
pub const BOUNDARY_LEVEL: u8 = 3;

/// Inline text marking the explanation that follows.
pub const HINT_MARKER: &str = "解答";

/// Extract problems from a markdown document using the wall clock.
pub fn extract(content: &str) -> Vec<Problem> {
    extract_with_clock(content, &SystemClock)
}

/// Extract problems from a markdown document, in document order.
pub fn extract_with_clock(content: &str, clock: &dyn Clock) -> Vec<Problem> {
    let tokens = tokenize(content);
    segment(&tokens)
        .into_iter()
        .map(|segment| {
            let problem = assemble(segment.split_point, extract_fields(segment.tokens), clock);
            tracing::debug!(
                id = problem.id,
                kind = problem.kind.as_str(),
                options = problem.options.len(),
                title = %problem.title,
                "assembled problem"
            );
            problem
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    const QUIZ: &str = "# Chapter 1

Some introduction.

### What is 2+2?

4

解答

Basic arithmetic.

### Capital of France?

1. Paris
2. London

解答

Paris.

### Largest planet?

a. not a list

- Mercury
- Jupiter
- Mars

解答

Jupiter is the largest.
";

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn fill_example() {
        let doc = "### What is 2+2?\n\n4\n\n解答\nBasic arithmetic.\n";
        let problems = extract_with_clock(doc, &clock());
        assert_eq!(
            problems,
            vec![Problem {
                id: 1,
                key: 0,
                kind: ProblemType::Fill,
                created_at: clock().0,
                title: "What is 2+2?".to_string(),
                options: vec![],
                answer: "4".to_string(),
                hint: "Basic arithmetic.".to_string(),
            }]
        );
    }

    #[test]
    fn select_example() {
        let doc = "### Capital of France?\n\n- Paris\n- London\n\n解答\n\nParis.\n";
        let problems = extract(doc);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].kind, ProblemType::Select);
        assert_eq!(
            problems[0].options,
            vec![
                QuizOption {
                    value: "1".to_string(),
                    text: "Paris".to_string()
                },
                QuizOption {
                    value: "2".to_string(),
                    text: "London".to_string()
                },
            ]
        );
        assert_eq!(problems[0].hint, "Paris.");
    }

    #[test]
    fn one_problem_per_boundary_heading() {
        let problems = extract_with_clock(QUIZ, &clock());
        let points = find_split_points(&tokenize(QUIZ));
        assert_eq!(problems.len(), 3);
        assert_eq!(
            problems.iter().map(|p| p.key).collect::<Vec<_>>(),
            points
        );
        assert!(problems.windows(2).all(|w| w[0].id < w[1].id));
        for problem in &problems {
            assert_eq!(problem.id, problem.key + 1);
        }
    }

    #[test]
    fn type_and_option_invariants() {
        for problem in extract_with_clock(QUIZ, &clock()) {
            assert_eq!(
                problem.kind == ProblemType::Select,
                !problem.options.is_empty()
            );
            for (i, option) in problem.options.iter().enumerate() {
                assert_eq!(option.value, (i + 1).to_string());
            }
        }
    }

    #[test]
    fn mixed_document_fields() {
        let problems = extract_with_clock(QUIZ, &clock());

        assert_eq!(problems[0].title, "What is 2+2?");
        assert_eq!(problems[0].kind, ProblemType::Fill);
        assert_eq!(problems[0].hint, "Basic arithmetic.");

        assert_eq!(problems[1].options.len(), 2);
        assert_eq!(problems[1].answer, "");

        assert_eq!(problems[2].answer, "a. not a list");
        assert_eq!(
            problems[2]
                .options
                .iter()
                .map(|o| o.text.as_str())
                .collect::<Vec<_>>(),
            vec!["Mercury", "Jupiter", "Mars"]
        );
        assert_eq!(problems[2].hint, "Jupiter is the largest.");
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(
            extract_with_clock(QUIZ, &clock()),
            extract_with_clock(QUIZ, &clock())
        );

        let strip_time = |problems: Vec<Problem>| {
            problems
                .into_iter()
                .map(|p| (p.id, p.key, p.kind, p.title, p.options, p.answer, p.hint))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip_time(extract(QUIZ)), strip_time(extract(QUIZ)));
    }

    #[test]
    fn no_boundary_headings_means_no_problems() {
        assert!(extract("").is_empty());
        assert!(extract("# Title\n\n## What?\n\n#### Deep\n").is_empty());
    }

    #[test]
    fn escaped_markup_survives_extraction() {
        let problems = extract("### a \\* b\n\nx \\_y\\_ z\n\n- \\#1\n");
        assert_eq!(problems[0].title, "a \\* b");
        assert_eq!(problems[0].answer, "x \\_y\\_ z");
        assert_eq!(problems[0].options[0].text, "\\#1");
    }

    #[test]
    fn consecutive_headings_leave_first_problem_empty() {
        let problems = extract_with_clock("### First\n### Second\n\nanswer\n", &clock());
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].title, "First");
        assert_eq!(problems[0].answer, "");
        assert_eq!(problems[0].kind, ProblemType::Fill);
        assert_eq!(problems[1].id, 4);
        assert_eq!(problems[1].answer, "answer");
    }
}
