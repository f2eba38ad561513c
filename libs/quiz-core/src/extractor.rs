//! Field extraction for a single problem.
//!
//! Each token of a problem's segment is classified into an [`Anchor`] in one
//! pass. Fields are read at fixed offsets from their anchor:
//!
//! | anchor                     | field         | offset        |
//! |----------------------------|---------------|---------------|
//! | boundary `heading_close`   | title         | 1 behind      |
//! | boundary `heading_close`   | answer        | 2 ahead       |
//! | `list_item_open`           | option text   | 2 ahead       |
//! | inline `解答`              | hint          | 3 ahead       |
//!
//! Lookups never leave the segment. A missing anchor or an out-of-range
//! lookup leaves the field empty; extraction never fails.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::types::{ProblemFields, QuizOption};
use crate::{BOUNDARY_LEVEL, HINT_MARKER};

/// The title is the inline token just before the boundary heading close.
pub const TITLE_BEHIND_HEADING_CLOSE: usize = 1;
/// The answer is the inline of the first block after the heading.
pub const ANSWER_AFTER_HEADING_CLOSE: usize = 2;
/// Skips the item's (possibly hidden) paragraph open.
pub const OPTION_TEXT_AFTER_ITEM_OPEN: usize = 2;
/// Skips the marker's block close and the next block open.
pub const HINT_AFTER_MARKER: usize = 3;

/// A token that positional lookups are made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor<'a> {
    /// Close of the boundary heading.
    BoundaryClose,
    /// Open of any list item.
    OptionItem,
    /// Inline token consisting of the hint marker alone.
    HintMarker,
    /// Inline token whose first line is the hint marker, with the hint text
    /// on the following lines of the same paragraph.
    LeadingHintMarker(&'a str),
}

impl<'a> Anchor<'a> {
    pub fn classify(token: &'a Token) -> Option<Self> {
        match token.kind {
            TokenKind::HeadingClose if token.is_heading_close(BOUNDARY_LEVEL) => {
                Some(Self::BoundaryClose)
            }
            TokenKind::ListItemOpen => Some(Self::OptionItem),
            TokenKind::Inline if token.content == HINT_MARKER => Some(Self::HintMarker),
            TokenKind::Inline => token
                .content
                .split_once('\n')
                .filter(|(first, rest)| first.trim_end() == HINT_MARKER && !rest.trim().is_empty())
                .map(|(_, rest)| Self::LeadingHintMarker(rest)),
            _ => None,
        }
    }
}

/// Extract title, answer, options and hint from one problem's tokens.
pub fn extract_fields(tokens: &[Token]) -> ProblemFields {
    let mut fields = ProblemFields::default();
    let mut cursor = Cursor::new(tokens);

    while let Some(token) = cursor.current() {
        match Anchor::classify(token) {
            Some(Anchor::BoundaryClose) => {
                fields.title = cursor.content_behind(TITLE_BEHIND_HEADING_CLOSE).to_string();
                fields.answer = cursor.content_ahead(ANSWER_AFTER_HEADING_CLOSE).to_string();
            }
            Some(Anchor::OptionItem) => {
                let ordinal = fields.options.len() + 1;
                let text = cursor.content_ahead(OPTION_TEXT_AFTER_ITEM_OPEN);
                fields.options.push(QuizOption::new(ordinal, text));
            }
            Some(Anchor::HintMarker) => {
                fields.hint = cursor.content_ahead(HINT_AFTER_MARKER).to_string();
            }
            Some(Anchor::LeadingHintMarker(rest)) => {
                fields.hint = rest.trim().to_string();
            }
            None => {}
        }
        cursor.advance();
    }

    fields
}
