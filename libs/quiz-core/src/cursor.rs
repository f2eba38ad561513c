//! Positional cursor over a token slice.
//!
//! Field extraction reads "the token N positions after X". The cursor makes
//! those lookups explicit and bounded: anything outside the slice is simply
//! absent, and content lookups degrade to the empty string.

use crate::token::Token;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Move to the next token. Returns false once the end is passed.
    pub fn advance(&mut self) -> bool {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.position < self.tokens.len()
    }

    pub fn ahead(&self, offset: usize) -> Option<&'a Token> {
        self.position
            .checked_add(offset)
            .and_then(|index| self.tokens.get(index))
    }

    pub fn behind(&self, offset: usize) -> Option<&'a Token> {
        self.position
            .checked_sub(offset)
            .and_then(|index| self.tokens.get(index))
    }

    /// Content of the token `offset` positions ahead, or "" if out of range.
    pub fn content_ahead(&self, offset: usize) -> &'a str {
        self.ahead(offset).map_or("", |token| token.content.as_str())
    }

    /// Content of the token `offset` positions behind, or "" if out of range.
    pub fn content_behind(&self, offset: usize) -> &'a str {
        self.behind(offset).map_or("", |token| token.content.as_str())
    }
}
