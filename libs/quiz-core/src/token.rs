//! Markdown token stream types.
//!
//! A document is flattened into block-level open/close tokens with one
//! [`TokenKind::Inline`] token per leaf block carrying the block's text.
//! Extraction addresses tokens purely by their position in this stream.

/// Kind of a markdown token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    HeadingOpen,
    HeadingClose,
    ParagraphOpen,
    ParagraphClose,
    Inline,
    BulletListOpen,
    BulletListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    BlockquoteOpen,
    BlockquoteClose,
    Fence,
    CodeBlock,
    HtmlBlock,
    Hr,
    TableOpen,
    TableClose,
    TheadOpen,
    TheadClose,
    TbodyOpen,
    TbodyClose,
    TrOpen,
    TrClose,
    ThOpen,
    ThClose,
    TdOpen,
    TdClose,
}

/// A single token of the flattened markdown stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Heading depth, only set on heading tokens.
    pub level: Option<u8>,
    /// Literal text for inline, fence, code and html tokens. Empty otherwise.
    pub content: String,
    /// Set on the paragraph tokens synthesized inside tight list items.
    pub hidden: bool,
}

impl Token {
    /// Structural token without content.
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            level: None,
            content: String::new(),
            hidden: false,
        }
    }

    pub fn heading_open(level: u8) -> Self {
        Self {
            level: Some(level),
            ..Self::new(TokenKind::HeadingOpen)
        }
    }

    pub fn heading_close(level: u8) -> Self {
        Self {
            level: Some(level),
            ..Self::new(TokenKind::HeadingClose)
        }
    }

    pub fn inline(content: impl Into<String>) -> Self {
        Self::with_content(TokenKind::Inline, content)
    }

    pub fn with_content(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::new(kind)
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Whether this is a heading-open token at the given depth.
    pub fn is_heading_open(&self, level: u8) -> bool {
        self.kind == TokenKind::HeadingOpen && self.level == Some(level)
    }

    /// Whether this is a heading-close token at the given depth.
    pub fn is_heading_close(&self, level: u8) -> bool {
        self.kind == TokenKind::HeadingClose && self.level == Some(level)
    }
}
