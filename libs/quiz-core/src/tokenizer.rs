//! Markdown tokenizer.
//!
//! Flattens the `pulldown-cmark` event stream into the conventional block
//! token layout:
//!
//! ```text
//! heading_open(3)  inline  heading_close(3)
//! paragraph_open   inline  paragraph_close
//! ordered_list_open
//!   list_item_open  paragraph_open(hidden)  inline  paragraph_close(hidden)  list_item_close
//! ordered_list_close
//! ```
//!
//! Tight list items carry no paragraph events in `pulldown-cmark`; hidden
//! paragraph tokens are synthesized for them so that an item's text is always
//! two tokens after its `list_item_open`. Inline content is the raw source of
//! the block's inline run, so markup such as `**bold**` and backslash escapes
//! are preserved.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::token::{Token, TokenKind};

/// Tokenize a markdown document.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut builder = StreamBuilder::new(source);
    for (event, range) in Parser::new_ext(source, parser_options()).into_offset_iter() {
        builder.push(event, range);
    }
    builder.finish()
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Whether `range` starts at a punctuation character escaped by a backslash.
fn is_escape(source: &str, range: &Range<usize>) -> bool {
    let bytes = source.as_bytes();
    !range.is_empty()
        && range.start > 0
        && bytes[range.start].is_ascii_punctuation()
        && bytes[range.start - 1] == b'\\'
}

/// Inline text being collected for the current leaf block.
struct InlineRun {
    text: String,
    /// Nesting depth of inline containers (emphasis, links, ...).
    depth: usize,
    /// Opened for a tight list item, closed by the next block event.
    implicit: bool,
    /// End offset of the last collected piece on the current line.
    last_end: Option<usize>,
}

impl InlineRun {
    fn new(implicit: bool) -> Self {
        Self {
            text: String::new(),
            depth: 0,
            implicit,
            last_end: None,
        }
    }
}

/// Code or html block whose text arrives as a series of events.
struct RawBlock {
    kind: TokenKind,
    content: String,
}

#[derive(Default)]
struct TableState {
    in_head: bool,
    body_open: bool,
}

struct StreamBuilder<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    inline: Option<InlineRun>,
    raw: Option<RawBlock>,
    table: TableState,
}

impl<'a> StreamBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            inline: None,
            raw: None,
            table: TableState::default(),
        }
    }

    fn push(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => self.start(tag, range),
            Event::End(end) => self.end(end),
            Event::Text(text) | Event::Html(text) if self.raw.is_some() => {
                if let Some(raw) = self.raw.as_mut() {
                    raw.content.push_str(&text);
                }
            }
            Event::Html(html) => {
                self.close_implicit();
                self.tokens
                    .push(Token::with_content(TokenKind::HtmlBlock, html.to_string()));
            }
            Event::Rule => {
                self.close_implicit();
                self.tokens.push(Token::new(TokenKind::Hr));
            }
            Event::SoftBreak | Event::HardBreak => self.inline_break(),
            _ => self.inline_source(range),
        }
    }

    fn start(&mut self, tag: Tag<'_>, range: Range<usize>) {
        match tag {
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. } => {
                self.inline_source(range);
                if let Some(run) = self.inline.as_mut() {
                    run.depth += 1;
                }
            }
            Tag::Paragraph => {
                self.close_implicit();
                self.tokens.push(Token::new(TokenKind::ParagraphOpen));
                self.inline = Some(InlineRun::new(false));
            }
            Tag::Heading { level, .. } => {
                self.close_implicit();
                self.tokens.push(Token::heading_open(heading_depth(level)));
                self.inline = Some(InlineRun::new(false));
            }
            Tag::BlockQuote { .. } => {
                self.close_implicit();
                self.tokens.push(Token::new(TokenKind::BlockquoteOpen));
            }
            Tag::CodeBlock(kind) => {
                self.close_implicit();
                let kind = match kind {
                    CodeBlockKind::Fenced(_) => TokenKind::Fence,
                    CodeBlockKind::Indented => TokenKind::CodeBlock,
                };
                self.raw = Some(RawBlock {
                    kind,
                    content: String::new(),
                });
            }
            Tag::HtmlBlock => {
                self.close_implicit();
                self.raw = Some(RawBlock {
                    kind: TokenKind::HtmlBlock,
                    content: String::new(),
                });
            }
            Tag::List(first) => {
                self.close_implicit();
                let kind = if first.is_some() {
                    TokenKind::OrderedListOpen
                } else {
                    TokenKind::BulletListOpen
                };
                self.tokens.push(Token::new(kind));
            }
            Tag::Item => {
                self.close_implicit();
                self.tokens.push(Token::new(TokenKind::ListItemOpen));
            }
            Tag::Table(_) => {
                self.close_implicit();
                self.table = TableState::default();
                self.tokens.push(Token::new(TokenKind::TableOpen));
            }
            Tag::TableHead => {
                self.table.in_head = true;
                self.tokens.push(Token::new(TokenKind::TheadOpen));
                self.tokens.push(Token::new(TokenKind::TrOpen));
            }
            Tag::TableRow => {
                if !self.table.body_open {
                    self.table.body_open = true;
                    self.tokens.push(Token::new(TokenKind::TbodyOpen));
                }
                self.tokens.push(Token::new(TokenKind::TrOpen));
            }
            Tag::TableCell => {
                let kind = if self.table.in_head {
                    TokenKind::ThOpen
                } else {
                    TokenKind::TdOpen
                };
                self.tokens.push(Token::new(kind));
                self.inline = Some(InlineRun::new(false));
            }
            _ => self.close_implicit(),
        }
    }

    fn end(&mut self, end: TagEnd) {
        match end {
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image => {
                if let Some(run) = self.inline.as_mut() {
                    run.depth = run.depth.saturating_sub(1);
                }
            }
            TagEnd::Paragraph => {
                self.flush_inline();
                self.tokens.push(Token::new(TokenKind::ParagraphClose));
            }
            TagEnd::Heading(level) => {
                self.flush_inline();
                self.tokens.push(Token::heading_close(heading_depth(level)));
            }
            TagEnd::BlockQuote { .. } => {
                self.close_implicit();
                self.tokens.push(Token::new(TokenKind::BlockquoteClose));
            }
            TagEnd::CodeBlock | TagEnd::HtmlBlock => {
                if let Some(raw) = self.raw.take() {
                    self.tokens.push(Token::with_content(raw.kind, raw.content));
                }
            }
            TagEnd::List(ordered) => {
                self.close_implicit();
                let kind = if ordered {
                    TokenKind::OrderedListClose
                } else {
                    TokenKind::BulletListClose
                };
                self.tokens.push(Token::new(kind));
            }
            TagEnd::Item => {
                self.close_implicit();
                self.tokens.push(Token::new(TokenKind::ListItemClose));
            }
            TagEnd::Table => {
                if self.table.body_open {
                    self.tokens.push(Token::new(TokenKind::TbodyClose));
                }
                self.tokens.push(Token::new(TokenKind::TableClose));
                self.table = TableState::default();
            }
            TagEnd::TableHead => {
                self.table.in_head = false;
                self.tokens.push(Token::new(TokenKind::TrClose));
                self.tokens.push(Token::new(TokenKind::TheadClose));
            }
            TagEnd::TableRow => self.tokens.push(Token::new(TokenKind::TrClose)),
            TagEnd::TableCell => {
                self.flush_inline();
                let kind = if self.table.in_head {
                    TokenKind::ThClose
                } else {
                    TokenKind::TdClose
                };
                self.tokens.push(Token::new(kind));
            }
            _ => self.close_implicit(),
        }
    }

    /// Current inline run, opening a hidden paragraph if no leaf block is
    /// collecting (tight list items).
    fn inline_run(&mut self) -> &mut InlineRun {
        if self.inline.is_none() {
            self.tokens
                .push(Token::new(TokenKind::ParagraphOpen).hidden());
        }
        self.inline.get_or_insert_with(|| InlineRun::new(true))
    }

    /// Append the source of an inline event. The backslash of an escaped
    /// character lies outside the event's range and is taken back in, as are
    /// any other gaps between pieces on the same line.
    fn inline_source(&mut self, range: Range<usize>) {
        let source = self.source;
        let start = if is_escape(source, &range) {
            range.start - 1
        } else {
            range.start
        };
        let run = self.inline_run();
        if run.depth > 0 {
            return;
        }
        let start = match run.last_end {
            Some(end) if end < start => {
                run.text.push_str(&source[end..start]);
                start
            }
            Some(end) => start.max(end).min(range.end),
            None => start,
        };
        run.text.push_str(&source[start..range.end]);
        run.last_end = Some(range.end);
    }

    fn inline_break(&mut self) {
        let run = self.inline_run();
        if run.depth == 0 {
            run.text.push('\n');
            run.last_end = None;
        }
    }

    fn flush_inline(&mut self) {
        if let Some(run) = self.inline.take() {
            self.tokens.push(Token::inline(run.text.trim()));
        }
    }

    fn close_implicit(&mut self) {
        if self.inline.as_ref().is_some_and(|run| run.implicit) {
            self.flush_inline();
            self.tokens
                .push(Token::new(TokenKind::ParagraphClose).hidden());
        }
    }

    fn finish(mut self) -> Vec<Token> {
        self.close_implicit();
        self.tokens
    }
}
