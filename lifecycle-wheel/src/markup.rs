//! Markup conversion for the detail panel
//!
//! The panel never parses markup itself; it asks a [`MarkupRenderer`] for a
//! structured [`Document`] (terminal) or an HTML fragment (export). Raw HTML in
//! the source is demoted to literal text, so both outputs are safe to display.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// Converts lightweight markup into displayable structure
pub trait MarkupRenderer {
    fn render(&self, source: &str) -> Document;

    fn render_html(&self, source: &str) -> String;
}

/// Inline run of text with uniform styling
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Inline {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, spans: Vec<Inline> },
    Paragraph { spans: Vec<Inline> },
    /// `ordinal` is `None` for bullet items
    ListItem { depth: usize, ordinal: Option<u64>, spans: Vec<Inline> },
    CodeBlock { language: Option<String>, code: String },
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Concatenated text of all blocks, one block per line
    pub fn plain_text(&self) -> String {
        let join = |spans: &[Inline]| spans.iter().map(|s| s.text.as_str()).collect::<String>();
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Heading { spans, .. } | Block::Paragraph { spans } => join(spans),
                Block::ListItem { spans, .. } => join(spans),
                Block::CodeBlock { code, .. } => code.trim_end().to_string(),
                Block::Rule => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// CommonMark renderer backed by pulldown-cmark
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl CommonMarkRenderer {
    pub fn new() -> Self {
        Self
    }

    fn events(source: &str) -> impl Iterator<Item = Event<'_>> {
        let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        Parser::new_ext(source, options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        })
    }
}

impl MarkupRenderer for CommonMarkRenderer {
    fn render(&self, source: &str) -> Document {
        let mut builder = DocumentBuilder::default();
        for event in Self::events(source) {
            builder.push(event);
        }
        builder.finish()
    }

    fn render_html(&self, source: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, Self::events(source));
        out
    }
}

#[derive(Default)]
struct DocumentBuilder {
    blocks: Vec<Block>,
    spans: Vec<Inline>,
    heading: Option<u8>,
    bold: usize,
    italic: usize,
    /// Next ordinal per open list, `None` for bullet lists
    lists: Vec<Option<u64>>,
    pending_item: Option<Option<u64>>,
    code: Option<(Option<String>, String)>,
}

impl DocumentBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush();
                self.heading = Some(level as u8);
            }
            Event::End(TagEnd::Heading(_)) => self.flush(),
            Event::End(TagEnd::Paragraph) => self.flush(),
            Event::Start(Tag::List(start)) => {
                self.flush();
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.flush();
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let ordinal = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let current = *next;
                        *next += 1;
                        Some(current)
                    }
                    _ => None,
                };
                self.pending_item = Some(ordinal);
            }
            Event::End(TagEnd::Item) => self.flush(),
            Event::Start(Tag::CodeBlock(kind)) => {
                self.flush();
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                self.code = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = self.code.take() {
                    self.blocks.push(Block::CodeBlock { language, code });
                }
            }
            Event::Start(Tag::Strong) => self.bold += 1,
            Event::End(TagEnd::Strong) => self.bold = self.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.italic += 1,
            Event::End(TagEnd::Emphasis) => self.italic = self.italic.saturating_sub(1),
            Event::Text(text) => {
                if let Some((_, ref mut code)) = self.code {
                    code.push_str(&text);
                } else {
                    self.push_text(&text, false);
                }
            }
            Event::Code(code) => self.push_text(&code, true),
            Event::SoftBreak | Event::HardBreak => self.push_text(" ", false),
            Event::TaskListMarker(done) => {
                self.push_text(if done { "[x] " } else { "[ ] " }, false)
            }
            Event::Rule => {
                self.flush();
                self.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str, code: bool) {
        let bold = self.bold > 0;
        let italic = self.italic > 0;
        if let Some(last) = self.spans.last_mut() {
            if last.bold == bold && last.italic == italic && last.code == code {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Inline {
            text: text.to_string(),
            bold,
            italic,
            code,
        });
    }

    fn flush(&mut self) {
        let heading = self.heading.take();
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        let block = if let Some(level) = heading {
            Block::Heading { level, spans }
        } else if let Some(ordinal) = self.pending_item.take() {
            Block::ListItem {
                depth: self.lists.len().saturating_sub(1),
                ordinal,
                spans,
            }
        } else {
            Block::Paragraph { spans }
        };
        self.blocks.push(block);
    }

    fn finish(mut self) -> Document {
        self.flush();
        Document {
            blocks: self.blocks,
        }
    }
}
