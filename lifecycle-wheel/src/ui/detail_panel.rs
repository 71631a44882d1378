//! Detail panel for the active phase

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{layout::CLOSE_LABEL, App};
use crate::markup::{Block as MarkupBlock, Document, Inline, MarkupRenderer};
use crate::phases::Phase;

fn inline_style(inline: &Inline) -> Style {
    let mut style = Style::default();
    if inline.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if inline.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if inline.code {
        style = style.fg(Color::Yellow);
    }
    style
}

fn styled_spans(spans: &[Inline], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|s| Span::styled(s.text.clone(), base.patch(inline_style(s))))
        .collect()
}

/// Terminal lines for a rendered markup document, blocks separated by blank lines
pub fn document_lines(doc: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, block) in doc.blocks.iter().enumerate() {
        let is_item = matches!(block, MarkupBlock::ListItem { .. });
        let follows_item = i > 0 && matches!(doc.blocks[i - 1], MarkupBlock::ListItem { .. });
        if i > 0 && !(is_item && follows_item) {
            lines.push(Line::from(""));
        }

        match block {
            MarkupBlock::Heading { level, spans } => {
                let mut base = Style::default().add_modifier(Modifier::BOLD);
                if *level == 1 {
                    base = base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
                }
                lines.push(Line::from(styled_spans(spans, base)));
            }
            MarkupBlock::Paragraph { spans } => {
                lines.push(Line::from(styled_spans(spans, Style::default())));
            }
            MarkupBlock::ListItem {
                depth,
                ordinal,
                spans,
            } => {
                let marker = match ordinal {
                    Some(n) => format!("{}{}. ", "  ".repeat(*depth), n),
                    None => format!("{}• ", "  ".repeat(*depth)),
                };
                let mut item = vec![Span::raw(marker)];
                item.extend(styled_spans(spans, Style::default()));
                lines.push(Line::from(item));
            }
            MarkupBlock::CodeBlock { code, .. } => {
                for code_line in code.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", code_line),
                        Style::default().fg(Color::Yellow),
                    )));
                }
            }
            MarkupBlock::Rule => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(24),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    lines
}

/// Panel body: title, metadata fields, then the rendered full text
pub fn detail_lines(phase: &Phase, markup: &dyn MarkupRenderer) -> Vec<Line<'static>> {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let field = |name: &'static str, value: &'static str| {
        Line::from(vec![Span::styled(name, label), Span::raw(value)])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            phase.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Description: ", phase.description),
        field("Storage: ", phase.storage),
        field("Policy: ", phase.policy),
        Line::from(""),
    ];
    lines.extend(document_lines(&markup.render(phase.full_text)));
    lines
}

/// Wrapped, scrollable paragraph holding [`detail_lines`]
pub fn detail_paragraph(phase: &Phase, markup: &dyn MarkupRenderer) -> Paragraph<'static> {
    Paragraph::new(detail_lines(phase, markup)).wrap(Wrap { trim: false })
}

/// Text area of a panel: inside the border, above the close button rows
pub fn detail_body(panel: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(panel);
    Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    }
}

pub fn render_detail_panel(
    f: &mut Frame,
    area: Rect,
    close_button: Option<Rect>,
    app: &App,
    phase: &Phase,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Phase {} ", phase.id))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let text = detail_paragraph(phase, app.markup.as_ref()).scroll((app.detail_scroll, 0));
    f.render_widget(text, detail_body(area));

    if let Some(button) = close_button {
        let close = Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(close, button);
    }
}
