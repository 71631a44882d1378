//! Hover tooltip next to the cursor

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::HoverState;

const MAX_WIDTH: u16 = 48;

fn tooltip_lines(hover: &HoverState) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(hover.title, bold.fg(Color::Yellow))),
        Line::from(hover.description),
        Line::from(vec![Span::styled("Storage: ", bold), Span::raw(hover.storage)]),
        Line::from(vec![Span::styled("Policy: ", bold), Span::raw(hover.policy)]),
    ]
}

/// Tooltip box one cell right and below the cursor, kept inside `area`
pub fn tooltip_rect(area: Rect, hover: &HoverState) -> Rect {
    let lines = tooltip_lines(hover);
    let longest = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0);
    let width = (longest + 2).min(MAX_WIDTH).min(area.width);
    let inner = width.saturating_sub(2).max(1);
    let height = lines
        .iter()
        .map(|l| (l.width() as u16).max(1).div_ceil(inner))
        .sum::<u16>()
        .saturating_add(2)
        .min(area.height);

    let x = hover.x.saturating_add(1).min(area.right().saturating_sub(width));
    let y = hover.y.saturating_add(1).min(area.bottom().saturating_sub(height));
    Rect {
        x: x.max(area.x),
        y: y.max(area.y),
        width,
        height,
    }
}

pub fn render_tooltip(f: &mut Frame, area: Rect, hover: &HoverState) {
    let rect = tooltip_rect(area, hover);
    let tooltip = Paragraph::new(tooltip_lines(hover))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .style(Style::default().bg(Color::Black)),
        );

    f.render_widget(Clear, rect);
    f.render_widget(tooltip, rect);
}
