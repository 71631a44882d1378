//! Header and footer rendering functions

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub const PAGE_TITLE: &str = "Research Life Cycle";

pub fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![Span::styled(
        PAGE_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = |label: &'static str| Span::styled(label, Style::default().add_modifier(Modifier::BOLD));

    let mut spans = vec![
        key("[Mouse]"),
        Span::raw(" Hover/Click  "),
        key("[Tab/←→]"),
        Span::raw(" Move  "),
        key("[Enter]"),
        Span::raw(" Open  "),
    ];
    if app.active.is_some() {
        spans.extend([
            key("[↑↓]"),
            Span::raw(" Scroll  "),
            key("[Esc/C]"),
            Span::raw(" Close  "),
        ]);
    }
    spans.extend([key("[Q]"), Span::raw(" Quit")]);

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
