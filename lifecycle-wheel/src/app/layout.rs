//! Screen layout shared by rendering and pointer handling
//!
//! Both sides compute the same rectangles from the same terminal area, so a
//! click lands on exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::chart::{Point, CANVAS_SIZE};

pub const CLOSE_LABEL: &str = "[ Close ]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    /// Square (in chart units) area the canvas is drawn into
    pub chart: Rect,
    pub detail: Option<Rect>,
    pub close_button: Option<Rect>,
}

pub fn screen_layout(area: Rect, detail_open: bool) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let body = chunks[1];
    let chart = chart_rect(body);
    let detail = detail_open.then(|| detail_rect(body));
    let close_button = detail.and_then(close_button_rect);

    ScreenLayout {
        header: chunks[0],
        body,
        footer: chunks[2],
        chart,
        detail,
        close_button,
    }
}

/// Largest centered rect with a 2:1 cell ratio, which looks square in a terminal
fn chart_rect(body: Rect) -> Rect {
    let height = body.height.min(body.width / 2);
    let width = height * 2;
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + (body.height - height) / 2,
        width,
        height,
    }
}

/// Detail panel anchored to the bottom-right corner of the body
fn detail_rect(body: Rect) -> Rect {
    let width = percent(body.width, 45).clamp(30.min(body.width), 72.min(body.width));
    let height = percent(body.height, 70).max(8.min(body.height));
    Rect {
        x: body.right().saturating_sub(width + 1).max(body.x),
        y: body.bottom().saturating_sub(height),
        width,
        height,
    }
}

fn percent(value: u16, pct: u32) -> u16 {
    u16::try_from(u32::from(value) * pct / 100).unwrap_or(value)
}

/// Close button sits on the last row inside the panel border
fn close_button_rect(panel: Rect) -> Option<Rect> {
    let width = CLOSE_LABEL.len() as u16;
    if panel.height < 3 || panel.width < width + 4 {
        return None;
    }
    Some(Rect {
        x: panel.x + 2,
        y: panel.bottom() - 2,
        width,
        height: 1,
    })
}

/// Chart-space point at the center of terminal cell (`column`, `row`)
pub fn cell_to_chart(chart: Rect, column: u16, row: u16) -> Option<Point> {
    if chart.width == 0 || chart.height == 0 || !chart.contains(Position::new(column, row)) {
        return None;
    }
    let half = CANVAS_SIZE / 2.0;
    let fx = (f64::from(column - chart.x) + 0.5) / f64::from(chart.width);
    let fy = (f64::from(row - chart.y) + 0.5) / f64::from(chart.height);
    Some(Point::new(fx * CANVAS_SIZE - half, fy * CANVAS_SIZE - half))
}

/// Terminal cell containing chart-space `point`
pub fn chart_to_cell(chart: Rect, point: Point) -> (u16, u16) {
    let half = CANVAS_SIZE / 2.0;
    let fx = ((point.x + half) / CANVAS_SIZE).clamp(0.0, 1.0);
    let fy = ((point.y + half) / CANVAS_SIZE).clamp(0.0, 1.0);
    let col = (fx * f64::from(chart.width)) as u16;
    let row = (fy * f64::from(chart.height)) as u16;
    (
        chart.x + col.min(chart.width.saturating_sub(1)),
        chart.y + row.min(chart.height.saturating_sub(1)),
    )
}
