//! UI rendering functions for the life cycle wheel TUI
//!
//! This module contains all the rendering logic: header and footer, the donut
//! canvas, the hover tooltip, and the detail panel.

use ratatui::Frame;

use crate::app::{layout::screen_layout, App};

// Module declarations
mod chart_view;
mod detail_panel;
mod header_footer;
mod tooltip;

// Re-export public functions
pub use chart_view::{render_chart, DonutShape};
pub use detail_panel::{
    detail_body, detail_lines, detail_paragraph, document_lines, render_detail_panel,
};
pub use header_footer::{render_footer, render_header, PAGE_TITLE};
pub use tooltip::{render_tooltip, tooltip_rect};

/// Main UI rendering function - redraws the whole screen from the current state
pub fn ui(f: &mut Frame, app: &App) {
    let screen = screen_layout(f.area(), app.active.is_some());

    render_header(f, screen.header);
    render_chart(f, screen.chart, app);
    render_footer(f, screen.footer, app);

    if let (Some(phase), Some(panel)) = (app.active_phase(), screen.detail) {
        render_detail_panel(f, panel, screen.close_button, app, phase);
    }

    // Tooltip floats above everything else
    if app.hover.visible {
        render_tooltip(f, f.area(), &app.hover);
    }
}
