//! Main application state

use ratatui::layout::Rect;

use super::HoverState;
use crate::chart::PieLayout;
use crate::markup::MarkupRenderer;
use crate::phases::Phase;

/// Main application state
pub struct App {
    pub phases: &'static [Phase],
    pub layout: PieLayout,

    // Interaction state
    pub hover: HoverState,
    pub active: Option<usize>,

    // Detail panel
    pub markup: Box<dyn MarkupRenderer>,
    pub detail_scroll: u16,

    /// Last drawn terminal area, used to map pointer positions
    pub viewport: Rect,
    pub should_quit: bool,
}
