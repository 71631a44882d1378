//! Application state and module organization
//!
//! This module contains the main App struct and re-exports all functionality
//! organized by domain.

use ratatui::layout::Rect;

use crate::chart::PieLayout;
use crate::error::Result;
use crate::markup::{CommonMarkRenderer, MarkupRenderer};
use crate::phases::{self, Phase};

mod models;
pub use models::*;

pub mod layout;

// Declare submodules
mod input;
mod interaction;

impl App {
    pub fn new() -> Result<Self> {
        Self::with_renderer(phases::all(), Box::new(CommonMarkRenderer::new()))
    }

    pub fn with_renderer(
        phases: &'static [Phase],
        markup: Box<dyn MarkupRenderer>,
    ) -> Result<Self> {
        let layout = PieLayout::standard(phases.len())?;

        Ok(Self {
            phases,
            layout,
            hover: HoverState::default(),
            active: None,
            markup,
            detail_scroll: 0,
            viewport: Rect::default(),
            should_quit: false,
        })
    }
}
