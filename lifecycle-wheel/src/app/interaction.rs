//! Hover and selection transitions
//!
//! Hover and selection are independent: hovering never touches the selection,
//! and selecting never touches the tooltip.

use tracing::{debug, info};

use super::*;
use crate::chart::{Emphasis, Scene};

impl App {
    /// Pointer entered slice `index` at cell (`x`, `y`)
    pub fn pointer_enter(&mut self, index: usize, x: u16, y: u16) {
        let Some(phase) = self.phases.get(index) else {
            return;
        };
        debug!(phase_id = phase.id, "pointer enter");
        self.hover = HoverState::over(index, phase, x, y);
    }

    /// Pointer moved while over a slice; only the cursor changes
    pub fn pointer_move(&mut self, x: u16, y: u16) {
        if self.hover.visible {
            self.hover.x = x;
            self.hover.y = y;
        }
    }

    /// Pointer left slice `index`; a leave for any other slice is ignored
    pub fn pointer_leave(&mut self, index: usize) {
        if self.hover.slice != Some(index) {
            return;
        }
        if let Some(phase) = self.phases.get(index) {
            debug!(phase_id = phase.id, "pointer leave");
        }
        self.hover = HoverState::default();
    }

    /// Slice `index` was clicked; replaces any previous selection
    pub fn click(&mut self, index: usize) {
        let Some(phase) = self.phases.get(index) else {
            return;
        };
        if self.active != Some(index) {
            self.detail_scroll = 0;
        }
        info!(phase_id = phase.id, title = phase.title, "phase selected");
        self.active = Some(index);
    }

    /// Close the detail panel
    pub fn close_detail(&mut self) {
        if let Some(index) = self.active.take() {
            info!(phase_id = self.phases[index].id, "selection cleared");
        }
        self.detail_scroll = 0;
    }

    pub fn active_phase(&self) -> Option<&'static Phase> {
        self.active.and_then(|i| self.phases.get(i))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover.slice
    }

    /// Stroke emphasis for slice `index`.
    ///
    /// Hover wins over selection; a selected slice keeps its stroke after the
    /// pointer leaves.
    pub fn emphasis(&self, index: usize) -> Emphasis {
        if self.hover.slice == Some(index) {
            Emphasis::Hovered
        } else if self.active == Some(index) {
            Emphasis::Selected
        } else {
            Emphasis::None
        }
    }

    /// Scene for the current state
    pub fn scene(&self) -> Scene {
        Scene::build(self.phases, &self.layout, |i| self.emphasis(i))
    }
}
