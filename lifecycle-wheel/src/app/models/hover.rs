//! Tooltip state

use crate::phases::Phase;

/// What the tooltip shows and where
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    pub visible: bool,
    /// Cursor position in terminal cells
    pub x: u16,
    pub y: u16,
    /// Slice under the pointer
    pub slice: Option<usize>,
    pub title: &'static str,
    pub description: &'static str,
    pub storage: &'static str,
    pub policy: &'static str,
}

impl HoverState {
    pub fn over(slice: usize, phase: &'static Phase, x: u16, y: u16) -> Self {
        Self {
            visible: true,
            x,
            y,
            slice: Some(slice),
            title: phase.title,
            description: phase.description,
            storage: phase.storage,
            policy: phase.policy,
        }
    }
}
