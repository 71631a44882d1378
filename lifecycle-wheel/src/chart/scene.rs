//! Retained scene: everything one render pass draws, independent of the surface

use serde::Serialize;

use super::geometry::{label_lines, ArrowPath, LabelLine, PieLayout, Point, Slice, LABEL_RADIUS};
use super::palette::{slice_color, SliceColor};
use crate::phases::Phase;

/// Stroke emphasis applied to a wedge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    #[default]
    None,
    /// The wedge is the active phase
    Selected,
    /// The pointer is over the wedge
    Hovered,
}

impl Emphasis {
    /// Stroke width in chart units
    pub fn stroke_width(self) -> f64 {
        match self {
            Emphasis::None => 0.0,
            Emphasis::Selected => 1.5,
            Emphasis::Hovered => 3.0,
        }
    }

    pub fn is_stroked(self) -> bool {
        self != Emphasis::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub phase_id: u32,
    pub slice: Slice,
    pub color: SliceColor,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub phase_id: u32,
    pub anchor: Point,
    pub lines: Vec<LabelLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub wedges: Vec<Wedge>,
    pub labels: Vec<Label>,
    pub arrow: ArrowPath,
}

impl Scene {
    /// Build the scene for `phases` laid out by `layout`.
    ///
    /// `emphasis` is asked once per slice index.
    pub fn build<F>(phases: &[Phase], layout: &PieLayout, emphasis: F) -> Self
    where
        F: Fn(usize) -> Emphasis,
    {
        let wedges = layout
            .slices
            .iter()
            .zip(phases)
            .map(|(slice, phase)| Wedge {
                phase_id: phase.id,
                slice: *slice,
                color: slice_color(slice.index),
                emphasis: emphasis(slice.index),
            })
            .collect();

        let labels = layout
            .slices
            .iter()
            .zip(phases)
            .map(|(slice, phase)| Label {
                phase_id: phase.id,
                anchor: slice.centroid(LABEL_RADIUS),
                lines: label_lines(phase.title),
            })
            .collect();

        Self {
            inner_radius: layout.inner_radius,
            outer_radius: layout.outer_radius,
            wedges,
            labels,
            arrow: ArrowPath::default(),
        }
    }

    /// Wedge under `point`, if any
    pub fn wedge_at(&self, point: Point) -> Option<&Wedge> {
        self.wedges
            .iter()
            .find(|w| w.slice.contains(point, self.inner_radius, self.outer_radius))
    }
}
