//! Pie layout and polar geometry
//!
//! Chart space is the 800 x 800 canvas with its origin at the center, x to the
//! right and y pointing down. Angles are in radians, measured clockwise from
//! 12 o'clock.

use serde::Serialize;
use std::f64::consts::{PI, TAU};

use crate::error::{Result, WheelError};

pub const CANVAS_SIZE: f64 = 800.0;
pub const OUTER_RADIUS: f64 = 350.0;
pub const INNER_RADIUS: f64 = 130.0;
pub const LABEL_RADIUS: f64 = (INNER_RADIUS + OUTER_RADIUS) / 2.0;
pub const PAD_ANGLE: f64 = 0.015;
pub const LABEL_LINE_HEIGHT: f64 = 20.0;

pub const ARROW_RADIUS: f64 = OUTER_RADIUS + 20.0;
pub const ARROW_START_ANGLE: f64 = 1.5 * PI - 0.15;
pub const ARROW_END_ANGLE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin in direction `angle`
    pub fn polar(angle: f64, radius: f64) -> Self {
        Self {
            x: radius * angle.sin(),
            y: -radius * angle.cos(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the point, normalized to `[0, TAU)`
    pub fn angle(&self) -> f64 {
        let a = self.x.atan2(-self.y);
        if a < 0.0 {
            a + TAU
        } else {
            a
        }
    }
}

/// One phase's share of the circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slice {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
}

impl Slice {
    /// Angle allotted to the slice, padding included
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn drawn_start(&self) -> f64 {
        self.start_angle + self.pad_angle / 2.0
    }

    pub fn drawn_end(&self) -> f64 {
        self.end_angle - self.pad_angle / 2.0
    }

    /// Angle actually covered by the wedge
    pub fn drawn_span(&self) -> f64 {
        self.drawn_end() - self.drawn_start()
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn centroid(&self, radius: f64) -> Point {
        Point::polar(self.mid_angle(), radius)
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.drawn_start() && angle <= self.drawn_end()
    }

    /// True when `point` lies on this slice's drawn wedge of the `inner`..`outer` ring
    pub fn contains(&self, point: Point, inner: f64, outer: f64) -> bool {
        let r = point.radius();
        r >= inner && r <= outer && self.contains_angle(point.angle())
    }
}

/// Equal-value pie layout over a ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieLayout {
    pub slices: Vec<Slice>,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl PieLayout {
    /// Lay out `count` equal slices with `pad_angle` between neighbours.
    ///
    /// The pad is clamped so it never exceeds a slice's share of the circle.
    pub fn new(count: usize, pad_angle: f64) -> Result<Self> {
        if count == 0 {
            return Err(WheelError::EmptyRegistry);
        }

        let share = TAU / count as f64;
        let pad = pad_angle.clamp(0.0, share);
        let slices = (0..count)
            .map(|index| Slice {
                index,
                start_angle: share * index as f64,
                end_angle: share * (index + 1) as f64,
                pad_angle: pad,
            })
            .collect();

        Ok(Self {
            slices,
            inner_radius: INNER_RADIUS,
            outer_radius: OUTER_RADIUS,
        })
    }

    /// The wheel's standard layout for `count` phases
    pub fn standard(count: usize) -> Result<Self> {
        Self::new(count, PAD_ANGLE)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slice> {
        self.slices.get(index)
    }

    /// Slice under `point`, if any. Pad gaps, the hole and the outside hit nothing.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.slices
            .iter()
            .find(|s| s.contains(point, self.inner_radius, self.outer_radius))
            .map(|s| s.index)
    }
}

/// One line of a slice label, offset vertically from the centroid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLine {
    pub text: String,
    pub dy: f64,
}

/// Split a title one word per line, centered as a block around the anchor
pub fn label_lines(title: &str) -> Vec<LabelLine> {
    let words: Vec<&str> = title.split_whitespace().collect();
    let block_height = words.len() as f64 * LABEL_LINE_HEIGHT;
    words
        .iter()
        .enumerate()
        .map(|(i, word)| LabelLine {
            text: (*word).to_string(),
            dy: i as f64 * LABEL_LINE_HEIGHT - block_height / 2.0,
        })
        .collect()
}

/// Decorative arc just outside the ring, drawn from `start_angle` to `end_angle`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowPath {
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Default for ArrowPath {
    fn default() -> Self {
        Self {
            radius: ARROW_RADIUS,
            start_angle: ARROW_START_ANGLE,
            end_angle: ARROW_END_ANGLE,
        }
    }
}

impl ArrowPath {
    pub fn start(&self) -> Point {
        Point::polar(self.start_angle, self.radius)
    }

    pub fn end(&self) -> Point {
        Point::polar(self.end_angle, self.radius)
    }

    /// True when the arc sweeps more than half the circle
    pub fn is_large(&self) -> bool {
        (self.end_angle - self.start_angle).abs() > PI
    }

    /// True when the arc runs clockwise
    pub fn is_clockwise(&self) -> bool {
        self.end_angle > self.start_angle
    }

    /// `segments + 1` points along the arc, start to end
    pub fn points(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let sweep = self.end_angle - self.start_angle;
        (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                Point::polar(self.start_angle + sweep * t, self.radius)
            })
            .collect()
    }

    /// Arrowhead triangle: two base corners, then the tip.
    ///
    /// The arc is traced out and back, so the head lands on the start point,
    /// just below 9 o'clock, where its fixed upward orientation follows the
    /// clockwise flow of the wheel. It scales with the stroke width.
    pub fn head(&self, stroke_width: f64) -> [Point; 3] {
        let anchor = self.start();
        [
            Point::new(anchor.x - 3.0 * stroke_width, anchor.y),
            Point::new(anchor.x + 3.0 * stroke_width, anchor.y),
            Point::new(anchor.x, anchor.y - 9.0 * stroke_width),
        ]
    }
}
