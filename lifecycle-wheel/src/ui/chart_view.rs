//! Donut canvas: wedges, emphasis strokes, labels and the decorative arrow

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Line as CanvasLine, Painter, Shape},
    Frame,
};

use crate::app::App;
use crate::chart::{Point, Scene, CANVAS_SIZE, LABEL_LINE_HEIGHT};

const HALF: f64 = CANVAS_SIZE / 2.0;
const STROKE_COLOR: Color = Color::White;
const ARROW_COLOR: Color = Color::Gray;
const ARROW_SEGMENTS: usize = 96;

/// Filled ring sectors with their emphasis strokes.
///
/// Paints every canvas dot whose center falls on a wedge, so the fill follows
/// the canvas resolution.
pub struct DonutShape<'a> {
    pub scene: &'a Scene,
}

impl Shape for DonutShape<'_> {
    fn draw(&self, painter: &mut Painter) {
        let Some((max_x, max_y)) = painter.get_point(HALF, -HALF) else {
            return;
        };
        if max_x == 0 || max_y == 0 {
            return;
        }
        let dot = CANVAS_SIZE / max_x as f64;
        let mut stroke = Vec::new();

        for gy in 0..=max_y {
            for gx in 0..=max_x {
                let point = Point::new(
                    -HALF + gx as f64 * CANVAS_SIZE / max_x as f64,
                    -HALF + gy as f64 * CANVAS_SIZE / max_y as f64,
                );
                let Some(wedge) = self.scene.wedge_at(point) else {
                    continue;
                };
                let band = wedge.emphasis.stroke_width() * dot / 1.5;
                if band > 0.0 && self.edge_distance(point, wedge.slice) < band {
                    stroke.push((gx, gy));
                } else {
                    painter.paint(gx, gy, wedge.color.into());
                }
            }
        }

        // A braille cell takes the color of its last dot, so strokes go last
        for (gx, gy) in stroke {
            painter.paint(gx, gy, STROKE_COLOR);
        }
    }
}

impl DonutShape<'_> {
    /// Distance in chart units from `point` to the nearest wedge edge
    fn edge_distance(&self, point: Point, slice: crate::chart::Slice) -> f64 {
        let r = point.radius();
        let angle = point.angle();
        let radial = (r - self.scene.inner_radius).min(self.scene.outer_radius - r);
        let angular = (angle - slice.drawn_start()).min(slice.drawn_end() - angle) * r;
        radial.min(angular)
    }
}

pub fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let scene = app.scene();
    let cell_width = CANVAS_SIZE / f64::from(area.width);
    let cell_height = CANVAS_SIZE / f64::from(area.height);
    // Keep one label word per terminal row even when rows are taller than a line
    let line_step = LABEL_LINE_HEIGHT.max(cell_height);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-HALF, HALF])
        .y_bounds([-HALF, HALF])
        .paint(|ctx| {
            ctx.draw(&DonutShape { scene: &scene });

            let points = scene.arrow.points(ARROW_SEGMENTS);
            for pair in points.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].x,
                    y1: -pair[0].y,
                    x2: pair[1].x,
                    y2: -pair[1].y,
                    color: ARROW_COLOR,
                });
            }
            let [left, right, tip] = scene.arrow.head(cell_width / 3.0);
            for (a, b) in [(left, tip), (right, tip), (left, right)] {
                ctx.draw(&CanvasLine {
                    x1: a.x,
                    y1: -a.y,
                    x2: b.x,
                    y2: -b.y,
                    color: ARROW_COLOR,
                });
            }

            ctx.layer();
            for label in &scene.labels {
                for line in &label.lines {
                    let width = line.text.chars().count() as f64 * cell_width;
                    let dy = line.dy / LABEL_LINE_HEIGHT * line_step;
                    ctx.print(
                        label.anchor.x - width / 2.0,
                        -(label.anchor.y + dy),
                        Line::styled(
                            line.text.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Emphasis, PieLayout};
    use crate::phases;
    use ratatui::{buffer::Buffer, widgets::Widget};

    fn stroke_cells(emphasis: Emphasis) -> usize {
        let layout = PieLayout::standard(8).unwrap();
        let scene = Scene::build(phases::all(), &layout, |i| {
            if i == 0 {
                emphasis
            } else {
                Emphasis::None
            }
        });
        let area = Rect::new(0, 0, 80, 40);
        let mut buffer = Buffer::empty(area);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-HALF, HALF])
            .y_bounds([-HALF, HALF])
            .paint(|ctx| ctx.draw(&DonutShape { scene: &scene }))
            .render(area, &mut buffer);
        buffer
            .content
            .iter()
            .filter(|cell| cell.fg == STROKE_COLOR)
            .count()
    }

    #[test]
    fn test_stroke_follows_emphasis() {
        let none = stroke_cells(Emphasis::None);
        let selected = stroke_cells(Emphasis::Selected);
        let hovered = stroke_cells(Emphasis::Hovered);
        assert_eq!(none, 0);
        assert!(selected > 0);
        assert!(hovered >= selected);
    }
}
