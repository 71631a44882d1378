//! Shared helpers for wheel integration tests

use lifecycle_wheel::app::App;
use lifecycle_wheel::chart::LABEL_RADIUS;
use lifecycle_wheel::phases;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

pub const WIDTH: u16 = 120;
pub const HEIGHT: u16 = 40;

/// App sized as if drawn on a 120x40 terminal
pub fn sized_app() -> App {
    let mut app = App::new().unwrap();
    app.viewport = Rect::new(0, 0, WIDTH, HEIGHT);
    app
}

/// Slice index of the phase with `id`
pub fn index_of(id: u32) -> usize {
    phases::index_of(id).unwrap()
}

/// Terminal cell over the label centroid of slice `index`
pub fn cell_of(app: &App, index: usize) -> (u16, u16) {
    let slice = app.layout.get(index).unwrap();
    lifecycle_wheel::app::layout::chart_to_cell(app.screen().chart, slice.centroid(LABEL_RADIUS))
}

pub fn draw(app: &App) -> Buffer {
    draw_on(app, WIDTH, HEIGHT)
}

/// Draw on a `width` x `height` terminal; the app's viewport should match
pub fn draw_on(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| lifecycle_wheel::ui::ui(f, app))
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents row by row
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    let mut text = String::new();
    for row in buffer.content.chunks(width) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}
