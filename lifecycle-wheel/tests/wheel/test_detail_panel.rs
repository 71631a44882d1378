//! Detail panel content and the injected markup renderer

use lifecycle_wheel::app::App;
use lifecycle_wheel::markup::{Block, Document, Inline, MarkupRenderer};
use lifecycle_wheel::phases;
use lifecycle_wheel::ui::detail_lines;

/// Renderer that ignores markup and returns each source line verbatim
struct VerbatimRenderer;

impl MarkupRenderer for VerbatimRenderer {
    fn render(&self, source: &str) -> Document {
        Document {
            blocks: source
                .lines()
                .map(|line| Block::Paragraph {
                    spans: vec![Inline::plain(line)],
                })
                .collect(),
        }
    }

    fn render_html(&self, source: &str) -> String {
        source.to_string()
    }
}

#[test]
fn test_panel_uses_injected_renderer() {
    let app = App::with_renderer(phases::all(), Box::new(VerbatimRenderer)).unwrap();
    let phase = phases::by_id(2).unwrap();
    let lines: Vec<String> = detail_lines(phase, app.markup.as_ref())
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert!(lines.contains(&"# Project Creation".to_string()));
    assert!(lines.contains(&" Lorem ipsum dolor sit amet...".to_string()));
}

#[test]
fn test_default_renderer_structures_full_text() {
    let app = App::new().unwrap();
    let phase = phases::by_id(8).unwrap();
    let doc = app.markup.render(phase.full_text);
    assert!(matches!(
        &doc.blocks[0],
        Block::Heading { level: 1, spans } if spans[0].text == "Verification and Reuse of Data"
    ));
    assert!(matches!(&doc.blocks[1], Block::Paragraph { .. }));
}

#[test]
fn test_every_phase_renders_heading_and_body() {
    let app = App::new().unwrap();
    for phase in phases::all() {
        let doc = app.markup.render(phase.full_text);
        assert_eq!(doc.blocks.len(), 2, "phase {}", phase.id);
    }
}

#[test]
fn test_line_count_tracks_selection() {
    let mut app = App::new().unwrap();
    app.viewport = ratatui::layout::Rect::new(0, 0, 80, 24);
    assert_eq!(app.detail_line_count(), 0);
    app.click(0);
    let logical = detail_lines(app.active_phase().unwrap(), app.markup.as_ref()).len() as u16;
    assert!(app.detail_line_count() > logical);
}
