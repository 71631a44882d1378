//! Terminal rendering through ratatui's TestBackend

use super::common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lifecycle_wheel::app::App;
use lifecycle_wheel::chart::slice_color;
use ratatui::layout::Rect;
use ratatui::style::Color;

#[test]
fn test_initial_screen() {
    let app = sized_app();
    let text = buffer_text(&draw(&app));
    assert!(text.contains("Research Life Cycle"));
    assert!(text.contains("Quit"));
    assert!(!text.contains("[ Close ]"));
    assert!(!text.contains("Policy:"));
}

#[test]
fn test_labels_are_drawn_one_word_per_line() {
    let app = sized_app();
    let text = buffer_text(&draw(&app));
    for word in ["Research", "Question", "Definition", "Preservation", "Data-reuse"] {
        assert!(text.contains(word), "missing label word {word}");
    }
}

#[test]
fn test_wedges_use_palette_colors() {
    let app = sized_app();
    let buffer = draw(&app);
    for index in 0..app.phases.len() {
        let color = Color::from(slice_color(index));
        assert!(
            buffer.content.iter().any(|cell| cell.fg == color),
            "slice {index} color not drawn"
        );
    }
}

#[test]
fn test_hover_shows_tooltip() {
    let mut app = sized_app();
    let (x, y) = cell_of(&app, 2);
    app.pointer_enter(2, x, y);
    let text = buffer_text(&draw(&app));
    assert!(text.contains("Policy:"));
    assert!(text.contains("Follow GDPR"));
}

#[test]
fn test_click_opens_and_close_hides_panel() {
    let mut app = sized_app();
    app.click(index_of(3));
    let text = buffer_text(&draw(&app));
    assert!(text.contains("[ Close ]"));
    assert!(text.contains("Gather data from"));
    assert!(text.contains("Secure server"));
    assert!(text.contains("Lorem ipsum"));

    app.close_detail();
    let text = buffer_text(&draw(&app));
    assert!(!text.contains("[ Close ]"));
    assert!(!text.contains("Lorem ipsum"));
}

#[test]
fn test_full_text_scrolls_into_view_on_small_terminal() {
    let mut app = App::new().unwrap();
    app.viewport = Rect::new(0, 0, 80, 24);
    app.click(index_of(3));

    let text = buffer_text(&draw_on(&app, 80, 24));
    assert!(text.contains("Description:"));
    assert!(!text.contains("Lorem ipsum"));
    assert!(app.detail_scroll_limit() > 0);

    for _ in 0..30 {
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    }
    assert_eq!(app.detail_scroll, app.detail_scroll_limit());
    let text = buffer_text(&draw_on(&app, 80, 24));
    assert!(text.contains("Lorem ipsum"));
}

#[test]
fn test_tiny_terminal_renders() {
    let app = lifecycle_wheel::app::App::new().unwrap();
    let mut terminal =
        ratatui::Terminal::new(ratatui::backend::TestBackend::new(4, 3)).unwrap();
    terminal
        .draw(|f| lifecycle_wheel::ui::ui(f, &app))
        .unwrap();
}
