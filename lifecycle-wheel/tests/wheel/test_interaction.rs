//! Hover and selection behaviour

use super::common::*;
use lifecycle_wheel::chart::Emphasis;
use lifecycle_wheel::phases;

#[test]
fn test_hover_enter_copies_phase_fields() {
    for (i, phase) in phases::all().iter().enumerate() {
        let mut app = sized_app();
        app.pointer_enter(i, 3, 4);
        assert!(app.hover.visible);
        assert_eq!(app.hover.title, phase.title);
        assert_eq!(app.hover.description, phase.description);
        assert_eq!(app.hover.storage, phase.storage);
        assert_eq!(app.hover.policy, phase.policy);
    }
}

#[test]
fn test_second_click_replaces_selection() {
    let mut app = sized_app();
    app.click(1);
    app.click(6);
    assert_eq!(app.active_phase().map(|p| p.id), Some(7));
}

#[test]
fn test_click_then_close_clears_selection() {
    let mut app = sized_app();
    app.click(4);
    app.close_detail();
    assert!(app.active_phase().is_none());
}

#[test]
fn test_stroke_survives_leave_only_when_selected() {
    let mut app = sized_app();
    app.click(3);

    for i in 0..app.phases.len() {
        app.pointer_enter(i, 0, 0);
        assert_eq!(app.emphasis(i), Emphasis::Hovered);
        app.pointer_leave(i);
        let expected = if i == 3 { Emphasis::Selected } else { Emphasis::None };
        assert_eq!(app.emphasis(i), expected, "slice {i}");
    }
}

#[test]
fn test_hover_does_not_touch_selection() {
    let mut app = sized_app();
    app.click(0);
    app.pointer_enter(5, 1, 1);
    app.pointer_leave(5);
    assert_eq!(app.active, Some(0));
}

#[test]
fn test_mouse_sweep_leaves_before_entering() {
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

    let mut app = sized_app();
    let (x0, y0) = cell_of(&app, 0);
    let (x1, y1) = cell_of(&app, 1);
    let moved = |column, row| MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };

    app.handle_mouse(moved(x0, y0));
    assert_eq!(app.hover.title, "Research Question Definition");
    app.handle_mouse(moved(x1, y1));
    assert_eq!(app.hovered(), Some(1));
    assert_eq!(app.hover.title, "Project Creation");
    assert_eq!(app.emphasis(0), Emphasis::None);
}

#[test]
fn test_collection_phase_example() {
    let mut app = sized_app();
    app.click(index_of(3));

    let phase = app.active_phase().unwrap();
    assert_eq!(phase.title, "Collection, Storage and Documentation");
    assert_eq!(
        phase.description,
        "Gather data from experiments, surveys, or external sources."
    );
    assert_eq!(
        phase.storage,
        "Secure server, cloud storage, version-controlled repositories"
    );

    app.close_detail();
    assert!(app.screen().detail.is_none());
}
