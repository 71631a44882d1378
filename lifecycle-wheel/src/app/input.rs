//! Terminal input: turns crossterm events into hover and selection transitions

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::layout::{cell_to_chart, chart_to_cell, screen_layout, ScreenLayout};
use super::*;
use crate::chart::LABEL_RADIUS;
use crate::ui::{detail_body, detail_paragraph};

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.viewport = Rect::new(0, 0, width, height),
            _ => {}
        }
    }

    pub fn screen(&self) -> ScreenLayout {
        screen_layout(self.viewport, self.active.is_some())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let screen = self.screen();
        let position = Position::new(mouse.column, mouse.row);

        // The detail panel is drawn over the chart and swallows pointer events
        if screen.detail.is_some_and(|r| r.contains(position)) {
            self.track_pointer(None, mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if screen.close_button.is_some_and(|r| r.contains(position)) {
                        self.close_detail();
                    }
                }
                MouseEventKind::ScrollDown => self.scroll_detail_down(),
                MouseEventKind::ScrollUp => self.scroll_detail_up(),
                _ => {}
            }
            return;
        }

        let slice = cell_to_chart(screen.chart, mouse.column, mouse.row)
            .and_then(|point| self.layout.hit_test(point));

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.track_pointer(slice, mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.track_pointer(slice, mouse.column, mouse.row);
                if let Some(index) = slice {
                    self.click(index);
                }
            }
            _ => {}
        }
    }

    /// Synthesize enter/move/leave from the slice now under the pointer
    fn track_pointer(&mut self, slice: Option<usize>, x: u16, y: u16) {
        let previous = self.hover.slice;
        if previous == slice {
            self.pointer_move(x, y);
            return;
        }
        if let Some(old) = previous {
            self.pointer_leave(old);
        }
        if let Some(new) = slice {
            self.pointer_enter(new, x, y);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Esc | KeyCode::Char('c') => self.close_detail(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.focus_step(1),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.focus_step(-1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(index) = self.hover.slice {
                    self.click(index);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detail_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_detail_up(),
            _ => {}
        }
    }

    /// Move the keyboard hover `step` slices around the wheel.
    ///
    /// The cursor is parked on the slice's label centroid so the tooltip shows
    /// up next to the slice.
    fn focus_step(&mut self, step: isize) {
        let count = self.layout.len() as isize;
        let next = match self.hover.slice {
            Some(current) => (current as isize + step).rem_euclid(count),
            None if step >= 0 => 0,
            None => count - 1,
        };
        let next = next as usize;

        let Some(slice) = self.layout.get(next) else {
            return;
        };
        let (x, y) = chart_to_cell(self.screen().chart, slice.centroid(LABEL_RADIUS));
        self.track_pointer(Some(next), x, y);
    }

    fn scroll_detail_down(&mut self) {
        self.detail_scroll = self
            .detail_scroll
            .saturating_add(1)
            .min(self.detail_scroll_limit());
    }

    fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Rows the active phase's detail text takes once wrapped to the panel width
    pub fn detail_line_count(&self) -> u16 {
        match (self.active_phase(), self.screen().detail) {
            (Some(phase), Some(panel)) => {
                let rows = detail_paragraph(phase, self.markup.as_ref())
                    .line_count(detail_body(panel).width);
                u16::try_from(rows).unwrap_or(u16::MAX)
            }
            _ => 0,
        }
    }

    /// Largest scroll offset that still leaves the panel body filled
    pub fn detail_scroll_limit(&self) -> u16 {
        let visible = self.screen().detail.map_or(0, |panel| detail_body(panel).height);
        self.detail_line_count().saturating_sub(visible)
    }
}
