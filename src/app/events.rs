// Translate terminal input into picker actions

use crate::app::state::App;
use crate::app::ui::ScreenLayout;
use crate::marker::Direction;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

/// Apply one terminal event to the app. `layout` must be the layout of the
/// last drawn frame so mouse positions match what is on screen.
pub fn handle_event(app: &mut App, event: &Event, layout: &ScreenLayout, now: Instant) {
    match event {
        Event::Key(key) => handle_key(app, key, now),
        Event::Mouse(mouse) => handle_mouse(app, mouse, layout, now),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: &KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('r') => app.reset(now),
        code => {
            if let Some(direction) = direction_for(code) {
                app.press(direction, now);
            }
        }
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        _ => None,
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent, layout: &ScreenLayout, now: Instant) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(direction) = layout.button_at(column, row) {
                app.press(direction, now);
            } else if layout.board.contains(column, row) {
                app.pointer_down(layout.board.pixel_at(column, row), now);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.pointer_move(layout.board.pixel_at(column, row), now);
        }
        MouseEventKind::Up(MouseButton::Left) => app.pointer_up(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn setup() -> (App, ScreenLayout) {
        let app = App::with_seed(PickerConfig::default(), 5);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 45), &app);
        (app, layout)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, layout) = setup();
        handle_event(&mut app, &key(KeyCode::Char('q')), &layout, Instant::now());
        assert!(app.should_quit);

        let (mut app, layout) = setup();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_event(&mut app, &ctrl_c, &layout, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrow_key_starts_nudge() {
        let (mut app, layout) = setup();
        let now = Instant::now();
        handle_event(&mut app, &key(KeyCode::Right), &layout, now);
        assert!(app.last_action().starts_with("Right -> "));
    }

    #[test]
    fn test_button_click_presses_button() {
        let (mut app, layout) = setup();
        let (_, down) = layout.buttons[3];
        let click = mouse(MouseEventKind::Down(MouseButton::Left), down.x + 2, down.y + 1);
        handle_event(&mut app, &click, &layout, Instant::now());
        assert!(app.last_action().starts_with("Down -> "));
    }

    #[test]
    fn test_mouse_drag_moves_marker() {
        let (mut app, layout) = setup();
        let now = Instant::now();
        let board = layout.board.area;

        handle_event(
            &mut app,
            &mouse(MouseEventKind::Down(MouseButton::Left), board.x + 1, board.y),
            &layout,
            now,
        );
        assert!(app.marker().is_dragging());

        // Five columns and two rows = one cell pitch on each axis
        handle_event(
            &mut app,
            &mouse(MouseEventKind::Drag(MouseButton::Left), board.x + 6, board.y + 2),
            &layout,
            now,
        );
        handle_event(
            &mut app,
            &mouse(MouseEventKind::Up(MouseButton::Left), board.x + 6, board.y + 2),
            &layout,
            now,
        );

        assert!(!app.marker().is_dragging());
        assert_eq!(app.selected(), 12);
        // Dragging cancels animation, so nothing changes later
        app.tick(now + Duration::from_secs(2));
        assert_eq!(app.selected(), 12);
    }
}
