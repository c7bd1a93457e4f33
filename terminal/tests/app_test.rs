use common::{GameConfig, Vec2};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use terminal::app::{App, AppCommand};

fn test_app() -> App {
    App::new(GameConfig::default(), 80, 40)
}

#[test]
fn first_frame_runs_a_tick_and_draws() {
    let mut app = test_app();
    assert!(app.frame());
    assert_eq!(app.game().current_tick(), 1);

    let drawn = app
        .surface()
        .lines()
        .iter()
        .any(|line| line.chars().any(|ch| ch != ' '));
    assert!(drawn);
}

#[test]
fn quit_keys_are_recognized() {
    let mut app = test_app();
    assert!(matches!(
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
        Some(AppCommand::Quit)
    ));
    assert!(matches!(
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        Some(AppCommand::Quit)
    ));
    assert!(matches!(
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(AppCommand::Quit)
    ));
    assert!(app
        .handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
        .is_none());
}

#[test]
fn left_click_above_the_head_steers_up() {
    let mut app = test_app();
    // Snake starts at the surface center (200, 200); cell (40, 10) sits
    // well above it.
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 40,
        row: 10,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.game().snake.velocity, Vec2::new(0.0, -1.0));
}

#[test]
fn other_mouse_events_are_ignored() {
    let mut app = test_app();
    let before = app.game().snake.velocity;
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 40,
        row: 10,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.game().snake.velocity, before);
}

#[test]
fn stop_blocks_further_ticks() {
    let mut app = test_app();
    assert!(app.frame());
    app.stop();
    assert!(!app.frame());
    assert_eq!(app.game().current_tick(), 1);
}
