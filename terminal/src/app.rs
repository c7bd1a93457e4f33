use std::time::Instant;

use common::{Game, GameConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{widgets::Paragraph, Frame};
use tracing::debug;

use crate::render::surface::CellSurface;

#[derive(Debug)]
pub enum AppCommand {
    Quit,
}

/// Hosts the game: owns the clock origin, the cell surface the game draws
/// into, and the live game state itself.
pub struct App {
    game: Game,
    surface: CellSurface,
    started: Instant,
}

impl App {
    pub fn new(config: GameConfig, cols: u16, rows: u16) -> Self {
        let surface = CellSurface::new(
            cols as usize,
            rows as usize,
            config.width,
            config.height,
        );
        App {
            game: Game::new(config),
            surface,
            started: Instant::now(),
        }
    }

    /// Drive one host frame; the game's own loop decides whether a tick
    /// actually runs. Returns whether the surface changed.
    pub fn frame(&mut self) -> bool {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.game.frame(now_ms, &mut self.surface)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppCommand::Quit)
            }
            _ => None,
        }
    }

    /// Mouse cell coordinates map back through the surface scale to the
    /// logical point the click landed on; only left-button presses steer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let point = self
                .surface
                .logical_at(mouse.column as usize, mouse.row as usize);
            debug!("click at cell ({}, {}) -> ({:.1}, {:.1})", mouse.column, mouse.row, point.x, point.y);
            self.game.handle_click(point);
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let text = self.surface.lines().join("\n");
        frame.render_widget(Paragraph::new(text), frame.area());
    }

    pub fn stop(&mut self) {
        self.game.stop();
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn surface(&self) -> &CellSurface {
        &self.surface
    }
}
