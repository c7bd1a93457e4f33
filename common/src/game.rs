use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    APPLE_COLOR, APPLE_RADIUS, Apple, BACKGROUND_COLOR, DEFAULT_TARGET_FPS, Entity, GameLoop,
    INITIAL_SNAKE_LENGTH, PseudoRandom, SNAKE_COLOR, SNAKE_RADIUS, SURFACE_HEIGHT, SURFACE_WIDTH,
    Snake, Surface, TEXT_COLOR, Tick, Vec2, velocity_for_click,
};

/// Everything needed to start a game. `Default` is the classic setup: a
/// 400x400 surface at 60 ticks per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub target_fps: u32,
    pub snake_radius: f32,
    pub apple_radius: f32,
    pub initial_length: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            snake_radius: SNAKE_RADIUS,
            apple_radius: APPLE_RADIUS,
            initial_length: INITIAL_SNAKE_LENGTH,
            seed: 0x5eed,
        }
    }
}

/// Owns the entities, the score and the loop, and orchestrates
/// update-then-render for every accepted tick. The apple and the snake are
/// typed fields addressed directly; their update and render passes always
/// run in the same insertion order (apple first, snake on top of it).
#[derive(Debug, Serialize)]
pub struct Game {
    pub width: f32,
    pub height: f32,
    pub score: u32,
    pub apple: Apple,
    pub snake: Snake,
    #[serde(skip)]
    game_loop: GameLoop,
    #[serde(skip)]
    rng: PseudoRandom,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let bounds = Vec2::new(config.width, config.height);
        let mut rng = PseudoRandom::new(config.seed);

        let mut apple = Apple::new(config.apple_radius, APPLE_COLOR, bounds);
        apple.reset(&mut rng);

        let snake = Snake::new(
            config.snake_radius,
            config.initial_length,
            SNAKE_COLOR,
            bounds,
            config.target_fps as f32,
        );

        Game {
            width: config.width,
            height: config.height,
            score: 0,
            apple,
            snake,
            game_loop: GameLoop::new(config.target_fps),
            rng,
        }
    }

    /// Host frame callback: runs at most one update-then-render pass, gated
    /// by the loop's throttle. Returns whether a tick was accepted.
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> bool {
        match self.game_loop.on_frame(now_ms) {
            Some(tick) => {
                self.update(&tick);
                self.render(&tick, surface);
                true
            }
            None => false,
        }
    }

    /// Advance every entity, then apply the apple rules for this tick.
    pub fn update(&mut self, tick: &Tick) {
        self.apple.update(tick);
        self.snake.update(tick);
        self.check_collisions();
    }

    // The apple is tested against every trail sample in head-to-tail order.
    // Any overlap repositions the apple; only a head overlap also scores and
    // grows the snake, so a body-only overlap moves the apple without
    // scoring. Once the apple has moved, the remaining samples this tick are
    // checked against its new position.
    fn check_collisions(&mut self) {
        for index in 0..self.snake.trail.len() {
            let sample = self.snake.trail[index];
            if self.apple.collides(&sample) {
                self.apple.reset(&mut self.rng);
                debug!(
                    "apple hit by trail sample {index}, moved to ({:.1}, {:.1})",
                    self.apple.position.x, self.apple.position.y
                );
                if index == 0 {
                    self.snake.length += 1;
                    self.score += 1;
                    debug!("apple eaten, score {}", self.score);
                }
            }
        }
    }

    /// Clear the background, draw the entities in insertion order, then the
    /// score overlay on top.
    pub fn render(&mut self, tick: &Tick, surface: &mut dyn Surface) {
        surface.fill_rect(Vec2::ZERO, self.width, self.height, BACKGROUND_COLOR);
        self.apple.render(surface);
        self.snake.render(surface);

        let overlay = format!("score {}  {:>3.0} fps", self.score, tick.delta);
        surface.draw_text(Vec2::new(10.0, 10.0), &overlay, TEXT_COLOR);
    }

    /// Pointer input: steer the snake toward the dominant axis of the click.
    /// Applied immediately; the next accepted tick moves with it.
    pub fn handle_click(&mut self, point: Vec2) {
        let velocity = velocity_for_click(self.snake.position, point);
        self.snake.set_velocity(velocity);
    }

    pub fn stop(&mut self) {
        self.game_loop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.game_loop.is_stopped()
    }

    pub fn current_tick(&self) -> u64 {
        self.game_loop.elapsed()
    }

    pub fn state_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Circle, Color};

    fn tick() -> Tick {
        Tick {
            elapsed: 0,
            delta: 60.0,
        }
    }

    #[test]
    fn head_collision_scores_grows_and_moves_the_apple() {
        let mut game = Game::new(GameConfig::default());
        // Park the snake on the apple so the post-move head sample overlaps.
        game.snake.position = game.apple.position;
        let apple_before = game.apple.position;

        game.update(&tick());

        assert_eq!(game.score, 1);
        assert_eq!(game.snake.length, INITIAL_SNAKE_LENGTH + 1);
        assert_ne!(game.apple.position, apple_before);
    }

    #[test]
    fn body_collision_moves_the_apple_without_scoring() {
        let mut game = Game::new(GameConfig::default());
        // Keep the head far away and plant a stale body sample on the apple.
        game.snake.position = Vec2::new(50.0, 50.0);
        game.apple.position = Vec2::new(300.0, 300.0);
        let apple_before = game.apple.position;
        game.snake
            .trail
            .push_back(Circle::new(apple_before, game.snake.radius));

        game.update(&tick());

        assert_eq!(game.score, 0);
        assert_eq!(game.snake.length, INITIAL_SNAKE_LENGTH);
        assert_ne!(game.apple.position, apple_before);
    }

    #[test]
    fn missing_the_apple_changes_nothing() {
        let mut game = Game::new(GameConfig::default());
        game.snake.position = Vec2::new(50.0, 50.0);
        game.apple.position = Vec2::new(300.0, 300.0);

        game.update(&tick());

        assert_eq!(game.score, 0);
        assert_eq!(game.snake.length, INITIAL_SNAKE_LENGTH);
        assert_eq!(game.apple.position, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn click_steers_the_live_snake() {
        let mut game = Game::new(GameConfig::default());
        let head = game.snake.position;
        game.handle_click(Vec2::new(head.x, head.y - 100.0));
        assert_eq!(game.snake.velocity, Vec2::new(0.0, -1.0));
    }

    // Records primitive calls so render order can be asserted headlessly.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, _origin: Vec2, _width: f32, _height: f32, _color: Color) {
            self.calls.push("rect".into());
        }
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
            self.calls.push("circle".into());
        }
        fn draw_text(&mut self, _origin: Vec2, text: &str, _color: Color) {
            self.calls.push(format!("text:{text}"));
        }
    }

    #[test]
    fn render_clears_draws_entities_then_overlay() {
        let mut game = Game::new(GameConfig::default());
        game.snake.position = Vec2::new(50.0, 50.0);
        game.apple.position = Vec2::new(300.0, 300.0);
        game.update(&tick());

        let mut surface = RecordingSurface::default();
        game.render(&tick(), &mut surface);

        assert_eq!(surface.calls.first().map(String::as_str), Some("rect"));
        assert!(surface.calls.last().unwrap().starts_with("text:score 0"));
        // Apple plus one trail sample after a single tick.
        let circles = surface.calls.iter().filter(|c| *c == "circle").count();
        assert_eq!(circles, 2);
    }

    #[test]
    fn frame_is_throttled_by_the_loop() {
        let mut game = Game::new(GameConfig::default());
        game.snake.position = Vec2::new(50.0, 50.0);
        game.apple.position = Vec2::new(300.0, 300.0);
        let mut surface = RecordingSurface::default();

        assert!(game.frame(0.0, &mut surface));
        assert!(!game.frame(1.0, &mut surface));
        assert!(game.frame(17.0, &mut surface));
        assert_eq!(game.current_tick(), 2);

        game.stop();
        assert!(!game.frame(1000.0, &mut surface));
    }

    #[test]
    fn state_snapshot_serializes() {
        let game = Game::new(GameConfig::default());
        let json = game.state_json().unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"snake\""));
    }
}
