use crate::Color;

/// Logical width of the play surface
pub const SURFACE_WIDTH: f32 = 400.0;

/// Logical height of the play surface
pub const SURFACE_HEIGHT: f32 = 400.0;

/// Default simulation rate for the game loop in ticks per second
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Dimensionless speed factor applied to snake displacement each tick
pub const SNAKE_SPEED: f32 = 10.0;

/// Radius of the snake's head and of every trail sample
pub const SNAKE_RADIUS: f32 = 10.0;

/// Radius of the apple
pub const APPLE_RADIUS: f32 = 10.0;

/// Number of trail samples the snake starts with
pub const INITIAL_SNAKE_LENGTH: usize = 10;

pub const BACKGROUND_COLOR: Color = Color::rgb(253, 253, 253);
pub const APPLE_COLOR: Color = Color::rgb(67, 77, 67);
pub const SNAKE_COLOR: Color = Color::rgb(16, 16, 16);
pub const TEXT_COLOR: Color = Color::rgb(67, 77, 67);
