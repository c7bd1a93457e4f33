use crate::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color token; alpha in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }
}

/// Drawing-surface contract the game renders through.
///
/// Coordinates are logical units; scaling to device cells or pixels is the
/// implementation's concern. Style is carried by every call, so no stroke or
/// fill state leaks from one primitive to the next.
pub trait Surface {
    fn fill_rect(&mut self, origin: Vec2, width: f32, height: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_text(&mut self, origin: Vec2, text: &str, color: Color);
}
