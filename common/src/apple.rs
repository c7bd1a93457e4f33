use serde::{Deserialize, Serialize};

use crate::{Circle, Color, Entity, PseudoRandom, Surface, Tick, Vec2};

/// The food item. A single apple lives for the whole game; eating it
/// repositions it instead of destroying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apple {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
    bounds: Vec2,
}

impl Apple {
    pub fn new(radius: f32, color: Color, bounds: Vec2) -> Self {
        Apple {
            position: Vec2::new(bounds.x / 2.0, bounds.y / 2.0),
            radius,
            color,
            bounds,
        }
    }

    /// Move to a uniformly random point that keeps the whole circle on the
    /// surface: both coordinates are drawn independently from
    /// [radius, dimension - radius].
    pub fn reset(&mut self, rng: &mut PseudoRandom) {
        self.position.x = rng.range_f32(self.radius, self.bounds.x - self.radius);
        self.position.y = rng.range_f32(self.radius, self.bounds.y - self.radius);
    }

    /// Closed-boundary overlap test against a trail sample. Pure.
    pub fn collides(&self, other: &Circle) -> bool {
        Circle::new(self.position, self.radius).intersects(other)
    }
}

impl Entity for Apple {
    // Static between resets.
    fn update(&mut self, _tick: &Tick) {}

    fn render(&mut self, surface: &mut dyn Surface) {
        surface.fill_circle(self.position, self.radius, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{APPLE_COLOR, APPLE_RADIUS, SURFACE_HEIGHT, SURFACE_WIDTH};

    #[test]
    fn reset_keeps_apple_on_the_surface() {
        let bounds = Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        let mut apple = Apple::new(APPLE_RADIUS, APPLE_COLOR, bounds);
        let mut rng = PseudoRandom::new(1);

        for _ in 0..1_000 {
            apple.reset(&mut rng);
            assert!(apple.position.x >= apple.radius);
            assert!(apple.position.x <= bounds.x - apple.radius);
            assert!(apple.position.y >= apple.radius);
            assert!(apple.position.y <= bounds.y - apple.radius);
        }
    }

    #[test]
    fn collides_at_exact_tangency() {
        let mut apple = Apple::new(10.0, APPLE_COLOR, Vec2::new(400.0, 400.0));
        apple.position = Vec2::new(100.0, 100.0);

        let tangent = Circle::new(Vec2::new(120.0, 100.0), 10.0);
        assert!(apple.collides(&tangent));

        let apart = Circle::new(Vec2::new(120.1, 100.0), 10.0);
        assert!(!apple.collides(&apart));
    }
}
