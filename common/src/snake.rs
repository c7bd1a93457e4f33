use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Circle, Color, Entity, SNAKE_SPEED, Surface, Tick, Vec2};

/// The player. Position is continuous; the trail of past head positions is
/// both the rendered body and the hit-test volume. Trail order is
/// most-recent-first, so index 0 is the head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub position: Vec2,
    pub radius: f32,
    pub length: usize,
    /// Cardinal direction: each component is -1, 0 or 1, at most one nonzero.
    pub velocity: Vec2,
    pub trail: VecDeque<Circle>,
    color: Color,
    bounds: Vec2,
    ticks_per_second: f32,
}

impl Snake {
    pub fn new(
        radius: f32,
        length: usize,
        color: Color,
        bounds: Vec2,
        ticks_per_second: f32,
    ) -> Self {
        Snake {
            position: Vec2::new(bounds.x / 2.0, bounds.y / 2.0),
            radius,
            length,
            velocity: Vec2::new(1.0, 0.0),
            trail: VecDeque::new(),
            color,
            bounds,
            ticks_per_second,
        }
    }

    /// Last input wins; the next accepted tick picks it up.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn head(&self) -> Option<&Circle> {
        self.trail.front()
    }

    // Toroidal wraparound: leaving [radius, dimension - radius] on an axis
    // re-enters from the opposite edge.
    fn wrap(&mut self) {
        let r = self.radius;
        if self.position.x > self.bounds.x - r {
            self.position.x = r;
        } else if self.position.x < r {
            self.position.x = self.bounds.x - r;
        }
        if self.position.y > self.bounds.y - r {
            self.position.y = r;
        } else if self.position.y < r {
            self.position.y = self.bounds.y - r;
        }
    }
}

impl Entity for Snake {
    fn update(&mut self, _tick: &Tick) {
        // Constant displacement per tick. Dividing by the configured tick
        // rate keeps the on-surface speed the same whatever rate the loop
        // runs at.
        let step = self.radius * SNAKE_SPEED / self.ticks_per_second;
        self.position += self.velocity * step;
        self.trail.push_front(Circle::new(self.position, self.radius));
        self.wrap();
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        // Everything older than `length` is discarded for good; the trail
        // grows by one sample per tick and is bounded back down here.
        self.trail.truncate(self.length);
        for (index, sample) in self.trail.iter().enumerate() {
            let opacity = 1.0 - index as f32 / self.length as f32;
            surface.fill_circle(
                sample.center,
                sample.radius,
                self.color.with_alpha(opacity),
            );
        }
    }
}
