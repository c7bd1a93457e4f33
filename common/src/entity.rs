use crate::{Surface, Tick};

/// Capability surface shared by everything the game steps and draws. The two
/// implementors keep no common base state; the game addresses them through
/// typed fields and runs their passes in a fixed insertion order.
pub trait Entity {
    fn update(&mut self, tick: &Tick);

    /// May mutate the entity: the snake trims its trail here.
    fn render(&mut self, surface: &mut dyn Surface);
}
