mod apple;
mod constants;
mod entity;
mod game;
mod game_loop;
mod input;
mod snake;
mod surface;
mod vec2;

pub mod util;

pub use apple::*;
pub use constants::*;
pub use entity::*;
pub use game::*;
pub use game_loop::*;
pub use input::*;
pub use snake::*;
pub use surface::*;
pub use vec2::*;
pub use util::PseudoRandom;
