pub mod grid;
pub mod surface;
