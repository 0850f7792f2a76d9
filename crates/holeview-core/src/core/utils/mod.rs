pub mod color;
pub mod sampling;
