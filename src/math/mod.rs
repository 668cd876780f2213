mod matrix;
mod points;
mod primitive;

pub use matrix::*;
pub use points::*;
pub use primitive::*;
