#[macro_use]
extern crate bitflags;

mod color;
mod context;
pub mod error;
mod math;
pub mod paint;
pub mod path;
pub mod renderer;

pub use color::*;
pub use context::{
    BatchId, Context, FontId, ImageFormat, ImageId, ImageMode, ImageQuality, LifecycleState,
    MatrixMode, PaintId, PaintMode, PathId, TransformStack,
};
pub use error::{ErrorCode, VgError};
pub use math::*;
pub use paint::*;
pub use path::*;
pub use renderer::Renderer;
