mod arena;
mod core;
mod core_batch;
mod core_draw;
mod core_font;
mod core_image;
mod core_paint;
mod core_path;
mod core_transform;
mod transform;

pub use self::core::*;
use arena::Key;
pub use transform::TransformStack;

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) Key);
    };
}

resource_id!(
    /// Handle of a path created by [`Context::create_path`].
    PathId
);
resource_id!(PaintId);
resource_id!(ImageId);
resource_id!(FontId);
resource_id!(BatchId);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Initialized,
    Terminated,
}

/// Selects which matrix the transform operations act on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixMode {
    Surface,
    PathUser,
    ImageUser,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageMode {
    Normal,
    Multiply,
    Stencil,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageFormat {
    SRgba8888,
    SRgbx8888,
    LRgba8888,
    SL8,
    A8,
}

bitflags! {
    pub struct PaintMode: u32 {
        const STROKE = 1 << 0;
        const FILL = 1 << 1;
    }
}

bitflags! {
    pub struct ImageQuality: u32 {
        const NONANTIALIASED = 1 << 0;
        const FASTER = 1 << 1;
        const BETTER = 1 << 2;
    }
}
