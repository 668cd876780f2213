#![allow(dead_code)]

use ovgx::*;
use ovgx_soft::{MemorySurface, SoftConfig};

pub type SoftContext = Context<ovgx_soft::Renderer>;

pub fn context_with(config: SoftConfig, width: u32, height: u32) -> (SoftContext, MemorySurface) {
    let surface = MemorySurface::new(width, height);
    let mut context = Context::create(ovgx_soft::Renderer::create(config));
    context.initialize(surface.clone()).unwrap();
    (context, surface)
}

pub fn context() -> SoftContext {
    context_with(SoftConfig::default(), 64, 64).0
}

pub fn new_path(context: &mut SoftContext) -> PathId {
    context
        .create_path(
            PATH_FORMAT_STANDARD,
            PathDatatype::F32,
            1.0,
            0.0,
            0,
            0,
            PathCapabilities::ALL.bits(),
        )
        .unwrap()
}

/// Axis-aligned square with its corner at `(x, y)`.
pub fn square(context: &mut SoftContext, x: f32, y: f32, size: f32) -> PathId {
    let path = new_path(context);
    context
        .append_path_data(
            path,
            &[
                Segment::abs(SegmentKind::MoveTo),
                Segment::rel(SegmentKind::HLineTo),
                Segment::rel(SegmentKind::VLineTo),
                Segment::rel(SegmentKind::HLineTo),
                Segment::abs(SegmentKind::Close),
            ],
            &[x, y, size, size, -size],
        )
        .unwrap();
    path
}

pub fn solid(context: &mut SoftContext, color: Color) -> PaintId {
    let paint = context.create_paint().unwrap();
    context.set_paint(paint, color).unwrap();
    paint
}
