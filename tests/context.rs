mod common;

use common::*;
use ovgx::*;
use ovgx_soft::{MemorySurface, SoftConfig, Vertex};
use std::convert::TryInto;
use std::mem::size_of;

#[test]
fn fill_dump_terminate() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 10.0);
    let paint = solid(&mut context, Color::rgb(1.0, 0.0, 0.0));
    context.set_fill_paint(Some(paint)).unwrap();
    context.set_path(Some(path)).unwrap();

    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    context.fill().unwrap();
    context.end_batch(batch).unwrap();

    let dump = context.dump_batch(batch).unwrap();
    assert_eq!(dump.len(), 6 * size_of::<Vertex>());
    assert_eq!(context.triangles_count(), 2);
    assert_eq!(context.draw_call_count(), 1);

    context.terminate().unwrap();
    assert_eq!(context.state(), LifecycleState::Terminated);
    assert_eq!(context.renderer().live_resources(), 0);
    assert!(matches!(
        context.fill(),
        Err(VgError::InvalidState { op: "fill", .. })
    ));
    assert_eq!(context.get_error(), ErrorCode::InvalidState);
}

fn vertex_at(dump: &[u8], index: usize) -> Point {
    let at = index * size_of::<Vertex>();
    let x = f32::from_ne_bytes(dump[at..at + 4].try_into().unwrap());
    let y = f32::from_ne_bytes(dump[at + 4..at + 8].try_into().unwrap());
    Point::new(x, y)
}

#[test]
fn scaled_square_lands_on_surface() {
    let (mut context, _surface) = context_with(SoftConfig::default(), 800, 600);
    context.set_matrix_mode(MatrixMode::PathUser);
    context.set_identity().unwrap();
    context.translate(100.0, 50.0).unwrap();
    context.scale(2.0, 2.0).unwrap();

    let path = square(&mut context, 0.0, 0.0, 10.0);
    let paint = solid(&mut context, Color::rgb(0.0, 1.0, 0.0));
    context.set_fill_paint(Some(paint)).unwrap();
    context.set_path(Some(path)).unwrap();

    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    context.fill().unwrap();
    context.end_batch(batch).unwrap();

    let dump = context.dump_batch(batch).unwrap();
    assert!(!dump.is_empty());
    assert_eq!(dump.len() % size_of::<Vertex>(), 0);
    assert_eq!(vertex_at(dump, 0), Point::new(100.0, 50.0));
    assert_eq!(vertex_at(dump, 2), Point::new(120.0, 70.0));

    context.terminate().unwrap();
    assert!(matches!(context.fill(), Err(VgError::InvalidState { .. })));
    assert_eq!(context.get_error(), ErrorCode::InvalidState);
}

#[test]
fn state_setters_need_an_initialized_context() {
    let mut context = context();
    context.terminate().unwrap();

    assert!(matches!(
        context.set_image_mode(ImageMode::Multiply),
        Err(VgError::InvalidState { op: "set_image_mode", .. })
    ));
    assert_eq!(context.image_mode(), ImageMode::Normal);
    assert!(matches!(
        context.set_fill_paint(None),
        Err(VgError::InvalidState { op: "bind_paint", .. })
    ));
    assert!(context.set_stroke_paint(None).is_err());
    assert_eq!(context.get_error(), ErrorCode::InvalidState);
}

#[test]
fn get_error_clears_the_slot() {
    let mut context = context();
    assert!(context.fill().is_err());
    assert_ne!(context.get_error(), ErrorCode::NoError);
    assert_eq!(context.get_error(), ErrorCode::NoError);
}

#[test]
fn error_slot_keeps_the_first_error() {
    let mut context = context();
    assert!(context.clear(0, 0, -1, 1).is_err());
    assert!(context.fill().is_err());
    assert!(context.create_image(ImageFormat::A8, 0, 0, ImageQuality::FASTER).is_none());
    assert_eq!(context.get_error(), ErrorCode::IllegalArgument);
    assert_eq!(context.get_error(), ErrorCode::NoError);
}

#[test]
fn failed_initialize_can_be_retried() {
    let surface = MemorySurface::new(0, 0);
    let mut context = Context::create(ovgx_soft::Renderer::create(SoftConfig::default()));
    assert!(context.initialize(surface.clone()).is_err());
    assert_eq!(context.state(), LifecycleState::Uninitialized);
    assert_eq!(context.get_error(), ErrorCode::Backend);

    surface.set_size(32, 16);
    context.initialize(surface).unwrap();
    assert_eq!(context.state(), LifecycleState::Initialized);
    assert_eq!(context.extent(), Extent::new(32.0, 16.0));
}

#[test]
fn lifecycle_is_one_way() {
    let mut context = context();
    assert!(context.initialize(MemorySurface::new(8, 8)).is_err());
    context.terminate().unwrap();
    assert!(context.initialize(MemorySurface::new(8, 8)).is_err());
    assert!(context.terminate().is_err());
    assert_eq!(context.get_error(), ErrorCode::InvalidState);
}

#[test]
fn factories_need_an_initialized_context() {
    let mut context = Context::create(ovgx_soft::Renderer::create(SoftConfig::default()));
    assert!(context.create_paint().is_none());
    assert_eq!(context.get_error(), ErrorCode::InvalidState);
    assert!(context.create_batch().is_none());
    assert_eq!(context.get_error(), ErrorCode::InvalidState);
}

#[test]
fn resize_follows_the_surface() {
    let (mut context, surface) = context_with(SoftConfig::default(), 8, 8);
    surface.set_size(20, 10);
    context.resize().unwrap();
    assert_eq!(context.extent(), Extent::new(20.0, 10.0));
    assert_eq!(context.renderer().target_size(), Some((20, 10)));
}

#[test]
fn second_start_batch_is_rejected() {
    let mut context = context();
    let first = context.create_batch().unwrap();
    let second = context.create_batch().unwrap();
    context.start_batch(first).unwrap();

    assert!(matches!(
        context.start_batch(second),
        Err(VgError::BatchAlreadyOpen)
    ));
    assert_eq!(context.get_error(), ErrorCode::ContractViolation);
    assert_eq!(context.current_batch(), Some(first));

    assert!(matches!(
        context.end_batch(second),
        Err(VgError::BatchMismatch)
    ));
    context.end_batch(first).unwrap();
    assert_eq!(context.current_batch(), None);
}

#[test]
fn drawing_needs_an_open_batch() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 4.0);
    let paint = solid(&mut context, Color::rgb(1.0, 1.0, 1.0));
    context.set_fill_paint(Some(paint)).unwrap();
    assert!(matches!(
        context.draw_path(path, PaintMode::FILL),
        Err(VgError::NoOpenBatch)
    ));

    let batch = context.create_batch().unwrap();
    assert!(matches!(context.end_batch(batch), Err(VgError::NoOpenBatch)));
    assert!(matches!(
        context.dump_batch(batch),
        Err(VgError::BatchMismatch)
    ));
}

#[test]
fn drawing_needs_a_bound_paint() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 4.0);
    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    assert!(matches!(
        context.draw_path(path, PaintMode::STROKE),
        Err(VgError::NoPaint)
    ));
    assert_eq!(context.get_error(), ErrorCode::ContractViolation);
}

#[test]
fn fill_without_bound_path_is_illegal() {
    let mut context = context();
    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    assert!(context.fill().is_err());
    assert_eq!(context.get_error(), ErrorCode::IllegalArgument);
}

#[test]
fn destroying_open_batch_closes_the_session() {
    let mut context = context();
    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    context.destroy_batch(Some(batch));
    assert_eq!(context.current_batch(), None);

    let other = context.create_batch().unwrap();
    context.start_batch(other).unwrap();
}

#[test]
fn dump_is_valid_while_open() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 4.0);
    let paint = solid(&mut context, Color::rgb(1.0, 1.0, 1.0));
    context.set_paint_modes(Some(paint), PaintMode::FILL | PaintMode::STROKE)
        .unwrap();
    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    context.draw_path(path, PaintMode::FILL).unwrap();
    assert_eq!(context.dump_batch(batch).unwrap().len(), 6 * size_of::<Vertex>());
}

#[test]
fn start_batch_discards_previous_contents() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 4.0);
    let paint = solid(&mut context, Color::rgb(1.0, 1.0, 1.0));
    context.set_fill_paint(Some(paint)).unwrap();
    let batch = context.create_batch().unwrap();

    context.start_batch(batch).unwrap();
    context.draw_path(path, PaintMode::FILL).unwrap();
    context.draw_path(path, PaintMode::FILL).unwrap();
    context.end_batch(batch).unwrap();
    assert_eq!(context.dump_batch(batch).unwrap().len(), 12 * size_of::<Vertex>());

    context.start_batch(batch).unwrap();
    context.end_batch(batch).unwrap();
    assert!(context.dump_batch(batch).unwrap().is_empty());
}

#[test]
fn paint_is_synced_once_per_change() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 4.0);
    let p = solid(&mut context, Color::rgb(0.0, 0.0, 1.0));
    assert_eq!(context.is_paint_dirty(p), Some(true));

    context.set_fill_paint(Some(p)).unwrap();
    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    context.draw_path(path, PaintMode::FILL).unwrap();
    assert_eq!(context.is_paint_dirty(p), Some(false));
    assert_eq!(context.renderer().paint_syncs(), 1);

    context.set_fill_paint(Some(p)).unwrap();
    assert_eq!(context.is_paint_dirty(p), Some(false));
    context.draw_path(path, PaintMode::FILL).unwrap();
    assert_eq!(context.renderer().paint_syncs(), 1);

    let q = context.create_paint().unwrap();
    assert_eq!(context.is_paint_dirty(q), Some(false));
    context.set_fill_paint(Some(q)).unwrap();
    assert_eq!(context.is_paint_dirty(q), Some(true));
}

#[test]
fn destroying_bound_paint_unbinds_it() {
    let mut context = context();
    let paint = solid(&mut context, Color::rgb(1.0, 1.0, 1.0));
    context.set_paint_modes(Some(paint), PaintMode::FILL | PaintMode::STROKE)
        .unwrap();
    context.destroy_paint(Some(paint));
    assert_eq!(context.fill_paint(), None);
    assert_eq!(context.stroke_paint(), None);
    assert!(matches!(
        context.set_paint(paint, Color::rgb(0.0, 0.0, 0.0)),
        Err(VgError::BadHandle("paint"))
    ));
}

#[test]
fn destroying_nothing_is_harmless() {
    let mut context = context();
    context.destroy_path(None);
    context.destroy_paint(None);
    context.destroy_image(None);
    context.destroy_font(None);
    context.destroy_batch(None);

    let paint = context.create_paint();
    context.destroy_paint(paint);
    context.destroy_paint(paint);
    assert_eq!(context.get_error(), ErrorCode::NoError);
    assert_eq!(context.renderer().live_resources(), 0);

    // the freed slot is reused but the old id stays dead
    let fresh = context.create_paint().unwrap();
    context.destroy_paint(paint);
    assert_eq!(context.get_error(), ErrorCode::NoError);
    assert!(context.paint_desc(fresh).is_some());
    assert_eq!(context.renderer().live_resources(), 1);
    assert!(matches!(
        context.set_fill_paint(paint),
        Err(VgError::BadHandle("paint"))
    ));
    assert_eq!(context.fill_paint(), None);
}

#[test]
fn allocation_failure_reports_out_of_memory() {
    let (mut context, _surface) = context_with(SoftConfig::default().max_resources(2), 8, 8);
    let a = context.create_paint();
    let b = context.create_batch();
    assert!(a.is_some() && b.is_some());
    assert!(context.create_path(
        PATH_FORMAT_STANDARD,
        PathDatatype::F32,
        1.0,
        0.0,
        0,
        0,
        0
    )
    .is_none());
    assert_eq!(context.get_error(), ErrorCode::OutOfMemory);

    context.destroy_paint(a);
    assert!(context.create_font(0).is_some());
}

#[test]
fn stroke_with_zero_width_draws_nothing() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 4.0);
    let paint = solid(&mut context, Color::rgb(1.0, 1.0, 1.0));
    context.set_stroke_paint(Some(paint)).unwrap();
    context.set_stroke_line_width(0.0);
    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    context.draw_path(path, PaintMode::STROKE).unwrap();
    assert_eq!(context.draw_call_count(), 0);

    context.set_stroke_line_width(2.0);
    context.draw_path(path, PaintMode::STROKE).unwrap();
    assert_eq!(context.draw_call_count(), 1);
    assert_eq!(context.triangles_count(), 8);
}

#[test]
fn clear_is_presented_on_end_render() {
    let (mut context, surface) = context_with(SoftConfig::default(), 8, 8);
    context.set_clear_color(Color::rgb(0.0, 1.0, 0.0));
    context.begin_render().unwrap();
    assert!(context.in_frame());
    context.clear(-2, -2, 6, 6).unwrap();
    assert_eq!(surface.pixel(1, 1), Some([0, 0, 0, 0]));

    context.end_render().unwrap();
    assert!(!context.in_frame());
    assert_eq!(surface.presented_frames(), 1);
    assert_eq!(surface.pixel(3, 3), Some([0, 255, 0, 255]));
    assert_eq!(surface.pixel(4, 4), Some([0, 0, 0, 0]));
}

#[test]
fn clear_rejects_empty_size_and_ignores_offscreen() {
    let mut context = context();
    assert!(context.clear(0, 0, 0, 10).is_err());
    assert_eq!(context.get_error(), ErrorCode::IllegalArgument);
    context.clear(500, 500, 10, 10).unwrap();
    assert_eq!(context.get_error(), ErrorCode::NoError);
}

#[test]
fn begin_render_resets_stats() {
    let mut context = context();
    let path = square(&mut context, 0.0, 0.0, 4.0);
    let paint = solid(&mut context, Color::rgb(1.0, 1.0, 1.0));
    context.set_fill_paint(Some(paint)).unwrap();
    let batch = context.create_batch().unwrap();
    context.start_batch(batch).unwrap();
    context.draw_path(path, PaintMode::FILL).unwrap();
    assert_eq!(context.draw_call_count(), 1);

    context.begin_render().unwrap();
    assert_eq!(context.draw_call_count(), 0);
    assert_eq!(context.triangles_count(), 0);
}
