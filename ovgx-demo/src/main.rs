use ovgx::*;
use ovgx_soft::{MemorySurface, SoftConfig};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn star(context: &mut Context<ovgx_soft::Renderer>) -> anyhow::Result<PathId> {
    let path = context
        .create_path(
            PATH_FORMAT_STANDARD,
            PathDatatype::F32,
            1.0,
            0.0,
            6,
            12,
            PathCapabilities::ALL.bits(),
        )
        .ok_or_else(|| anyhow::anyhow!("create_path failed: {:?}", context.get_error()))?;

    let mut coords = Vec::new();
    for i in 0..5 {
        let a = std::f32::consts::PI * 2.0 * (i * 2 % 5) as f32 / 5.0;
        coords.push(a.sin() * 50.0);
        coords.push(-a.cos() * 50.0);
    }
    let mut segments = vec![Segment::abs(SegmentKind::MoveTo)];
    segments.extend(std::iter::repeat(Segment::abs(SegmentKind::LineTo)).take(4));
    segments.push(Segment::abs(SegmentKind::Close));
    context.append_path_data(path, &segments, &coords)?;
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let surface = MemorySurface::new(WIDTH, HEIGHT);
    let mut context = Context::create(ovgx_soft::Renderer::create(SoftConfig::default()));
    context.initialize(surface.clone())?;

    context.set_clear_color(Color::rgba(0.1, 0.1, 0.12, 1.0));
    context.begin_render()?;
    context.clear(0, 0, WIDTH as i32, HEIGHT as i32)?;

    context.set_matrix_mode(MatrixMode::PathUser);
    context.set_identity()?;
    context.translate(100.0, 50.0)?;
    context.scale(2.0, 2.0)?;

    let path = star(&mut context)?;
    let fill = context
        .create_paint()
        .ok_or_else(|| anyhow::anyhow!("create_paint failed"))?;
    context.set_paint(
        fill,
        PaintDesc::radial(
            Point::new(0.0, 0.0),
            50.0,
            vec![
                ColorStop::new(0.0, Color::rgb(1.0, 0.9, 0.2)),
                ColorStop::new(1.0, Color::rgb(0.9, 0.3, 0.1)),
            ],
        ),
    )?;
    let stroke = context
        .create_paint()
        .ok_or_else(|| anyhow::anyhow!("create_paint failed"))?;
    context.set_paint(stroke, Color::rgb(1.0, 1.0, 1.0))?;
    context.set_fill_paint(Some(fill))?;
    context.set_stroke_paint(Some(stroke))?;
    context.set_stroke_line_width(3.0);

    let batch = context
        .create_batch()
        .ok_or_else(|| anyhow::anyhow!("create_batch failed"))?;
    context.start_batch(batch)?;
    context.draw_path(path, PaintMode::FILL | PaintMode::STROKE)?;
    context.end_batch(batch)?;
    context.end_render()?;

    let size = context.dump_batch(batch)?.len();
    log::info!(
        "batch holds {} bytes, {} triangles in {} draw calls",
        size,
        context.triangles_count(),
        context.draw_call_count()
    );
    println!("batch size: {} bytes", size);

    context.destroy_batch(Some(batch));
    context.destroy_paint(Some(stroke));
    context.destroy_paint(Some(fill));
    context.destroy_path(Some(path));
    context.terminate()?;
    Ok(())
}
