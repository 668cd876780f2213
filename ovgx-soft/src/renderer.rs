use super::{tess, Renderer, Target};
use crate::{MemorySurface, SoftBatch, SoftFont, SoftImage, SoftPaint, SoftPath, Vertex};
use ovgx::renderer::RenderImage;
use ovgx::*;

fn emit(batch: &mut SoftBatch, tris: &[[Point; 3]], paint: &SoftPaint, xform: &Matrix33) {
    batch.vertexes.reserve(tris.len() * 3);
    for tri in tris {
        for pt in tri {
            let d = xform.transform_point(*pt);
            batch
                .vertexes
                .push(Vertex::new(d.x, d.y, 0.0, 0.0, paint.color_at(*pt)));
        }
    }
}

impl Renderer {
    fn curve_tol(&self, xform: &Matrix33) -> f32 {
        self.config.tess_tol / xform.average_scale().max(1e-6)
    }
}

impl ovgx::Renderer for Renderer {
    type Surface = MemorySurface;
    type Path = SoftPath;
    type Paint = SoftPaint;
    type Image = SoftImage;
    type Font = SoftFont;
    type Batch = SoftBatch;

    fn initialize(&mut self, surface: &MemorySurface) -> anyhow::Result<Extent> {
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            bail!("surface has no drawable area ({}x{})", width, height);
        }
        self.target = Some(Target::new(width, height)?);
        Ok(Extent::new(width as f32, height as f32))
    }

    fn terminate(&mut self) -> anyhow::Result<()> {
        if self.live_resources != 0 {
            log::warn!("{} resources outlived the device", self.live_resources);
        }
        self.target = None;
        Ok(())
    }

    fn resize(&mut self, surface: &MemorySurface) -> anyhow::Result<Extent> {
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            bail!("surface has no drawable area ({}x{})", width, height);
        }
        match &self.target {
            Some(target) if target.width == width && target.height == height => {}
            _ => self.target = Some(Target::new(width, height)?),
        }
        Ok(Extent::new(width as f32, height as f32))
    }

    fn end_render(&mut self, surface: &MemorySurface) -> anyhow::Result<()> {
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| anyhow!("no render target"))?;
        surface.present(target.width, target.height, &target.pixels);
        self.presented_frames += 1;
        Ok(())
    }

    fn allowed_path_capabilities(&self) -> PathCapabilities {
        self.config.allowed_path_capabilities
    }

    fn create_path(&mut self, params: &PathParams) -> anyhow::Result<SoftPath> {
        self.reserve()?;
        Ok(SoftPath::new(params))
    }

    fn destroy_path(&mut self, _path: SoftPath) {
        self.release();
    }

    fn create_paint(&mut self) -> anyhow::Result<SoftPaint> {
        self.reserve()?;
        Ok(SoftPaint::new())
    }

    fn destroy_paint(&mut self, _paint: SoftPaint) {
        self.release();
    }

    fn create_image(
        &mut self,
        format: ImageFormat,
        width: u32,
        height: u32,
        allowed_quality: ImageQuality,
    ) -> anyhow::Result<SoftImage> {
        let image = SoftImage::new(format, width, height, allowed_quality)?;
        self.reserve()?;
        Ok(image)
    }

    fn destroy_image(&mut self, _image: SoftImage) {
        self.release();
    }

    fn create_font(&mut self, glyph_capacity_hint: usize) -> anyhow::Result<SoftFont> {
        self.reserve()?;
        Ok(SoftFont::new(glyph_capacity_hint))
    }

    fn destroy_font(&mut self, _font: SoftFont) {
        self.release();
    }

    fn create_batch(&mut self) -> anyhow::Result<SoftBatch> {
        self.reserve()?;
        Ok(SoftBatch::default())
    }

    fn destroy_batch(&mut self, _batch: SoftBatch) {
        self.release();
    }

    fn load_matrix(&mut self, _mode: MatrixMode, _matrix: &Matrix33) -> anyhow::Result<()> {
        self.matrix_loads += 1;
        Ok(())
    }

    fn set_image_mode(&mut self, mode: ImageMode) -> anyhow::Result<()> {
        self.image_mode = mode;
        Ok(())
    }

    fn sync_paint(&mut self, paint: &mut SoftPaint) -> anyhow::Result<()> {
        paint.rebuild();
        self.paint_syncs += 1;
        Ok(())
    }

    fn start_batch(&mut self, batch: &mut SoftBatch) -> anyhow::Result<()> {
        batch.reset();
        Ok(())
    }

    fn end_batch(&mut self, batch: &mut SoftBatch) -> anyhow::Result<()> {
        batch.seal();
        self.sealed_batches += 1;
        Ok(())
    }

    fn fill(
        &mut self,
        batch: &mut SoftBatch,
        path: &SoftPath,
        paint: &SoftPaint,
        xform: &Matrix33,
    ) -> anyhow::Result<usize> {
        let lines = tess::flatten(&path.data.commands(), self.curve_tol(xform));
        let tris = tess::fill_triangles(&lines);
        emit(batch, &tris, paint, xform);
        Ok(tris.len())
    }

    fn stroke(
        &mut self,
        batch: &mut SoftBatch,
        path: &SoftPath,
        paint: &SoftPaint,
        xform: &Matrix33,
        line_width: f32,
    ) -> anyhow::Result<usize> {
        let lines = tess::flatten(&path.data.commands(), self.curve_tol(xform));
        let tris = tess::stroke_triangles(&lines, line_width);
        emit(batch, &tris, paint, xform);
        Ok(tris.len())
    }

    fn draw_image(
        &mut self,
        batch: &mut SoftBatch,
        image: &SoftImage,
        paint: Option<&SoftPaint>,
        mode: ImageMode,
        xform: &Matrix33,
    ) -> anyhow::Result<usize> {
        let (w, h) = image.size();
        let (w, h) = (w as f32, h as f32);
        let corners = [
            (Point::new(0.0, 0.0), 0.0, 0.0),
            (Point::new(w, 0.0), 1.0, 0.0),
            (Point::new(w, h), 1.0, 1.0),
            (Point::new(0.0, h), 0.0, 1.0),
        ];
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            let (pt, u, v) = corners[i];
            let color = match (mode, paint) {
                (ImageMode::Normal, _) | (_, None) => [255; 4],
                (_, Some(paint)) => paint.color_at(pt),
            };
            let d = xform.transform_point(pt);
            batch.vertexes.push(Vertex::new(d.x, d.y, u, v, color));
        }
        Ok(2)
    }

    fn clear(&mut self, rect: Rect, color: Color) -> anyhow::Result<()> {
        let target = self
            .target
            .as_mut()
            .ok_or_else(|| anyhow!("no render target"))?;
        let px = color.to_rgba8();
        let x0 = rect.xy.x.max(0.0) as u32;
        let y0 = rect.xy.y.max(0.0) as u32;
        let x1 = ((rect.xy.x + rect.size.width) as u32).min(target.width);
        let y1 = ((rect.xy.y + rect.size.height) as u32).min(target.height);
        for y in y0..y1 {
            let row = (y * target.width) as usize;
            for p in &mut target.pixels[row + x0 as usize..row + x1 as usize] {
                *p = px;
            }
        }
        Ok(())
    }
}
