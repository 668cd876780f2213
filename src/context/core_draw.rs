use super::{Context, FontId, ImageId, ImageMode, PaintMode, PathId};
use crate::error::VgError;
use crate::renderer::{RenderFont, RenderPaint};
use crate::{Matrix33, Point, Rect, Renderer};

impl<R: Renderer> Context<R> {
    /// Fills the bound path with the fill paint into the open batch.
    pub fn fill(&mut self) -> Result<(), VgError> {
        let res = self.draw_current("fill", PaintMode::FILL);
        self.record(res)
    }

    /// Strokes the bound path with the stroke paint into the open batch.
    pub fn stroke(&mut self) -> Result<(), VgError> {
        let res = self.draw_current("stroke", PaintMode::STROKE);
        self.record(res)
    }

    /// Binds `path`, then fills and/or strokes it according to `modes`.
    pub fn draw_path(&mut self, path: PathId, modes: PaintMode) -> Result<(), VgError> {
        self.set_path(Some(path))?;
        let xform = self.matrices.path_to_surface();
        let res = self.draw_with("draw_path", path, modes, &xform);
        self.record(res)
    }

    /// Draws `image` through the image-user matrix with the current image
    /// mode. Multiply and stencil modes tint with the fill paint.
    pub fn draw_image(&mut self, image: ImageId) -> Result<(), VgError> {
        let res = self.do_draw_image(image);
        self.record(res)
    }

    /// Draws glyph `index` of `font` at the glyph origin and advances the
    /// origin by the glyph escapement.
    pub fn draw_glyph(
        &mut self,
        font: FontId,
        index: u32,
        modes: PaintMode,
    ) -> Result<(), VgError> {
        let res = self.do_draw_glyph(font, index, modes);
        self.record(res)
    }

    /// Clears a rectangle of the render target to the clear color.
    pub fn clear(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), VgError> {
        let res = self.do_clear(x, y, width, height);
        self.record(res)
    }

    fn do_clear(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), VgError> {
        self.ensure_initialized("clear")?;
        if width <= 0 || height <= 0 {
            return Err(VgError::IllegalArgument("clear dimensions must be positive"));
        }
        let target = Rect::new(Point::default(), self.extent);
        let rect = Rect::from((x, y, width, height)).intersect(target);
        if rect.size.is_empty() {
            return Ok(());
        }
        self.renderer.clear(rect, self.clear_color)?;
        Ok(())
    }

    fn draw_current(&mut self, op: &'static str, modes: PaintMode) -> Result<(), VgError> {
        self.ensure_initialized(op)?;
        let path = self
            .current_path
            .ok_or(VgError::IllegalArgument("no path is bound"))?;
        let xform = self.matrices.path_to_surface();
        self.draw_with(op, path, modes, &xform)
    }

    fn do_draw_glyph(
        &mut self,
        font: FontId,
        index: u32,
        modes: PaintMode,
    ) -> Result<(), VgError> {
        self.ensure_initialized("draw_glyph")?;
        let glyph = *self
            .fonts
            .get(font.0)
            .ok_or(VgError::BadHandle("font"))?
            .glyph(index)
            .ok_or(VgError::IllegalArgument("glyph is not defined"))?;
        if let Some(path) = glyph.path {
            if !modes.is_empty() {
                let shift = self.glyph_origin - glyph.origin;
                let xform =
                    Matrix33::translate(shift.x, shift.y) * self.matrices.path_to_surface();
                self.draw_with("draw_glyph", path, modes, &xform)?;
            }
        }
        self.glyph_origin += glyph.escapement;
        Ok(())
    }

    fn draw_with(
        &mut self,
        op: &'static str,
        path: PathId,
        modes: PaintMode,
        xform: &Matrix33,
    ) -> Result<(), VgError> {
        self.ensure_initialized(op)?;
        let batch = self.current_batch.ok_or(VgError::NoOpenBatch)?;
        let fill = if modes.contains(PaintMode::FILL) {
            Some(self.fill_paint.ok_or(VgError::NoPaint)?)
        } else {
            None
        };
        let stroke = if modes.contains(PaintMode::STROKE) {
            Some(self.stroke_paint.ok_or(VgError::NoPaint)?)
        } else {
            None
        };

        let path = self.paths.get(path.0).ok_or(VgError::BadHandle("path"))?;
        let batch = self
            .batches
            .get_mut(batch.0)
            .ok_or(VgError::BadHandle("batch"))?;

        if let Some(id) = fill {
            let paint = self
                .paints
                .get_mut(id.0)
                .ok_or(VgError::BadHandle("paint"))?;
            if paint.is_dirty() {
                self.renderer.sync_paint(paint)?;
            }
            let triangles = self.renderer.fill(batch, path, paint, xform)?;
            self.draw_call_count += 1;
            self.triangles_count += triangles;
        }

        if let Some(id) = stroke {
            if self.line_width <= 0.0 {
                return Ok(());
            }
            let paint = self
                .paints
                .get_mut(id.0)
                .ok_or(VgError::BadHandle("paint"))?;
            if paint.is_dirty() {
                self.renderer.sync_paint(paint)?;
            }
            let triangles = self
                .renderer
                .stroke(batch, path, paint, xform, self.line_width)?;
            self.draw_call_count += 1;
            self.triangles_count += triangles;
        }
        Ok(())
    }

    fn do_draw_image(&mut self, image: ImageId) -> Result<(), VgError> {
        self.ensure_initialized("draw_image")?;
        let batch = self.current_batch.ok_or(VgError::NoOpenBatch)?;
        let mode = self.image_mode;
        let tint = match mode {
            ImageMode::Normal => None,
            ImageMode::Multiply | ImageMode::Stencil => {
                Some(self.fill_paint.ok_or(VgError::NoPaint)?)
            }
        };
        let xform = self.matrices.image_to_surface();

        let image = self
            .images
            .get(image.0)
            .ok_or(VgError::BadHandle("image"))?;
        let batch = self
            .batches
            .get_mut(batch.0)
            .ok_or(VgError::BadHandle("batch"))?;
        let paint = match tint {
            Some(id) => {
                let paint = self
                    .paints
                    .get_mut(id.0)
                    .ok_or(VgError::BadHandle("paint"))?;
                if paint.is_dirty() {
                    self.renderer.sync_paint(paint)?;
                }
                Some(&*paint)
            }
            None => None,
        };
        let triangles = self
            .renderer
            .draw_image(batch, image, paint, mode, &xform)?;
        self.draw_call_count += 1;
        self.triangles_count += triangles;
        Ok(())
    }
}
