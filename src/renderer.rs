use crate::{
    Bounds, Color, Extent, ImageFormat, ImageMode, ImageQuality, Matrix33, MatrixMode, PaintDesc,
    PathCapabilities, PathId, PathParams, Point, Rect, Segment,
};

/// Backend path object.
pub trait RenderPath {
    fn capabilities(&self) -> PathCapabilities;

    fn remove_capabilities(&mut self, caps: PathCapabilities);

    fn append(&mut self, segments: &[Segment], coords: &[f32]) -> anyhow::Result<()>;

    fn clear(&mut self);

    fn bounds(&self) -> Option<Bounds>;

    fn transformed_bounds(&self, xform: &Matrix33) -> Option<Bounds>;
}

/// Backend paint object. A dirty paint has stale derived state that the
/// renderer regenerates in [`Renderer::sync_paint`] before its next use.
pub trait RenderPaint {
    fn desc(&self) -> &PaintDesc;

    fn set_desc(&mut self, desc: PaintDesc);

    fn is_dirty(&self) -> bool;

    fn set_dirty(&mut self, dirty: bool);
}

pub trait RenderImage {
    fn format(&self) -> ImageFormat;

    fn size(&self) -> (u32, u32);

    /// Writes tightly or loosely packed RGBA8 rows into `rect`, clipped to the
    /// image.
    fn sub_data(
        &mut self,
        data: &[u8],
        stride: usize,
        rect: (u32, u32, u32, u32),
    ) -> anyhow::Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glyph {
    pub path: Option<PathId>,
    pub origin: Point,
    pub escapement: Point,
}

pub trait RenderFont {
    fn set_glyph(&mut self, index: u32, glyph: Glyph) -> anyhow::Result<()>;

    /// Returns whether a glyph was defined at `index`.
    fn clear_glyph(&mut self, index: u32) -> bool;

    fn glyph(&self, index: u32) -> Option<&Glyph>;

    fn glyph_count(&self) -> usize;
}

/// Backend vertex accumulator.
pub trait RenderBatch {
    /// Raw view of the accumulated vertex buffer.
    fn dump(&self) -> &[u8];

    fn vertex_count(&self) -> usize;

    fn is_sealed(&self) -> bool;
}

/// The backend half of a rendering context: device lifecycle, resource
/// factories and draw submission. Orchestration (batch session, paint
/// binding, matrix modes, error slot) lives in [`crate::Context`].
pub trait Renderer {
    type Surface: Clone;
    type Path: RenderPath;
    type Paint: RenderPaint;
    type Image: RenderImage;
    type Font: RenderFont;
    type Batch: RenderBatch;

    /// Acquires device state for `surface` and returns the render target size.
    fn initialize(&mut self, surface: &Self::Surface) -> anyhow::Result<Extent>;

    fn terminate(&mut self) -> anyhow::Result<()>;

    fn resize(&mut self, surface: &Self::Surface) -> anyhow::Result<Extent>;

    fn begin_render(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn end_render(&mut self, _surface: &Self::Surface) -> anyhow::Result<()> {
        Ok(())
    }

    fn allowed_path_capabilities(&self) -> PathCapabilities {
        PathCapabilities::ALL
    }

    fn create_path(&mut self, params: &PathParams) -> anyhow::Result<Self::Path>;

    fn destroy_path(&mut self, _path: Self::Path) {}

    fn create_paint(&mut self) -> anyhow::Result<Self::Paint>;

    fn destroy_paint(&mut self, _paint: Self::Paint) {}

    fn create_image(
        &mut self,
        format: ImageFormat,
        width: u32,
        height: u32,
        allowed_quality: ImageQuality,
    ) -> anyhow::Result<Self::Image>;

    fn destroy_image(&mut self, _image: Self::Image) {}

    fn create_font(&mut self, glyph_capacity_hint: usize) -> anyhow::Result<Self::Font>;

    fn destroy_font(&mut self, _font: Self::Font) {}

    fn create_batch(&mut self) -> anyhow::Result<Self::Batch>;

    fn destroy_batch(&mut self, _batch: Self::Batch) {}

    /// Called after every change to the matrix of `mode`.
    fn load_matrix(&mut self, _mode: MatrixMode, _matrix: &Matrix33) -> anyhow::Result<()> {
        Ok(())
    }

    fn set_image_mode(&mut self, _mode: ImageMode) -> anyhow::Result<()> {
        Ok(())
    }

    fn sync_paint(&mut self, paint: &mut Self::Paint) -> anyhow::Result<()> {
        paint.set_dirty(false);
        Ok(())
    }

    fn start_batch(&mut self, batch: &mut Self::Batch) -> anyhow::Result<()>;

    fn end_batch(&mut self, batch: &mut Self::Batch) -> anyhow::Result<()>;

    /// Appends fill triangles and returns how many were emitted.
    fn fill(
        &mut self,
        batch: &mut Self::Batch,
        path: &Self::Path,
        paint: &Self::Paint,
        xform: &Matrix33,
    ) -> anyhow::Result<usize>;

    /// Appends stroke triangles and returns how many were emitted.
    fn stroke(
        &mut self,
        batch: &mut Self::Batch,
        path: &Self::Path,
        paint: &Self::Paint,
        xform: &Matrix33,
        line_width: f32,
    ) -> anyhow::Result<usize>;

    fn draw_image(
        &mut self,
        batch: &mut Self::Batch,
        image: &Self::Image,
        paint: Option<&Self::Paint>,
        mode: ImageMode,
        xform: &Matrix33,
    ) -> anyhow::Result<usize>;

    fn clear(&mut self, rect: Rect, color: Color) -> anyhow::Result<()>;
}
