use super::arena::Arena;
use super::{BatchId, ImageMode, LifecycleState, PaintId, PathId, TransformStack};
use crate::error::{ErrorCode, VgError};
use crate::{Color, Extent, Point, Renderer};

/// A drawing context bound to one renderer backend.
///
/// Resources created through the factories live in per-kind arenas owned by
/// the context and are addressed by their ids; the caller decides when each
/// one is destroyed. The current paints, path and batch are non-owning
/// bindings to those arena entries.
pub struct Context<R: Renderer> {
    pub(super) renderer: R,
    pub(super) surface: Option<R::Surface>,
    pub(super) state: LifecycleState,
    pub(super) extent: Extent,
    pub(super) in_frame: bool,
    pub(super) matrices: TransformStack,
    pub(super) paths: Arena<R::Path>,
    pub(super) paints: Arena<R::Paint>,
    pub(super) images: Arena<R::Image>,
    pub(super) fonts: Arena<R::Font>,
    pub(super) batches: Arena<R::Batch>,
    pub(super) current_batch: Option<BatchId>,
    pub(super) current_path: Option<PathId>,
    pub(super) stroke_paint: Option<PaintId>,
    pub(super) fill_paint: Option<PaintId>,
    pub(super) image_mode: ImageMode,
    pub(super) clear_color: Color,
    pub(super) line_width: f32,
    pub(super) glyph_origin: Point,
    pub(super) error: ErrorCode,
    pub(super) draw_call_count: usize,
    pub(super) triangles_count: usize,
}

impl<R: Renderer> Context<R> {
    pub fn create(renderer: R) -> Context<R> {
        Context {
            renderer,
            surface: None,
            state: LifecycleState::Uninitialized,
            extent: Default::default(),
            in_frame: false,
            matrices: Default::default(),
            paths: Arena::new(),
            paints: Arena::new(),
            images: Arena::new(),
            fonts: Arena::new(),
            batches: Arena::new(),
            current_batch: None,
            current_path: None,
            stroke_paint: None,
            fill_paint: None,
            image_mode: ImageMode::Normal,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            line_width: 1.0,
            glyph_origin: Point::default(),
            error: ErrorCode::NoError,
            draw_call_count: 0,
            triangles_count: 0,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Size of the render target as of the last initialize or resize.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Binds the context to a native surface. On failure the context stays
    /// uninitialized and the call may be retried.
    pub fn initialize(&mut self, surface: R::Surface) -> Result<(), VgError> {
        let res = self.do_initialize(surface);
        self.record(res)
    }

    fn do_initialize(&mut self, surface: R::Surface) -> Result<(), VgError> {
        if self.state != LifecycleState::Uninitialized {
            return Err(self.invalid_state("initialize"));
        }
        match self.renderer.initialize(&surface) {
            Ok(extent) => {
                log::info!(
                    "context initialized with a {}x{} target",
                    extent.width,
                    extent.height
                );
                self.extent = extent;
                self.surface = Some(surface);
                self.state = LifecycleState::Initialized;
                Ok(())
            }
            Err(e) => {
                log::warn!("context initialization failed: {:#}", e);
                Err(e.into())
            }
        }
    }

    /// Releases every outstanding resource and the backend device state. The
    /// context cannot be initialized again afterwards.
    pub fn terminate(&mut self) -> Result<(), VgError> {
        let res = self.do_terminate();
        self.record(res)
    }

    fn do_terminate(&mut self) -> Result<(), VgError> {
        self.ensure_initialized("terminate")?;

        if let Some(batch) = self.current_batch.take() {
            log::warn!("terminating with batch {:?} still open", batch);
        }
        self.current_path = None;
        self.stroke_paint = None;
        self.fill_paint = None;

        let leaked = self.paths.len()
            + self.paints.len()
            + self.images.len()
            + self.fonts.len()
            + self.batches.len();
        if leaked > 0 {
            log::warn!("releasing {} resources still alive at terminate", leaked);
        }
        for path in self.paths.drain() {
            self.renderer.destroy_path(path);
        }
        for paint in self.paints.drain() {
            self.renderer.destroy_paint(paint);
        }
        for image in self.images.drain() {
            self.renderer.destroy_image(image);
        }
        for font in self.fonts.drain() {
            self.renderer.destroy_font(font);
        }
        for batch in self.batches.drain() {
            self.renderer.destroy_batch(batch);
        }

        self.state = LifecycleState::Terminated;
        self.in_frame = false;
        self.surface = None;
        self.renderer.terminate()?;
        log::info!("context terminated");
        Ok(())
    }

    /// Matches the render target to the surface's current size. Does nothing
    /// before initialization.
    pub fn resize(&mut self) -> Result<(), VgError> {
        let res = match (self.state, &self.surface) {
            (LifecycleState::Initialized, Some(surface)) => {
                self.renderer.resize(surface).map_err(VgError::from)
            }
            _ => return Ok(()),
        };
        let extent = self.record(res)?;
        log::debug!("resized target to {}x{}", extent.width, extent.height);
        self.extent = extent;
        Ok(())
    }

    pub fn begin_render(&mut self) -> Result<(), VgError> {
        let res = self.do_begin_render();
        self.record(res)
    }

    fn do_begin_render(&mut self) -> Result<(), VgError> {
        self.ensure_initialized("begin_render")?;
        if self.in_frame {
            log::warn!("begin_render called inside an open frame");
        }
        self.renderer.begin_render()?;
        self.in_frame = true;
        self.draw_call_count = 0;
        self.triangles_count = 0;
        Ok(())
    }

    pub fn end_render(&mut self) -> Result<(), VgError> {
        let res = self.do_end_render();
        self.record(res)
    }

    fn do_end_render(&mut self) -> Result<(), VgError> {
        self.ensure_initialized("end_render")?;
        if let Some(surface) = &self.surface {
            self.renderer.end_render(surface)?;
        }
        self.in_frame = false;
        Ok(())
    }

    #[inline]
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    /// Returns the oldest unread error and resets the slot.
    pub fn get_error(&mut self) -> ErrorCode {
        std::mem::take(&mut self.error)
    }

    pub fn draw_call_count(&self) -> usize {
        self.draw_call_count
    }

    pub fn triangles_count(&self) -> usize {
        self.triangles_count
    }

    pub fn set_clear_color<C: Into<Color>>(&mut self, color: C) {
        self.clear_color = color.into();
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_stroke_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.0);
    }

    pub fn stroke_line_width(&self) -> f32 {
        self.line_width
    }

    /// Keeps the first unread error; later ones are dropped until
    /// [`Context::get_error`] is called.
    pub(super) fn record<T>(&mut self, res: Result<T, VgError>) -> Result<T, VgError> {
        if let Err(e) = &res {
            if self.error == ErrorCode::NoError {
                self.error = e.code();
            }
        }
        res
    }

    #[inline]
    pub(super) fn set_error(&mut self, err: VgError) {
        if self.error == ErrorCode::NoError {
            self.error = err.code();
        }
    }

    /// Unwraps a factory result, turning a backend failure into an
    /// out-of-memory error.
    pub(super) fn allocated<T>(
        &mut self,
        kind: &'static str,
        res: anyhow::Result<T>,
    ) -> Option<T> {
        match res {
            Ok(obj) => Some(obj),
            Err(e) => {
                log::warn!("{} allocation failed: {:#}", kind, e);
                self.set_error(VgError::OutOfMemory);
                None
            }
        }
    }

    pub(super) fn invalid_state(&self, op: &'static str) -> VgError {
        VgError::InvalidState {
            op,
            state: self.state,
        }
    }

    pub(super) fn ensure_initialized(&self, op: &'static str) -> Result<(), VgError> {
        if self.state != LifecycleState::Initialized {
            return Err(self.invalid_state(op));
        }
        Ok(())
    }
}
