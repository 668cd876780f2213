use super::{Context, PaintId, PaintMode};
use crate::error::VgError;
use crate::renderer::RenderPaint;
use crate::{PaintDesc, Renderer};

impl<R: Renderer> Context<R> {
    pub fn create_paint(&mut self) -> Option<PaintId> {
        if let Err(e) = self.ensure_initialized("create_paint") {
            self.set_error(e);
            return None;
        }
        let res = self.renderer.create_paint();
        let paint = self.allocated("paint", res)?;
        let id = PaintId(self.paints.insert(paint));
        log::debug!("created paint {:?}", id);
        Some(id)
    }

    /// Destroying a bound paint unbinds it.
    pub fn destroy_paint(&mut self, paint: Option<PaintId>) {
        let paint = match paint {
            Some(paint) => paint,
            None => return,
        };
        match self.paints.try_remove(paint.0) {
            Some(obj) => {
                if self.stroke_paint == Some(paint) {
                    log::warn!("destroying bound stroke paint {:?}", paint);
                    self.stroke_paint = None;
                }
                if self.fill_paint == Some(paint) {
                    log::warn!("destroying bound fill paint {:?}", paint);
                    self.fill_paint = None;
                }
                self.renderer.destroy_paint(obj);
            }
            None => log::warn!("paint {:?} destroyed twice", paint),
        }
    }

    /// Replaces the description of `paint` and marks it dirty.
    pub fn set_paint<D: Into<PaintDesc>>(
        &mut self,
        paint: PaintId,
        desc: D,
    ) -> Result<(), VgError> {
        let res = match self.paints.get_mut(paint.0) {
            Some(obj) => {
                obj.set_desc(desc.into());
                obj.set_dirty(true);
                Ok(())
            }
            None => Err(VgError::BadHandle("paint")),
        };
        self.record(res)
    }

    pub fn paint_desc(&self, paint: PaintId) -> Option<&PaintDesc> {
        self.paints.get(paint.0).map(|obj| obj.desc())
    }

    pub fn is_paint_dirty(&self, paint: PaintId) -> Option<bool> {
        self.paints.get(paint.0).map(|obj| obj.is_dirty())
    }

    pub fn set_stroke_paint(&mut self, paint: Option<PaintId>) -> Result<(), VgError> {
        let res = self.bind_paint(PaintMode::STROKE, paint);
        self.record(res)
    }

    pub fn set_fill_paint(&mut self, paint: Option<PaintId>) -> Result<(), VgError> {
        let res = self.bind_paint(PaintMode::FILL, paint);
        self.record(res)
    }

    /// Binds `paint` for every mode in `modes`.
    pub fn set_paint_modes(
        &mut self,
        paint: Option<PaintId>,
        modes: PaintMode,
    ) -> Result<(), VgError> {
        if modes.contains(PaintMode::STROKE) {
            self.set_stroke_paint(paint)?;
        }
        if modes.contains(PaintMode::FILL) {
            self.set_fill_paint(paint)?;
        }
        Ok(())
    }

    #[inline]
    pub fn stroke_paint(&self) -> Option<PaintId> {
        self.stroke_paint
    }

    #[inline]
    pub fn fill_paint(&self) -> Option<PaintId> {
        self.fill_paint
    }

    fn bind_paint(&mut self, mode: PaintMode, paint: Option<PaintId>) -> Result<(), VgError> {
        self.ensure_initialized("bind_paint")?;
        let slot = if mode == PaintMode::STROKE {
            &mut self.stroke_paint
        } else {
            &mut self.fill_paint
        };
        if *slot == paint {
            return Ok(());
        }
        if let Some(id) = paint {
            self.paints
                .get_mut(id.0)
                .ok_or(VgError::BadHandle("paint"))?
                .set_dirty(true);
        }
        *slot = paint;
        Ok(())
    }
}
