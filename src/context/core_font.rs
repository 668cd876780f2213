use super::{Context, FontId, PathId};
use crate::error::VgError;
use crate::renderer::{Glyph, RenderFont};
use crate::{Point, Renderer};

impl<R: Renderer> Context<R> {
    pub fn create_font(&mut self, glyph_capacity_hint: usize) -> Option<FontId> {
        if let Err(e) = self.ensure_initialized("create_font") {
            self.set_error(e);
            return None;
        }
        let res = self.renderer.create_font(glyph_capacity_hint);
        let font = self.allocated("font", res)?;
        let id = FontId(self.fonts.insert(font));
        log::debug!("created font {:?}", id);
        Some(id)
    }

    pub fn destroy_font(&mut self, font: Option<FontId>) {
        let font = match font {
            Some(font) => font,
            None => return,
        };
        match self.fonts.try_remove(font.0) {
            Some(obj) => self.renderer.destroy_font(obj),
            None => log::warn!("font {:?} destroyed twice", font),
        }
    }

    /// Defines glyph `index` of `font` as `path` (or an empty glyph for
    /// `None`) placed so that `origin` sits on the glyph origin, advancing the
    /// origin by `escapement` when drawn.
    pub fn set_glyph_to_path<P: Into<Point>>(
        &mut self,
        font: FontId,
        index: u32,
        path: Option<PathId>,
        origin: P,
        escapement: P,
    ) -> Result<(), VgError> {
        let glyph = Glyph {
            path,
            origin: origin.into(),
            escapement: escapement.into(),
        };
        let res = self.do_set_glyph(font, index, glyph);
        self.record(res)
    }

    fn do_set_glyph(&mut self, font: FontId, index: u32, glyph: Glyph) -> Result<(), VgError> {
        if let Some(path) = glyph.path {
            if !self.paths.contains(path.0) {
                return Err(VgError::BadHandle("path"));
            }
        }
        let obj = self
            .fonts
            .get_mut(font.0)
            .ok_or(VgError::BadHandle("font"))?;
        obj.set_glyph(index, glyph)?;
        Ok(())
    }

    pub fn clear_glyph(&mut self, font: FontId, index: u32) -> Result<(), VgError> {
        let res = match self.fonts.get_mut(font.0).map(|obj| obj.clear_glyph(index)) {
            Some(true) => Ok(()),
            Some(false) => Err(VgError::IllegalArgument("glyph is not defined")),
            None => Err(VgError::BadHandle("font")),
        };
        self.record(res)
    }

    pub fn glyph_count(&self, font: FontId) -> Option<usize> {
        self.fonts.get(font.0).map(|obj| obj.glyph_count())
    }

    pub fn set_glyph_origin<P: Into<Point>>(&mut self, origin: P) {
        self.glyph_origin = origin.into();
    }

    #[inline]
    pub fn glyph_origin(&self) -> Point {
        self.glyph_origin
    }
}
