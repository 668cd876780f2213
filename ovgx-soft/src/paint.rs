use ovgx::renderer::RenderPaint;
use ovgx::{PaintDesc, PaintKind, Point};

const RAMP_SIZE: usize = 256;

/// Paint with its color ramp baked into a lookup table.
#[derive(Debug)]
pub struct SoftPaint {
    desc: PaintDesc,
    dirty: bool,
    ramp: Vec<[u8; 4]>,
}

impl SoftPaint {
    pub(crate) fn new() -> Self {
        let mut paint = Self {
            desc: PaintDesc::default(),
            dirty: false,
            ramp: Vec::new(),
        };
        paint.rebuild();
        paint
    }

    pub(crate) fn rebuild(&mut self) {
        self.ramp = (0..RAMP_SIZE)
            .map(|i| {
                let t = i as f32 / (RAMP_SIZE - 1) as f32;
                self.desc.ramp_color(t).to_rgba8()
            })
            .collect();
        self.dirty = false;
    }

    /// Color at `pt` in paint space.
    pub fn color_at(&self, pt: Point) -> [u8; 4] {
        if let PaintKind::Color(color) = self.desc.kind {
            return color.to_rgba8();
        }
        let t = self
            .desc
            .gradient_t(pt)
            .map(|t| self.desc.spread.apply(t))
            .unwrap_or_default();
        let idx = (t * (RAMP_SIZE - 1) as f32).round() as usize;
        self.ramp[idx.min(RAMP_SIZE - 1)]
    }
}

impl RenderPaint for SoftPaint {
    fn desc(&self) -> &PaintDesc {
        &self.desc
    }

    fn set_desc(&mut self, desc: PaintDesc) {
        self.desc = desc;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovgx::{Color, ColorStop, SpreadMode};

    #[test]
    fn new_paint_is_clean_opaque_black() {
        let paint = SoftPaint::new();
        assert!(!paint.is_dirty());
        assert_eq!(paint.color_at(Point::new(5.0, 5.0)), [0, 0, 0, 255]);
    }

    #[test]
    fn gradient_samples_rebuilt_ramp() {
        let mut paint = SoftPaint::new();
        paint.set_desc(
            PaintDesc::linear(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                vec![
                    ColorStop::new(0.0, Color::rgb(1.0, 0.0, 0.0)),
                    ColorStop::new(1.0, Color::rgb(0.0, 0.0, 1.0)),
                ],
            )
            .with_spread(SpreadMode::Repeat),
        );
        paint.set_dirty(true);
        paint.rebuild();
        assert!(!paint.is_dirty());
        assert_eq!(paint.color_at(Point::new(0.0, 3.0)), [255, 0, 0, 255]);
        assert_eq!(paint.color_at(Point::new(10.0, 0.0)), [255, 0, 0, 255]);
        assert_eq!(paint.color_at(Point::new(-20.0, 0.0)), [255, 0, 0, 255]);
        assert_eq!(paint.color_at(Point::new(9.99, 0.0))[2], 255);
    }
}
