use std::collections::HashMap;

use ovgx::renderer::{Glyph, RenderFont};

pub struct SoftFont {
    glyphs: HashMap<u32, Glyph>,
}

impl SoftFont {
    pub(crate) fn new(glyph_capacity_hint: usize) -> Self {
        Self {
            glyphs: HashMap::with_capacity(glyph_capacity_hint),
        }
    }
}

impl RenderFont for SoftFont {
    fn set_glyph(&mut self, index: u32, glyph: Glyph) -> anyhow::Result<()> {
        self.glyphs.insert(index, glyph);
        Ok(())
    }

    fn clear_glyph(&mut self, index: u32) -> bool {
        self.glyphs.remove(&index).is_some()
    }

    fn glyph(&self, index: u32) -> Option<&Glyph> {
        self.glyphs.get(&index)
    }

    fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
