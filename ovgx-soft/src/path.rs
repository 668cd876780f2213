use ovgx::renderer::RenderPath;
use ovgx::{Bounds, Matrix33, PathCapabilities, PathData, PathParams, Segment};

pub struct SoftPath {
    pub(crate) data: PathData,
}

impl SoftPath {
    pub(crate) fn new(params: &PathParams) -> Self {
        Self {
            data: PathData::new(params),
        }
    }

    pub fn data(&self) -> &PathData {
        &self.data
    }
}

impl RenderPath for SoftPath {
    fn capabilities(&self) -> PathCapabilities {
        self.data.capabilities()
    }

    fn remove_capabilities(&mut self, caps: PathCapabilities) {
        self.data.remove_capabilities(caps);
    }

    fn append(&mut self, segments: &[Segment], coords: &[f32]) -> anyhow::Result<()> {
        self.data.append(segments, coords);
        Ok(())
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn bounds(&self) -> Option<Bounds> {
        self.data.bounds()
    }

    fn transformed_bounds(&self, xform: &Matrix33) -> Option<Bounds> {
        self.data.transformed_bounds(xform)
    }
}
