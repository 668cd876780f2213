use std::fmt::Display;

use ovgx::renderer::RenderBatch;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
    pub color: [u8; 4],
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x: {}, y: {}, u: {}, v: {}, color: {:?}",
            self.x, self.y, self.u, self.v, self.color
        )
    }
}

impl Vertex {
    pub fn new(x: f32, y: f32, u: f32, v: f32, color: [u8; 4]) -> Vertex {
        Vertex { x, y, u, v, color }
    }
}

/// Triangle list accumulated between `start_batch` and `end_batch`.
#[derive(Debug, Default)]
pub struct SoftBatch {
    pub(crate) vertexes: Vec<Vertex>,
    pub(crate) sealed: bool,
}

impl SoftBatch {
    pub fn vertexes(&self) -> &[Vertex] {
        &self.vertexes
    }

    pub(crate) fn reset(&mut self) {
        self.vertexes.clear();
        self.sealed = false;
    }

    pub(crate) fn seal(&mut self) {
        self.vertexes.shrink_to_fit();
        self.sealed = true;
    }
}

impl RenderBatch for SoftBatch {
    fn dump(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertexes)
    }

    fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    fn is_sealed(&self) -> bool {
        self.sealed
    }
}
