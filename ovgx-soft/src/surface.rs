use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct SurfaceInner {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    presented: usize,
}

/// In-memory stand-in for a native window. Clones share the same surface,
/// so the platform side can resize it while a context holds a handle.
#[derive(Clone, Default)]
pub struct MemorySurface {
    inner: Rc<RefCell<SurfaceInner>>,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        let surface = Self::default();
        surface.set_size(width, height);
        surface
    }

    pub fn set_size(&self, width: u32, height: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.width = width;
        inner.height = height;
        inner.pixels = vec![[0; 4]; width as usize * height as usize];
    }

    pub fn size(&self) -> (u32, u32) {
        let inner = self.inner.borrow();
        (inner.width, inner.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let inner = self.inner.borrow();
        if x >= inner.width || y >= inner.height {
            return None;
        }
        Some(inner.pixels[(y * inner.width + x) as usize])
    }

    pub fn presented_frames(&self) -> usize {
        self.inner.borrow().presented
    }

    /// Copies the overlapping region of a rendered frame onto the surface.
    pub(crate) fn present(&self, width: u32, height: u32, pixels: &[[u8; 4]]) {
        let mut inner = self.inner.borrow_mut();
        let w = width.min(inner.width) as usize;
        let h = height.min(inner.height) as usize;
        let dst_stride = inner.width as usize;
        for y in 0..h {
            let src = &pixels[y * width as usize..y * width as usize + w];
            inner.pixels[y * dst_stride..y * dst_stride + w].copy_from_slice(src);
        }
        inner.presented += 1;
    }
}
