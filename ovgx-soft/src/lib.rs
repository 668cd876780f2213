//! Software backend: keeps the render target in memory and tessellates
//! paths into colored triangles.

#[macro_use]
extern crate anyhow;

mod batch;
mod font;
mod image;
mod paint;
mod path;
mod renderer;
mod surface;
mod tess;

pub use batch::{SoftBatch, Vertex};
pub use font::SoftFont;
pub use image::SoftImage;
pub use paint::SoftPaint;
pub use path::SoftPath;
pub use surface::MemorySurface;

use ovgx::{ImageMode, PathCapabilities};

#[derive(Debug, Clone)]
pub struct SoftConfig {
    /// Capabilities a created path may hold.
    pub allowed_path_capabilities: PathCapabilities,
    /// Live resource limit; creation beyond it fails as an allocation error.
    pub max_resources: Option<usize>,
    /// Maximum distance between a curve and its flattened polyline, in pixels.
    pub tess_tol: f32,
}

impl Default for SoftConfig {
    fn default() -> Self {
        Self {
            allowed_path_capabilities: PathCapabilities::ALL,
            max_resources: None,
            tess_tol: 0.25,
        }
    }
}

impl SoftConfig {
    pub fn allowed_path_capabilities(mut self, caps: PathCapabilities) -> Self {
        self.allowed_path_capabilities = caps;
        self
    }

    pub fn max_resources(mut self, max: usize) -> Self {
        self.max_resources = Some(max);
        self
    }

    pub fn tess_tol(mut self, tol: f32) -> Self {
        self.tess_tol = tol;
        self
    }
}

pub(crate) struct Target {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Target {
    fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        Ok(Self {
            width,
            height,
            pixels: alloc_pixels(width, height)?,
        })
    }
}

/// Zeroed RGBA8 pixel buffer. Sizes that overflow or cannot be reserved fail
/// instead of aborting.
pub(crate) fn alloc_pixels(width: u32, height: u32) -> anyhow::Result<Vec<[u8; 4]>> {
    let count = (width as usize)
        .checked_mul(height as usize)
        .filter(|count| count.checked_mul(4).is_some())
        .ok_or_else(|| anyhow!("{}x{} pixel buffer overflows", width, height))?;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|e| anyhow!("cannot allocate {}x{} pixels: {}", width, height, e))?;
    pixels.resize(count, [0; 4]);
    Ok(pixels)
}

pub struct Renderer {
    config: SoftConfig,
    target: Option<Target>,
    live_resources: usize,
    matrix_loads: usize,
    paint_syncs: usize,
    image_mode: ImageMode,
    sealed_batches: usize,
    presented_frames: usize,
}

impl Renderer {
    pub fn create(config: SoftConfig) -> Self {
        Self {
            config,
            target: None,
            live_resources: 0,
            matrix_loads: 0,
            paint_syncs: 0,
            image_mode: ImageMode::Normal,
            sealed_batches: 0,
            presented_frames: 0,
        }
    }

    pub fn config(&self) -> &SoftConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.target.is_some()
    }

    pub fn target_size(&self) -> Option<(u32, u32)> {
        self.target.as_ref().map(|t| (t.width, t.height))
    }

    pub fn target_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let target = self.target.as_ref()?;
        if x >= target.width || y >= target.height {
            return None;
        }
        Some(target.pixels[(y * target.width + x) as usize])
    }

    pub fn live_resources(&self) -> usize {
        self.live_resources
    }

    pub fn matrix_loads(&self) -> usize {
        self.matrix_loads
    }

    pub fn paint_syncs(&self) -> usize {
        self.paint_syncs
    }

    pub fn image_mode(&self) -> ImageMode {
        self.image_mode
    }

    pub fn sealed_batches(&self) -> usize {
        self.sealed_batches
    }

    pub fn presented_frames(&self) -> usize {
        self.presented_frames
    }

    fn reserve(&mut self) -> anyhow::Result<()> {
        if let Some(max) = self.config.max_resources {
            if self.live_resources >= max {
                bail!("resource limit of {} reached", max);
            }
        }
        self.live_resources += 1;
        Ok(())
    }

    fn release(&mut self) {
        self.live_resources = self.live_resources.saturating_sub(1);
    }
}
