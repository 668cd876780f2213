use crate::alloc_pixels;
use ovgx::renderer::RenderImage;
use ovgx::{ImageFormat, ImageQuality};

pub struct SoftImage {
    format: ImageFormat,
    quality: ImageQuality,
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl SoftImage {
    pub(crate) fn new(
        format: ImageFormat,
        width: u32,
        height: u32,
        quality: ImageQuality,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            format,
            quality,
            width,
            height,
            pixels: alloc_pixels(width, height)?,
        })
    }

    pub fn quality(&self) -> ImageQuality {
        self.quality
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Converts an incoming RGBA8 texel to what this format stores.
    fn convert(&self, px: [u8; 4]) -> [u8; 4] {
        let [r, g, b, a] = px;
        match self.format {
            ImageFormat::SRgba8888 | ImageFormat::LRgba8888 => px,
            ImageFormat::SRgbx8888 => [r, g, b, 255],
            ImageFormat::SL8 => {
                let l = ((r as u32 + g as u32 + b as u32) / 3) as u8;
                [l, l, l, 255]
            }
            ImageFormat::A8 => [255, 255, 255, a],
        }
    }
}

impl RenderImage for SoftImage {
    fn format(&self) -> ImageFormat {
        self.format
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn sub_data(
        &mut self,
        data: &[u8],
        stride: usize,
        (x, y, width, height): (u32, u32, u32, u32),
    ) -> anyhow::Result<()> {
        let x1 = x.saturating_add(width).min(self.width);
        let y1 = y.saturating_add(height).min(self.height);
        for dy in y..y1 {
            let row = (dy - y) as usize * stride;
            for dx in x..x1 {
                let i = row + (dx - x) as usize * 4;
                let src = data
                    .get(i..i + 4)
                    .ok_or_else(|| anyhow!("pixel data ends at row {}", dy - y))?;
                let px = self.convert([src[0], src[1], src[2], src[3]]);
                self.pixels[(dy * self.width + dx) as usize] = px;
            }
        }
        Ok(())
    }
}
