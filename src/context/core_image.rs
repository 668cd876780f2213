use super::{Context, ImageFormat, ImageId, ImageMode, ImageQuality};
use crate::error::VgError;
use crate::renderer::RenderImage;
use crate::Renderer;

impl<R: Renderer> Context<R> {
    /// Creates a `width` x `height` image. Format and quality are passed to
    /// the backend untouched.
    pub fn create_image(
        &mut self,
        format: ImageFormat,
        width: u32,
        height: u32,
        allowed_quality: ImageQuality,
    ) -> Option<ImageId> {
        let res = self.ensure_initialized("create_image").and_then(|_| {
            if width == 0 || height == 0 {
                Err(VgError::IllegalArgument("image dimensions must be positive"))
            } else {
                Ok(())
            }
        });
        if let Err(e) = res {
            self.set_error(e);
            return None;
        }
        let res = self
            .renderer
            .create_image(format, width, height, allowed_quality);
        let image = self.allocated("image", res)?;
        let id = ImageId(self.images.insert(image));
        log::debug!("created {}x{} {:?} image {:?}", width, height, format, id);
        Some(id)
    }

    pub fn destroy_image(&mut self, image: Option<ImageId>) {
        let image = match image {
            Some(image) => image,
            None => return,
        };
        match self.images.try_remove(image.0) {
            Some(obj) => self.renderer.destroy_image(obj),
            None => log::warn!("image {:?} destroyed twice", image),
        }
    }

    pub fn image_size(&self, image: ImageId) -> Option<(u32, u32)> {
        self.images.get(image.0).map(|obj| obj.size())
    }

    pub fn image_format(&self, image: ImageId) -> Option<ImageFormat> {
        self.images.get(image.0).map(|obj| obj.format())
    }

    /// Uploads RGBA8 rows of `stride` bytes into the `width` x `height`
    /// rectangle at `(x, y)`, clipped to the image.
    #[allow(clippy::too_many_arguments)]
    pub fn image_sub_data(
        &mut self,
        image: ImageId,
        data: &[u8],
        stride: usize,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<(), VgError> {
        let res = self.do_image_sub_data(image, data, stride, (x, y, width, height));
        self.record(res)
    }

    fn do_image_sub_data(
        &mut self,
        image: ImageId,
        data: &[u8],
        stride: usize,
        rect: (u32, u32, u32, u32),
    ) -> Result<(), VgError> {
        let (_, _, width, height) = rect;
        if width == 0 || height == 0 {
            return Err(VgError::IllegalArgument("empty upload rectangle"));
        }
        if stride < width as usize * 4 {
            return Err(VgError::IllegalArgument("stride shorter than a row"));
        }
        if data.len() < stride * (height as usize - 1) + width as usize * 4 {
            return Err(VgError::IllegalArgument("pixel data too short"));
        }
        let obj = self
            .images
            .get_mut(image.0)
            .ok_or(VgError::BadHandle("image"))?;
        obj.sub_data(data, stride, rect)?;
        Ok(())
    }

    pub fn set_image_mode(&mut self, mode: ImageMode) -> Result<(), VgError> {
        let res = self.apply_image_mode(mode);
        self.record(res)
    }

    fn apply_image_mode(&mut self, mode: ImageMode) -> Result<(), VgError> {
        self.ensure_initialized("set_image_mode")?;
        if self.image_mode == mode {
            return Ok(());
        }
        self.image_mode = mode;
        self.renderer.set_image_mode(mode)?;
        Ok(())
    }

    #[inline]
    pub fn image_mode(&self) -> ImageMode {
        self.image_mode
    }
}
