use super::MatrixMode;
use crate::Matrix33;

/// The three per-context matrices and the mode selecting the active one.
#[derive(Debug, Clone)]
pub struct TransformStack {
    mode: MatrixMode,
    surface: Matrix33,
    path_user: Matrix33,
    image_user: Matrix33,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            mode: MatrixMode::PathUser,
            surface: Matrix33::identity(),
            path_user: Matrix33::identity(),
            image_user: Matrix33::identity(),
        }
    }
}

impl TransformStack {
    #[inline]
    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    #[inline]
    pub fn set_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    pub fn get(&self, mode: MatrixMode) -> &Matrix33 {
        match mode {
            MatrixMode::Surface => &self.surface,
            MatrixMode::PathUser => &self.path_user,
            MatrixMode::ImageUser => &self.image_user,
        }
    }

    fn get_mut(&mut self, mode: MatrixMode) -> &mut Matrix33 {
        match mode {
            MatrixMode::Surface => &mut self.surface,
            MatrixMode::PathUser => &mut self.path_user,
            MatrixMode::ImageUser => &mut self.image_user,
        }
    }

    #[inline]
    pub fn active(&self) -> &Matrix33 {
        self.get(self.mode)
    }

    #[inline]
    pub fn active_mut(&mut self) -> &mut Matrix33 {
        self.get_mut(self.mode)
    }

    /// Path user space to device space.
    pub fn path_to_surface(&self) -> Matrix33 {
        self.path_user * self.surface
    }

    /// Image user space to device space.
    pub fn image_to_surface(&self) -> Matrix33 {
        self.image_user * self.surface
    }
}
