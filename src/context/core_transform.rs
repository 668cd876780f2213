use super::{Context, MatrixMode};
use crate::error::VgError;
use crate::{Matrix33, Renderer};

impl<R: Renderer> Context<R> {
    #[inline]
    pub fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.matrices.set_mode(mode);
    }

    #[inline]
    pub fn matrix_mode(&self) -> MatrixMode {
        self.matrices.mode()
    }

    #[inline]
    pub fn matrix(&self, mode: MatrixMode) -> Matrix33 {
        *self.matrices.get(mode)
    }

    pub fn set_identity(&mut self) -> Result<(), VgError> {
        self.matrices.active_mut().set_identity();
        self.load_matrix()
    }

    /// Copies the active matrix out in storage order: `a b 0 c d 0 tx ty 1`.
    pub fn transform(&self) -> [f32; 9] {
        self.matrices.active().0
    }

    /// Overwrites the active matrix with values in storage order.
    pub fn set_transform(&mut self, t: &[f32; 9]) -> Result<(), VgError> {
        *self.matrices.active_mut() = Matrix33(*t);
        self.load_matrix()
    }

    /// Composes a column-major matrix into the active one. The operand is
    /// applied before the existing transform, like the primitive operations.
    pub fn multiply(&mut self, t: &[f32; 9]) -> Result<(), VgError> {
        self.concat(Matrix33::from_column_major(t))
    }

    pub fn scale(&mut self, sx: f32, sy: f32) -> Result<(), VgError> {
        self.concat(Matrix33::scale(sx, sy))
    }

    pub fn translate(&mut self, tx: f32, ty: f32) -> Result<(), VgError> {
        self.concat(Matrix33::translate(tx, ty))
    }

    /// Rotates by `angle` degrees.
    pub fn rotate(&mut self, angle: f32) -> Result<(), VgError> {
        self.concat(Matrix33::rotate(angle.to_radians()))
    }

    fn concat(&mut self, m: Matrix33) -> Result<(), VgError> {
        let active = self.matrices.active_mut();
        *active = active.pre_multiply(m);
        self.load_matrix()
    }

    fn load_matrix(&mut self) -> Result<(), VgError> {
        let mode = self.matrices.mode();
        let res = self
            .renderer
            .load_matrix(mode, self.matrices.get(mode))
            .map_err(VgError::from);
        self.record(res)
    }
}
