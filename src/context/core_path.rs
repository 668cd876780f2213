use super::{Context, PathId};
use crate::error::VgError;
use crate::path::{coords_required, PATH_FORMAT_STANDARD};
use crate::renderer::RenderPath;
use crate::{Bounds, PathCapabilities, PathDatatype, PathParams, Renderer, Segment};

impl<R: Renderer> Context<R> {
    /// Creates an empty path. Requested capabilities outside the backend's
    /// allowed set are dropped. Returns `None` and records the error when the
    /// parameters are invalid or the backend cannot allocate the path.
    #[allow(clippy::too_many_arguments)]
    pub fn create_path(
        &mut self,
        format: i32,
        datatype: PathDatatype,
        scale: f32,
        bias: f32,
        segment_capacity_hint: usize,
        coord_capacity_hint: usize,
        capabilities: u32,
    ) -> Option<PathId> {
        let params = match self.path_params(
            format,
            datatype,
            scale,
            bias,
            segment_capacity_hint,
            coord_capacity_hint,
            capabilities,
        ) {
            Ok(params) => params,
            Err(e) => {
                self.set_error(e);
                return None;
            }
        };
        let res = self.renderer.create_path(&params);
        let path = self.allocated("path", res)?;
        let id = PathId(self.paths.insert(path));
        log::debug!("created path {:?} with {:?}", id, params.capabilities);
        Some(id)
    }

    #[allow(clippy::too_many_arguments)]
    fn path_params(
        &self,
        format: i32,
        datatype: PathDatatype,
        scale: f32,
        bias: f32,
        segment_capacity_hint: usize,
        coord_capacity_hint: usize,
        capabilities: u32,
    ) -> Result<PathParams, VgError> {
        self.ensure_initialized("create_path")?;
        if format != PATH_FORMAT_STANDARD {
            return Err(VgError::UnsupportedPathFormat(format));
        }
        if !scale.is_finite() || scale == 0.0 {
            return Err(VgError::IllegalArgument("path scale must be finite and non-zero"));
        }
        if !bias.is_finite() {
            return Err(VgError::IllegalArgument("path bias must be finite"));
        }
        let capabilities = PathCapabilities::from_bits_truncate(capabilities)
            & self.renderer.allowed_path_capabilities();
        Ok(PathParams {
            format,
            datatype,
            scale,
            bias,
            segment_capacity_hint,
            coord_capacity_hint,
            capabilities,
        })
    }

    /// Destroying the bound path unbinds it.
    pub fn destroy_path(&mut self, path: Option<PathId>) {
        let path = match path {
            Some(path) => path,
            None => return,
        };
        match self.paths.try_remove(path.0) {
            Some(obj) => {
                if self.current_path == Some(path) {
                    self.current_path = None;
                }
                self.renderer.destroy_path(obj);
            }
            None => log::warn!("path {:?} destroyed twice", path),
        }
    }

    /// Binds the geometry consumed by [`Context::fill`] and [`Context::stroke`].
    pub fn set_path(&mut self, path: Option<PathId>) -> Result<(), VgError> {
        let res = match path {
            Some(id) if !self.paths.contains(id.0) => Err(VgError::BadHandle("path")),
            _ => Ok(()),
        };
        self.record(res)?;
        self.current_path = path;
        Ok(())
    }

    #[inline]
    pub fn current_path(&self) -> Option<PathId> {
        self.current_path
    }

    /// Appends segments and their coordinates, given in the path's datatype
    /// units. Needs [`PathCapabilities::APPEND_TO`].
    pub fn append_path_data(
        &mut self,
        path: PathId,
        segments: &[Segment],
        coords: &[f32],
    ) -> Result<(), VgError> {
        let res = self.do_append_path_data(path, segments, coords);
        self.record(res)
    }

    fn do_append_path_data(
        &mut self,
        path: PathId,
        segments: &[Segment],
        coords: &[f32],
    ) -> Result<(), VgError> {
        if coords.len() != coords_required(segments) {
            return Err(VgError::IllegalArgument(
                "coordinate count does not match segments",
            ));
        }
        let obj = self.path_with(path, PathCapabilities::APPEND_TO)?;
        obj.append(segments, coords).map_err(|e| {
            log::warn!("path append failed: {:#}", e);
            VgError::OutOfMemory
        })
    }

    /// Removes all segments, keeping the capabilities.
    pub fn clear_path(&mut self, path: PathId) -> Result<(), VgError> {
        let res = self.path_with(path, PathCapabilities::empty()).map(|obj| obj.clear());
        self.record(res)
    }

    pub fn path_capabilities(&self, path: PathId) -> Option<PathCapabilities> {
        self.paths.get(path.0).map(|obj| obj.capabilities())
    }

    pub fn remove_path_capabilities(
        &mut self,
        path: PathId,
        caps: PathCapabilities,
    ) -> Result<(), VgError> {
        let res = self
            .path_with(path, PathCapabilities::empty())
            .map(|obj| obj.remove_capabilities(caps));
        self.record(res)
    }

    /// User-space bounds, `None` for an empty path. Needs
    /// [`PathCapabilities::PATH_BOUNDS`].
    pub fn path_bounds(&mut self, path: PathId) -> Result<Option<Bounds>, VgError> {
        let res = self
            .path_with(path, PathCapabilities::PATH_BOUNDS)
            .map(|obj| obj.bounds());
        self.record(res)
    }

    /// Bounds after the path-user and surface matrices. Needs
    /// [`PathCapabilities::PATH_TRANSFORMED_BOUNDS`].
    pub fn path_transformed_bounds(&mut self, path: PathId) -> Result<Option<Bounds>, VgError> {
        let xform = self.matrices.path_to_surface();
        let res = self
            .path_with(path, PathCapabilities::PATH_TRANSFORMED_BOUNDS)
            .map(|obj| obj.transformed_bounds(&xform));
        self.record(res)
    }

    fn path_with(
        &mut self,
        path: PathId,
        required: PathCapabilities,
    ) -> Result<&mut R::Path, VgError> {
        let obj = self
            .paths
            .get_mut(path.0)
            .ok_or(VgError::BadHandle("path"))?;
        let missing = required - obj.capabilities();
        if !missing.is_empty() {
            return Err(VgError::PathCapability(missing));
        }
        Ok(obj)
    }
}
