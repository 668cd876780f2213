use super::{BatchId, Context};
use crate::error::VgError;
use crate::renderer::RenderBatch;
use crate::Renderer;

impl<R: Renderer> Context<R> {
    pub fn create_batch(&mut self) -> Option<BatchId> {
        if let Err(e) = self.ensure_initialized("create_batch") {
            self.set_error(e);
            return None;
        }
        let res = self.renderer.create_batch();
        let batch = self.allocated("batch", res)?;
        let id = BatchId(self.batches.insert(batch));
        log::debug!("created batch {:?}", id);
        Some(id)
    }

    /// Destroying an open batch also closes the session.
    pub fn destroy_batch(&mut self, batch: Option<BatchId>) {
        let batch = match batch {
            Some(batch) => batch,
            None => return,
        };
        match self.batches.try_remove(batch.0) {
            Some(obj) => {
                if self.current_batch == Some(batch) {
                    log::warn!("destroying batch {:?} while it is open", batch);
                    self.current_batch = None;
                }
                self.renderer.destroy_batch(obj);
            }
            None => log::warn!("batch {:?} destroyed twice", batch),
        }
    }

    #[inline]
    pub fn current_batch(&self) -> Option<BatchId> {
        self.current_batch
    }

    /// Opens a batch session. Only one batch may be open per context.
    pub fn start_batch(&mut self, batch: BatchId) -> Result<(), VgError> {
        let res = self.do_start_batch(batch);
        self.record(res)
    }

    fn do_start_batch(&mut self, batch: BatchId) -> Result<(), VgError> {
        self.ensure_initialized("start_batch")?;
        if let Some(open) = self.current_batch {
            log::error!(
                "start_batch({:?}) while batch {:?} is still open",
                batch,
                open
            );
            return Err(VgError::BatchAlreadyOpen);
        }
        let obj = self
            .batches
            .get_mut(batch.0)
            .ok_or(VgError::BadHandle("batch"))?;
        self.renderer.start_batch(obj)?;
        self.current_batch = Some(batch);
        log::debug!("batch {:?} opened", batch);
        Ok(())
    }

    /// Seals the open batch. `batch` must be the handle given to
    /// [`Context::start_batch`].
    pub fn end_batch(&mut self, batch: BatchId) -> Result<(), VgError> {
        let res = self.do_end_batch(batch);
        self.record(res)
    }

    fn do_end_batch(&mut self, batch: BatchId) -> Result<(), VgError> {
        self.ensure_initialized("end_batch")?;
        self.check_current_batch(batch)?;
        let obj = self
            .batches
            .get_mut(batch.0)
            .ok_or(VgError::BadHandle("batch"))?;
        self.current_batch = None;
        self.renderer.end_batch(obj)?;
        log::debug!(
            "batch {:?} closed with {} vertices",
            batch,
            obj.vertex_count()
        );
        Ok(())
    }

    /// Read-only view of the vertices accumulated in `batch`. Valid while the
    /// batch is open or after it has been sealed.
    pub fn dump_batch(&mut self, batch: BatchId) -> Result<&[u8], VgError> {
        let res = self.check_dumpable(batch);
        self.record(res)?;
        match self.batches.get(batch.0) {
            Some(obj) => Ok(obj.dump()),
            None => Err(VgError::BadHandle("batch")),
        }
    }

    fn check_dumpable(&self, batch: BatchId) -> Result<(), VgError> {
        let obj = self
            .batches
            .get(batch.0)
            .ok_or(VgError::BadHandle("batch"))?;
        if self.current_batch == Some(batch) || obj.is_sealed() {
            return Ok(());
        }
        log::error!("dump_batch({:?}) on a batch that was never filled", batch);
        Err(VgError::BatchMismatch)
    }

    fn check_current_batch(&self, batch: BatchId) -> Result<(), VgError> {
        match self.current_batch {
            Some(open) if open == batch => Ok(()),
            Some(open) => {
                log::error!("batch {:?} given while {:?} is open", batch, open);
                Err(VgError::BatchMismatch)
            }
            None => {
                log::error!("batch {:?} given with no batch open", batch);
                Err(VgError::NoOpenBatch)
            }
        }
    }
}
