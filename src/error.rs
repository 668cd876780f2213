use crate::context::LifecycleState;
use crate::path::PathCapabilities;
use thiserror::Error;

/// Error codes kept in a context's error slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    NoError,
    BadHandle,
    IllegalArgument,
    OutOfMemory,
    PathCapability,
    UnsupportedPathFormat,
    InvalidState,
    ContractViolation,
    Backend,
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::NoError
    }
}

#[derive(Debug, Error)]
pub enum VgError {
    #[error("out of memory")]
    OutOfMemory,
    #[error("`{op}` is not valid while the context is {state:?}")]
    InvalidState {
        op: &'static str,
        state: LifecycleState,
    },
    #[error("a batch is already open")]
    BatchAlreadyOpen,
    #[error("no batch is open")]
    NoOpenBatch,
    #[error("batch is not the one currently open")]
    BatchMismatch,
    #[error("bad {0} handle")]
    BadHandle(&'static str),
    #[error("illegal argument: {0}")]
    IllegalArgument(&'static str),
    #[error("unsupported path format {0}")]
    UnsupportedPathFormat(i32),
    #[error("path lacks capabilities {0:?}")]
    PathCapability(PathCapabilities),
    #[error("no paint is bound")]
    NoPaint,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl VgError {
    pub fn code(&self) -> ErrorCode {
        match self {
            VgError::OutOfMemory => ErrorCode::OutOfMemory,
            VgError::InvalidState { .. } => ErrorCode::InvalidState,
            VgError::BatchAlreadyOpen
            | VgError::NoOpenBatch
            | VgError::BatchMismatch
            | VgError::NoPaint => ErrorCode::ContractViolation,
            VgError::BadHandle(_) => ErrorCode::BadHandle,
            VgError::IllegalArgument(_) => ErrorCode::IllegalArgument,
            VgError::UnsupportedPathFormat(_) => ErrorCode::UnsupportedPathFormat,
            VgError::PathCapability(_) => ErrorCode::PathCapability,
            VgError::Backend(_) => ErrorCode::Backend,
        }
    }
}
