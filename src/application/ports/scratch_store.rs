use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

/// Short-lived on-disk copies of uploads, handed to engines by path.
#[async_trait]
pub trait ScratchStore: Send + Sync {
    async fn persist(&self, data: Bytes) -> Result<Box<dyn ScratchHandle>, ScratchStoreError>;
}

/// A persisted upload. The backing file is removed when the handle is dropped.
pub trait ScratchHandle: Send + Sync {
    fn path(&self) -> &Path;

    /// Removes the file now and reports removal failures, which a drop cannot.
    fn close(self: Box<Self>) -> Result<(), ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("failed to write scratch file: {0}")]
    WriteFailed(String),
    #[error("failed to remove scratch file: {0}")]
    RemoveFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
