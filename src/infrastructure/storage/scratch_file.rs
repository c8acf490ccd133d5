use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::application::ports::{ScratchHandle, ScratchStore, ScratchStoreError};

pub const SCRATCH_PREFIX: &str = "asr-";
pub const SCRATCH_SUFFIX: &str = ".wav";

/// Writes uploads as uniquely named `.wav` files under one directory.
pub struct TempScratchStore {
    dir: PathBuf,
}

impl TempScratchStore {
    pub fn new(dir: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ScratchStore for TempScratchStore {
    async fn persist(&self, data: Bytes) -> Result<Box<dyn ScratchHandle>, ScratchStoreError> {
        let dir = self.dir.clone();
        let file = tokio::task::spawn_blocking(move || ScratchFile::write(&dir, &data))
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(format!("task join error: {e}")))??;

        Ok(Box::new(file))
    }
}

/// Temp file owned by a single request; removed on drop.
#[derive(Debug)]
pub struct ScratchFile {
    inner: NamedTempFile,
}

impl ScratchFile {
    pub fn write(dir: &Path, data: &[u8]) -> Result<Self, ScratchStoreError> {
        let mut inner = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(SCRATCH_SUFFIX)
            .tempfile_in(dir)
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;

        inner
            .write_all(data)
            .and_then(|_| inner.flush())
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(path = %inner.path().display(), bytes = data.len(), "Scratch file written");

        Ok(Self { inner })
    }
}

impl ScratchHandle for ScratchFile {
    fn path(&self) -> &Path {
        self.inner.path()
    }

    fn close(self: Box<Self>) -> Result<(), ScratchStoreError> {
        self.inner
            .close()
            .map_err(|e| ScratchStoreError::RemoveFailed(e.to_string()))
    }
}
