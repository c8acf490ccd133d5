use std::sync::Arc;

use crate::application::ports::{
    ScratchStore, ScratchStoreError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{DecodeOptions, TranscriptionResult, UploadedAudio};

const PREVIEW_CHARS: usize = 100;

/// Runs one upload through the engine: persist, infer, join, clean up.
pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    scratch_store: Arc<dyn ScratchStore>,
    options: DecodeOptions,
}

impl TranscriptionService {
    pub fn new(
        engine: Arc<dyn TranscriptionEngine>,
        scratch_store: Arc<dyn ScratchStore>,
        options: DecodeOptions,
    ) -> Self {
        Self {
            engine,
            scratch_store,
            options,
        }
    }

    pub fn model_id(&self) -> &str {
        self.engine.model_id()
    }

    #[tracing::instrument(
        skip(self, audio),
        fields(filename = %audio.filename, bytes = audio.size_bytes())
    )]
    pub async fn transcribe(
        &self,
        audio: UploadedAudio,
    ) -> Result<TranscriptionResult, TranscriptionServiceError> {
        let scratch = self
            .scratch_store
            .persist(audio.data)
            .await
            .map_err(TranscriptionServiceError::Storage)?;

        tracing::debug!(path = %scratch.path().display(), "Upload persisted, transcribing");

        // An early return drops `scratch`, which removes the file.
        let raw = self
            .engine
            .transcribe(scratch.path(), &self.options)
            .await
            .map_err(TranscriptionServiceError::Engine)?;

        if let Err(e) = scratch.close() {
            tracing::warn!(error = %e, "Scratch file cleanup failed");
        }

        let segments = raw.segments.len();
        let result = TranscriptionResult::from(raw);

        tracing::info!(
            segments,
            language = %result.language,
            preview = %preview(&result.text),
            "Transcription complete"
        );

        Ok(result)
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error(transparent)]
    Storage(ScratchStoreError),
    #[error(transparent)]
    Engine(TranscriptionError),
}
