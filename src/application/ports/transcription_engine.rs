use std::path::Path;

use async_trait::async_trait;

use crate::domain::{DecodeOptions, RawTranscription};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribes the audio file at `audio_path` into ordered segments.
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &DecodeOptions,
    ) -> Result<RawTranscription, TranscriptionError>;

    /// Identifier of the loaded model, e.g. `base.en`.
    fn model_id(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
