use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{DecodeOptions, RawTranscription, TranscriptSegment};

/// What the engine saw on one call, captured while the file still existed.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: PathBuf,
    pub existed: bool,
    pub contents: Option<Vec<u8>>,
    pub options: DecodeOptions,
}

enum Outcome {
    Segments(Vec<TranscriptSegment>, String),
    Failure(String),
}

/// Scripted engine for exercising the HTTP surface without a model.
pub struct MockTranscriptionEngine {
    model_id: String,
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTranscriptionEngine {
    pub fn with_segments(texts: &[&str], language: &str) -> Self {
        let segments = texts
            .iter()
            .map(|t| TranscriptSegment::untimed(*t))
            .collect();
        Self::new(Outcome::Segments(segments, language.to_string()))
    }

    pub fn silent() -> Self {
        Self::with_segments(&[], "en")
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Outcome::Failure(message.to_string()))
    }

    fn new(outcome: Outcome) -> Self {
        Self {
            model_id: "mock".to_string(),
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &DecodeOptions,
    ) -> Result<RawTranscription, TranscriptionError> {
        let contents = tokio::fs::read(audio_path).await.ok();
        self.calls.lock().await.push(RecordedCall {
            path: audio_path.to_path_buf(),
            existed: contents.is_some(),
            contents,
            options: options.clone(),
        });

        match &self.outcome {
            Outcome::Segments(segments, language) => {
                Ok(RawTranscription::new(segments.clone(), language.clone()))
            }
            Outcome::Failure(message) => {
                Err(TranscriptionError::DecodingFailed(message.clone()))
            }
        }
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
