use std::sync::Arc;

use bytes::Bytes;

use asr_gateway::application::ports::{
    ScratchHandle, ScratchStore, ScratchStoreError, TranscriptionEngine, TranscriptionError,
};
use asr_gateway::application::services::{TranscriptionService, TranscriptionServiceError};
use asr_gateway::domain::{DecodeOptions, UploadedAudio};
use asr_gateway::infrastructure::audio::MockTranscriptionEngine;
use asr_gateway::infrastructure::storage::TempScratchStore;

use crate::helpers::{scratch_entries, silent_wav};

struct FullDiskStore;

#[async_trait::async_trait]
impl ScratchStore for FullDiskStore {
    async fn persist(&self, _data: Bytes) -> Result<Box<dyn ScratchHandle>, ScratchStoreError> {
        Err(ScratchStoreError::WriteFailed("No space left on device".to_string()))
    }
}

fn service_with(
    engine: Arc<MockTranscriptionEngine>,
    dir: &tempfile::TempDir,
) -> TranscriptionService {
    let store = TempScratchStore::new(dir.path().to_path_buf()).unwrap();
    TranscriptionService::new(engine, Arc::new(store), DecodeOptions::default())
}

fn upload(bytes: Vec<u8>) -> UploadedAudio {
    UploadedAudio::new("clip.wav".to_string(), Bytes::from(bytes))
}

#[tokio::test]
async fn given_padded_segments_when_transcribing_then_returns_joined_text_and_language() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::with_segments(&["  hi  ", "there "], "en"));
    let service = service_with(Arc::clone(&engine), &dir);

    let result = service.transcribe(upload(silent_wav())).await.unwrap();

    assert_eq!(result.text, "hi there");
    assert_eq!(result.language, "en");
}

#[tokio::test]
async fn given_upload_when_transcribing_then_engine_reads_persisted_wav_copy() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::silent());
    let service = service_with(Arc::clone(&engine), &dir);
    let wav = silent_wav();

    service.transcribe(upload(wav.clone())).await.unwrap();

    let calls = engine.calls().await;
    assert_eq!(calls.len(), 1);
    assert!(calls[0].existed);
    assert_eq!(calls[0].contents.as_deref(), Some(wav.as_slice()));
    assert_eq!(
        calls[0].path.extension().and_then(|e| e.to_str()),
        Some("wav")
    );
    assert!(calls[0].path.starts_with(dir.path()));
}

#[tokio::test]
async fn given_default_options_when_transcribing_then_engine_receives_fixed_decoding() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::silent());
    let service = service_with(Arc::clone(&engine), &dir);

    service.transcribe(upload(silent_wav())).await.unwrap();

    let options = &engine.calls().await[0].options;
    assert_eq!(options.beam_size, 5);
    assert_eq!(options.forced_language(), Some("en"));
    assert!(!options.condition_on_previous_text);
}

#[tokio::test]
async fn given_successful_transcription_when_done_then_scratch_file_is_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::with_segments(&["ok"], "en"));
    let service = service_with(Arc::clone(&engine), &dir);

    service.transcribe(upload(silent_wav())).await.unwrap();

    assert!(scratch_entries(dir.path()).is_empty());
    assert!(!engine.calls().await[0].path.exists());
}

#[tokio::test]
async fn given_engine_failure_when_transcribing_then_returns_engine_error_and_removes_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::failing("probe: unsupported format"));
    let service = service_with(Arc::clone(&engine), &dir);

    let result = service.transcribe(upload(b"not audio".to_vec())).await;

    assert!(matches!(
        result,
        Err(TranscriptionServiceError::Engine(
            TranscriptionError::DecodingFailed(_)
        ))
    ));
    assert!(engine.calls().await[0].existed);
    assert!(scratch_entries(dir.path()).is_empty());
}

#[tokio::test]
async fn given_engine_failure_when_displaying_error_then_message_is_engine_message() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::failing("bad header"));
    let service = service_with(engine, &dir);

    let err = service
        .transcribe(upload(b"junk".to_vec()))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "audio decoding failed: bad header");
}

#[tokio::test]
async fn given_storage_failure_when_transcribing_then_engine_is_never_called() {
    let engine = Arc::new(MockTranscriptionEngine::silent());
    let service = TranscriptionService::new(
        Arc::clone(&engine) as Arc<dyn TranscriptionEngine>,
        Arc::new(FullDiskStore),
        DecodeOptions::default(),
    );

    let result = service.transcribe(upload(silent_wav())).await;

    assert!(matches!(result, Err(TranscriptionServiceError::Storage(_))));
    assert!(engine.calls().await.is_empty());
}

#[tokio::test]
async fn given_concurrent_uploads_when_transcribing_then_each_gets_its_own_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::silent());
    let service = Arc::new(service_with(Arc::clone(&engine), &dir));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.transcribe(upload(silent_wav())).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut paths: Vec<_> = engine.calls().await.into_iter().map(|c| c.path).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 4);
    assert!(scratch_entries(dir.path()).is_empty());
}
