use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{DecodeOptions, RawTranscription, TranscriptSegment};

use super::audio_decoder::decode_audio_file;

/// whisper.cpp engine. The context is loaded once and shared; each call
/// gets its own decoder state, so concurrent requests need no lock.
pub struct WhisperEngine {
    ctx: Arc<WhisperContext>,
    model_id: String,
}

impl WhisperEngine {
    pub fn load(
        model_id: &str,
        model_path: &Path,
        use_gpu: bool,
    ) -> Result<Self, TranscriptionError> {
        tracing::info!(
            model = model_id,
            path = %model_path.display(),
            use_gpu,
            "Initializing whisper.cpp transcription engine"
        );

        let path_str = model_path.to_str().ok_or_else(|| {
            TranscriptionError::ModelLoadFailed(format!(
                "model path is not valid UTF-8: {}",
                model_path.display()
            ))
        })?;

        let mut ctx_params = WhisperContextParameters::default();
        ctx_params.use_gpu(use_gpu);

        let ctx = WhisperContext::new_with_params(path_str, ctx_params)
            .map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;

        tracing::info!(model = model_id, "Whisper model loaded successfully");

        Ok(Self {
            ctx: Arc::new(ctx),
            model_id: model_id.to_string(),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &DecodeOptions,
    ) -> Result<RawTranscription, TranscriptionError> {
        let ctx = Arc::clone(&self.ctx);
        let path = audio_path.to_path_buf();
        let options = options.clone();

        tokio::task::spawn_blocking(move || {
            let pcm = decode_audio_file(&path)?;
            run_inference(&ctx, &pcm, &options)
        })
        .await
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("task join error: {e}")))?
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

fn run_inference(
    ctx: &WhisperContext,
    pcm: &[f32],
    options: &DecodeOptions,
) -> Result<RawTranscription, TranscriptionError> {
    let beam_size = i32::try_from(options.beam_size).map_err(|_| {
        TranscriptionError::TranscriptionFailed(format!(
            "beam size {} out of range",
            options.beam_size
        ))
    })?;

    let mut params = FullParams::new(SamplingStrategy::BeamSearch {
        beam_size,
        patience: -1.0,
    });
    params.set_language(options.forced_language());
    params.set_translate(false);
    params.set_no_context(!options.condition_on_previous_text);
    params.set_n_threads(options.n_threads as i32);
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    let mut state = ctx
        .create_state()
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("state: {}", e)))?;

    state
        .full(params, pcm)
        .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;

    let n_segments = state
        .full_n_segments()
        .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;

    let mut segments = Vec::with_capacity(n_segments.max(0) as usize);
    for i in 0..n_segments {
        let text = state
            .full_get_segment_text(i)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segment {i}: {e}")))?;

        // centiseconds
        let t0 = state.full_get_segment_t0(i).unwrap_or(0).max(0) as u64 * 10;
        let t1 = state.full_get_segment_t1(i).unwrap_or(0).max(0) as u64 * 10;

        segments.push(TranscriptSegment::new(text, t0, t1));
    }

    let language = state
        .full_lang_id_from_state()
        .ok()
        .and_then(whisper_rs::get_lang_str)
        .or(options.forced_language())
        .unwrap_or(crate::domain::DEFAULT_LANGUAGE)
        .to_string();

    tracing::debug!(
        segments = segments.len(),
        language = %language,
        "Whisper inference finished"
    );

    Ok(RawTranscription::new(segments, language))
}
