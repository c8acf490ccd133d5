pub mod audio_decoder;
mod mock_transcription_engine;
pub mod model_resolver;
mod whisper_engine;

pub use mock_transcription_engine::{MockTranscriptionEngine, RecordedCall};
pub use model_resolver::resolve_model_path;
pub use whisper_engine::WhisperEngine;
