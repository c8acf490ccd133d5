mod decode_options;
mod health_status;
mod transcript_segment;
mod transcription;
mod uploaded_audio;

pub use decode_options::{
    AUTO_LANGUAGE, DEFAULT_BEAM_SIZE, DEFAULT_LANGUAGE, DecodeOptions, MAX_BEAM_SIZE,
    default_threads,
};
pub use health_status::HealthStatus;
pub use transcript_segment::{TranscriptSegment, join_segments};
pub use transcription::{RawTranscription, TranscriptionResult};
pub use uploaded_audio::{AUDIO_FILE_FIELD, UploadError, UploadedAudio};
