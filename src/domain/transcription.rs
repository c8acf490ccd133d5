use super::transcript_segment::{TranscriptSegment, join_segments};

/// Engine output before the segments are flattened into a transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTranscription {
    pub segments: Vec<TranscriptSegment>,
    pub language: String,
}

impl RawTranscription {
    pub fn new(segments: Vec<TranscriptSegment>, language: impl Into<String>) -> Self {
        Self {
            segments,
            language: language.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub text: String,
    pub language: String,
}

impl From<RawTranscription> for TranscriptionResult {
    fn from(raw: RawTranscription) -> Self {
        Self {
            text: join_segments(&raw.segments),
            language: raw.language,
        }
    }
}
