#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start_ms: u64, end_ms: u64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            end_ms,
        }
    }

    /// Segment without timing, as produced by engines that do not report it.
    pub fn untimed(text: impl Into<String>) -> Self {
        Self::new(text, 0, 0)
    }
}

/// Joins every segment text in order with single spaces.
///
/// Each segment is trimmed first and the joined string is trimmed again.
/// A blank segment still takes its slot, so it leaves a doubled space.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.trim())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
