use asr_gateway::domain::{RawTranscription, TranscriptSegment, TranscriptionResult, join_segments};

fn segments(texts: &[&str]) -> Vec<TranscriptSegment> {
    texts.iter().map(|t| TranscriptSegment::untimed(*t)).collect()
}

#[test]
fn given_padded_segments_when_joining_then_trims_and_joins_with_single_space() {
    let joined = join_segments(&segments(&["  hi  ", "there "]));
    assert_eq!(joined, "hi there");
}

#[test]
fn given_no_segments_when_joining_then_returns_empty_string() {
    assert_eq!(join_segments(&[]), "");
}

#[test]
fn given_blank_segment_between_words_when_joining_then_keeps_its_slot() {
    let joined = join_segments(&segments(&[" one", "   ", "two "]));
    assert_eq!(joined, "one  two");
}

#[test]
fn given_blank_edge_segments_when_joining_then_outer_whitespace_is_trimmed() {
    let joined = join_segments(&segments(&["  ", "middle", " "]));
    assert_eq!(joined, "middle");
}

#[test]
fn given_segments_with_inner_whitespace_when_joining_then_inner_whitespace_is_kept() {
    let joined = join_segments(&segments(&[" hello  world ", "again"]));
    assert_eq!(joined, "hello  world again");
}

#[test]
fn given_raw_transcription_when_converting_then_keeps_engine_language() {
    let raw = RawTranscription::new(segments(&[" Good morning.", " How are you?"]), "en");

    let result = TranscriptionResult::from(raw);

    assert_eq!(result.text, "Good morning. How are you?");
    assert_eq!(result.language, "en");
}

#[test]
fn given_timed_segment_when_created_then_keeps_bounds() {
    let segment = TranscriptSegment::new("hi", 120, 980);
    assert_eq!(segment.start_ms, 120);
    assert_eq!(segment.end_ms, 980);
}
