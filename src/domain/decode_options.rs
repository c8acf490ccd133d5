/// Language value that asks the engine to detect the spoken language.
pub const AUTO_LANGUAGE: &str = "auto";

pub const DEFAULT_BEAM_SIZE: u32 = 5;
/// Upper bound on beam width.
pub const MAX_BEAM_SIZE: u32 = 16;
pub const DEFAULT_LANGUAGE: &str = "en";

/// Decoding parameters handed to the engine on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOptions {
    pub beam_size: u32,
    pub language: String,
    pub condition_on_previous_text: bool,
    pub n_threads: usize,
}

impl DecodeOptions {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_beam_size(mut self, beam_size: u32) -> Self {
        self.beam_size = beam_size.clamp(1, MAX_BEAM_SIZE);
        self
    }

    /// Forced language, or `None` when detection is requested.
    pub fn forced_language(&self) -> Option<&str> {
        if self.language.eq_ignore_ascii_case(AUTO_LANGUAGE) || self.language.is_empty() {
            None
        } else {
            Some(self.language.as_str())
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            beam_size: DEFAULT_BEAM_SIZE,
            language: DEFAULT_LANGUAGE.to_string(),
            condition_on_previous_text: false,
            n_threads: default_threads(),
        }
    }
}

/// Available parallelism capped at 8; whisper stops scaling past that.
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().min(8))
        .unwrap_or(4)
}
