use std::sync::Arc;

use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(transcription_service: TranscriptionService, settings: Settings) -> Self {
        Self {
            transcription_service: Arc::new(transcription_service),
            settings,
        }
    }
}
