mod health;
mod transcribe;

pub use health::{HealthResponse, health_handler};
pub use transcribe::{ErrorResponse, TranscribeResponse, transcribe_handler};
