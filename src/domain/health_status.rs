const QUALITY: &str = "High (90-95% accuracy)";
const COST: &str = "Free";

/// Describes the loaded model for the health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub model: String,
    pub quality: &'static str,
    pub cost: &'static str,
}

impl HealthStatus {
    pub fn for_model(model_id: &str) -> Self {
        Self {
            status: "ok",
            model: format!("{} (whisper.cpp)", model_id),
            quality: QUALITY,
            cost: COST,
        }
    }
}
