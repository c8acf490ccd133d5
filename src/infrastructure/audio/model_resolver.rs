use std::path::{Path, PathBuf};

use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};

use crate::application::ports::TranscriptionError;

/// Hugging Face repo hosting the GGML conversions of the Whisper models.
pub const WHISPER_CPP_REPO: &str = "ggerganov/whisper.cpp";

pub fn model_file_name(model_id: &str) -> String {
    format!("ggml-{}.bin", model_id)
}

/// Returns a local GGML file for `model_id`.
///
/// An explicit `local_path` wins and must exist. Otherwise the file is
/// fetched into the Hugging Face cache, which is a no-op once cached.
pub fn resolve_model_path(
    model_id: &str,
    local_path: Option<&Path>,
) -> Result<PathBuf, TranscriptionError> {
    if let Some(path) = local_path {
        if !path.is_file() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "model file not found: {}",
                path.display()
            )));
        }
        return Ok(path.to_path_buf());
    }

    let file_name = model_file_name(model_id);
    tracing::info!(
        repo = WHISPER_CPP_REPO,
        file = %file_name,
        "Fetching whisper model from Hugging Face"
    );

    let api = Api::new().map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;
    let repo = api.repo(Repo::new(WHISPER_CPP_REPO.to_string(), RepoType::Model));

    repo.get(&file_name)
        .map_err(|e| TranscriptionError::ModelLoadFailed(format!("{}: {}", file_name, e)))
}
