use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{AUDIO_FILE_FIELD, UploadError, UploadedAudio};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
    pub language: String,
    pub success: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Serves both `/asr` and `/transcribe`.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let audio = match read_audio_upload(multipart).await {
        Ok(audio) => audio,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.message(), "Rejected transcription request");
            return rejection.into_response();
        }
    };

    tracing::info!(
        filename = %audio.filename,
        bytes = audio.size_bytes(),
        "Received audio file"
    );

    match state.transcription_service.transcribe(audio).await {
        Ok(result) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                text: result.text,
                language: result.language,
                success: true,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                    success: Some(false),
                }),
            )
                .into_response()
        }
    }
}

async fn read_audio_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadedAudio, UploadRejection> {
    // A body that is not multipart at all carries no file either.
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Request body is not multipart");
        UploadRejection::Invalid(UploadError::MissingFile)
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(UploadRejection::Multipart)?
    {
        // A plain text part under the same name is not a file; keep looking.
        if field.name() != Some(AUDIO_FILE_FIELD) || field.file_name().is_none() {
            continue;
        }

        let filename =
            UploadedAudio::validate_filename(field.file_name()).map_err(UploadRejection::Invalid)?;
        let data = field.bytes().await.map_err(UploadRejection::Multipart)?;

        return Ok(UploadedAudio::new(filename, data));
    }

    Err(UploadRejection::Invalid(UploadError::MissingFile))
}

enum UploadRejection {
    Invalid(UploadError),
    Multipart(MultipartError),
}

impl UploadRejection {
    fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Multipart(e) => e.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Multipart(e) => format!("Failed to read multipart: {}", e.body_text()),
        }
    }
}

impl IntoResponse for UploadRejection {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.message(),
                success: None,
            }),
        )
            .into_response()
    }
}
