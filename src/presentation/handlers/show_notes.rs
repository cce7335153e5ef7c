use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::application::services::{PipelineError, resolve};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ShowNoteResponse {
    pub job_id: String,
    pub title: String,
    pub transcript_service: String,
    pub llm_service: Option<String>,
    pub document_path: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts the flat options map (the resolver's recognized keys plus the
/// media `url`), resolves it, and runs one pipeline job to completion.
#[tracing::instrument(skip(state, request))]
pub async fn show_notes_handler(
    State(state): State<AppState>,
    Json(request): Json<Map<String, Value>>,
) -> impl IntoResponse {
    let Some(url) = request.get("url").and_then(Value::as_str).map(String::from) else {
        tracing::warn!("show-notes request without a media url");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "missing required field: url".to_string(),
            }),
        )
            .into_response();
    };

    let config = match resolve(&request) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "request failed option resolution");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.show_note_service.run(&url, &config).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ShowNoteResponse {
                job_id: outcome.job_id.to_string(),
                title: outcome.title,
                transcript_service: config.transcription.provider.to_string(),
                llm_service: config
                    .llm
                    .as_ref()
                    .map(|selection| selection.provider.to_string()),
                document_path: outcome
                    .document_path
                    .map(|path| path.display().to_string()),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "show note generation failed");
            let status = match &e {
                PipelineError::Transcription { .. } | PipelineError::Llm { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
