use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::services::AnalysisError;
use crate::domain::{AnalysisReport, AudioClip, Pace, Tone};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub text: String,
    pub words_per_minute: u32,
    pub filler_words: Vec<String>,
    pub tone: Tone,
    pub pace: Pace,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a multipart upload carrying the audio file in the `file` field
/// and runs the full analysis pipeline. `/analyze` and `/analyze_microphone`
/// both land here.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read file bytes");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read file: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        upload = Some((filename, data.to_vec()));
        break;
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Analysis request with no file field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file provided".to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File upload received");

    let clip = AudioClip::new(filename, data);

    match state.analysis_service.analyze(clip).await {
        Ok(report) => (StatusCode::OK, Json(to_response(report))).into_response(),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Analysis failed");
            } else {
                tracing::warn!(error = %e, "Analysis rejected");
            }
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

fn to_response(report: AnalysisReport) -> AnalyzeResponse {
    AnalyzeResponse {
        text: report.text,
        words_per_minute: report.words_per_minute,
        filler_words: report.filler_words,
        tone: report.tone,
        pace: report.pace,
    }
}

fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::InvalidInput(_)
        | AnalysisError::Conversion(_)
        | AnalysisError::UnintelligibleAudio => StatusCode::BAD_REQUEST,
        AnalysisError::TranscriptionService(_)
        | AnalysisError::Sentiment(_)
        | AnalysisError::InvalidDuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
