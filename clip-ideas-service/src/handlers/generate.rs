use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;

use crate::models::GenerationRequest;
use crate::services::metrics::record_generation;
use crate::startup::AppState;

/// `POST /api/generate`: generate clip ideas for a video URL.
///
/// Registered for every method so that preflight and wrong-method requests
/// get the service's own answers. CORS headers come from the router layer.
pub async fn generate_clips(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let request = GenerationRequest::from_body(&body);

    let video_url = request
        .video_url()
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Video URL is required")))?;
    let count = request.clip_count();

    tracing::info!(
        video_url = %video_url,
        clip_count = count.get(),
        "Generating clip ideas"
    );

    match state.generator.generate(&video_url, count).await {
        Ok(clips) => {
            record_generation("success", count.get());
            Ok((StatusCode::OK, Json(clips)).into_response())
        }
        Err(e) => {
            record_generation(e.outcome(), count.get());
            tracing::error!(
                error = %e,
                video_url = %video_url,
                "Clip generation failed"
            );
            Err(AppError::GenerationFailed(e.to_string()))
        }
    }
}
