//! Analysis relay route handler.
//!
//! `POST /api/analyze` — validates the request, forwards the image to the
//! vision client and maps every `RumpexError` variant to its wire envelope
//! (status code plus JSON body).

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use rumpex_core::{AnalysisResult, RumpexError};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Data URL or bare base64 string.
    #[serde(default)]
    pub image: Option<String>,
    /// Optional instruction overriding the built-in veterinary prompt.
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Wire envelope for relay errors.
pub struct ApiError(pub RumpexError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            RumpexError::ImageRequired => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Image is required"}),
            ),
            RumpexError::ApiKeyMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Google API key not configured"}),
            ),
            // Upstream status passes through verbatim, 503 stays 503.
            RumpexError::GeminiApi { status, details } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({"error": "Error from Gemini API", "details": details}),
            ),
            RumpexError::MalformedReply { data } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "No valid response from Gemini API", "data": data}),
            ),
            RumpexError::Http(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": message}),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Handler for `POST /api/analyze`.
///
/// An empty `image` string counts as missing, matching the original
/// relay's presence check. The parse fallback arrives here as a normal
/// result and goes out as a 200.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let image = request
        .image
        .filter(|image| !image.is_empty())
        .ok_or(ApiError(RumpexError::ImageRequired))?;
    let analyzer = state
        .analyzer
        .as_ref()
        .ok_or(ApiError(RumpexError::ApiKeyMissing))?;

    let request_id = Uuid::new_v4();
    debug!(%request_id, custom_prompt = request.prompt.is_some(), "forwarding analysis request");

    let result = analyzer
        .analyze(&image, request.prompt.as_deref())
        .await
        .map_err(ApiError)?;

    info!(%request_id, valido = result.valido, "analysis complete");
    Ok(Json(result))
}
