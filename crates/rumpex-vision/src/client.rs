//! Gemini generateContent client for rump-angle analysis.
//!
//! Builds the single-turn request embedding the image and the instruction
//! prompt, performs one upstream call through the transport seam, and
//! normalizes the free-text reply into an `AnalysisResult`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use rumpex_core::{extract_json_object, AnalysisResult, RumpexError, RumpexResult};

use crate::prompt::ANALYSIS_PROMPT;
use crate::transport::{GenerateTransport, HttpTransport};

/// Default Gemini API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Declared MIME for the inline payload. Fixed to JPEG regardless of the
/// uploaded format; the endpoint tolerates the mismatch.
const INLINE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One request part: either text or inline image data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), inline_data: None }
    }

    fn inline_data(mime_type: &str, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Generation parameters. Low temperature favors deterministic scoring.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

/// Client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    transport: Arc<dyn GenerateTransport>,
}

impl GeminiClient {
    /// reqwest-backed client against the default endpoint and model.
    pub fn new(api_key: &str) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// reqwest-backed client against a specific model.
    pub fn with_model(api_key: &str, model: &str) -> Self {
        let url = format!("{}/v1beta/models/{}:generateContent", DEFAULT_API_BASE, model);
        Self::with_transport(Arc::new(HttpTransport::new(url, api_key)))
    }

    /// Client over an arbitrary transport. Tests use this to stub the
    /// upstream call.
    pub fn with_transport(transport: Arc<dyn GenerateTransport>) -> Self {
        Self { transport }
    }

    /// Analyze one image, passed as a data URL or bare base64 string.
    /// `prompt` overrides the built-in veterinary instruction.
    ///
    /// Exactly one upstream call per invocation. Upstream failures surface
    /// as errors; an unparseable reply degrades to the canonical fallback
    /// result instead.
    pub async fn analyze(
        &self,
        image: &str,
        prompt: Option<&str>,
    ) -> RumpexResult<AnalysisResult> {
        let request = build_request(image, prompt);
        let reply = self.transport.generate(&request).await?;

        if !(200..300).contains(&reply.status) {
            return Err(RumpexError::GeminiApi {
                status: reply.status,
                details: reply.body,
            });
        }

        let Some(text) = reply
            .body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
        else {
            return Err(RumpexError::MalformedReply { data: reply.body });
        };

        debug!(reply_len = text.len(), "received model reply");
        Ok(normalize_reply(text))
    }
}

/// Build the single-turn generateContent request.
fn build_request(image: &str, prompt: Option<&str>) -> GenerateContentRequest {
    let data = strip_data_url(image);
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::text(prompt.unwrap_or(ANALYSIS_PROMPT)),
                Part::inline_data(INLINE_MIME_TYPE, data),
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.3,
            top_k: 32,
            top_p: 1.0,
            max_output_tokens: 512,
        },
    }
}

/// Strip a `data:<mime>;base64,` prefix when present.
///
/// Neither the declared MIME nor the payload is validated; malformed base64
/// is passed through for the endpoint to reject.
fn strip_data_url(image: &str) -> &str {
    match image.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => image,
    }
}

/// Parse the model's free-text reply into an `AnalysisResult`.
///
/// The model is instructed to answer with a bare JSON object but its
/// formatting is not deterministic. A reply with no locatable span, or one
/// that does not fit the result shape, degrades to the canonical fallback.
fn normalize_reply(text: &str) -> AnalysisResult {
    let Some(json) = extract_json_object(text) else {
        warn!("no JSON object in model reply, returning fallback");
        return AnalysisResult::parse_fallback();
    };
    match serde_json::from_str(&json) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "model reply did not match the result shape, returning fallback");
            AnalysisResult::parse_fallback()
        }
    }
}
