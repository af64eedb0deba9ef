//! Application state.

use std::sync::Arc;

use rumpex_vision::{GeminiClient, DEFAULT_MODEL};

/// Application state shared across handlers.
///
/// `analyzer` is `None` when no API key was resolvable at startup. The
/// relay still serves; each analysis request then reports the
/// configuration error, the way the original per-invocation check did.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Option<Arc<GeminiClient>>,
}

impl AppState {
    /// Build state from GOOGLE_API_KEY and optional GEMINI_MODEL.
    pub fn from_env() -> Self {
        let analyzer = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| {
                let model =
                    std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
                Arc::new(GeminiClient::with_model(&key, &model))
            });
        Self { analyzer }
    }

    pub fn with_analyzer(analyzer: Arc<GeminiClient>) -> Self {
        Self { analyzer: Some(analyzer) }
    }

    pub fn without_analyzer() -> Self {
        Self { analyzer: None }
    }
}
