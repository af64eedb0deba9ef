//! Centralized error types for Rumpex.

use serde_json::Value;
use thiserror::Error;

/// Main error type for relay operations.
///
/// The parse fallback is deliberately not represented here: a model reply
/// that yields no parseable result degrades to
/// [`crate::AnalysisResult::parse_fallback`] and is returned as a normal
/// result.
#[derive(Error, Debug)]
pub enum RumpexError {
    /// The request arrived without an image payload.
    #[error("Image is required")]
    ImageRequired,

    /// GOOGLE_API_KEY is not resolvable from the process environment.
    #[error("Google API key not configured")]
    ApiKeyMissing,

    /// Gemini answered with a non-success HTTP status. The raw upstream
    /// body is passed through to the caller verbatim.
    #[error("Error from Gemini API")]
    GeminiApi { status: u16, details: Value },

    /// Gemini answered with a success status but the expected
    /// candidate/content structure is missing.
    #[error("No valid response from Gemini API")]
    MalformedReply { data: Value },

    /// The outbound request itself failed (connect, TLS, body read).
    #[error("Request to Gemini API failed: {0}")]
    Http(String),
}

/// Result type for relay operations.
pub type RumpexResult<T> = Result<T, RumpexError>;
