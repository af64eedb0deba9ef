//! Rumpex Vision
//!
//! Gemini generateContent client: request construction, the single upstream
//! call, and normalization of the model's free-text reply into an
//! `AnalysisResult`.

pub mod client;
pub mod prompt;
pub mod transport;

pub use client::{GeminiClient, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use prompt::ANALYSIS_PROMPT;
pub use transport::{GenerateTransport, HttpTransport, UpstreamReply};
