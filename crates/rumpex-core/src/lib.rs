//! Rumpex Core Library
//!
//! Domain model, error taxonomy and reply-text utilities for the Rumpex AI
//! rump-angle analysis service.

pub mod error;
pub mod extract;
pub mod model;

pub use error::{RumpexError, RumpexResult};
pub use extract::extract_json_object;
pub use model::{AnalysisResult, ScoreCategory, PARSE_FALLBACK_REASON};
