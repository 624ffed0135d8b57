//! AI analysis layer: prompt building, the OpenAI-backed analysis client, and
//! defensive parsing of free-form model output into typed results.

mod client;
mod error;
mod parse;
mod prompt;

pub use client::{AnalysisClient, AnalysisConfig};
pub use error::AiError;
pub use parse::parse_analysis;
pub use prompt::{build_prompt, SYSTEM_ROLE};

use async_trait::async_trait;
use smartflow_core::{AnalysisResult, ProcessInput};

/// Seam between the orchestration flow and whatever produces analyses.
///
/// Implementations must not fail: provider or parse trouble is expressed as
/// [`AnalysisResult::fallback`], never as an error the caller has to handle.
#[async_trait]
pub trait ProcessAnalyzer: Send + Sync {
    async fn analyze(&self, input: &ProcessInput) -> AnalysisResult;
}
