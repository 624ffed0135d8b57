use thiserror::Error;

/// Failures while talking to the analysis provider.
///
/// These never cross the [`crate::ProcessAnalyzer`] boundary; the client
/// absorbs them into the fallback result. They exist as a type so the
/// absorption point can log what actually went wrong.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("provider response contained no completion text")]
    EmptyCompletion,
}
