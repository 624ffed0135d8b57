//! Submission flow: validate, persist, analyze, attach.
//!
//! Analysis never fails from this layer's point of view — a provider or
//! parser problem surfaces as degraded fallback content on an otherwise
//! successful submission. Validation and persistence failures do propagate,
//! each with a message fit to show the user.

use smartflow_ai::ProcessAnalyzer;
use smartflow_core::{ProcessInput, ProcessRecord, ValidationError};
use smartflow_store::{ProcessStore, StoreError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("invalid process: {0}")]
    Validation(#[from] ValidationError),

    #[error("could not save the process: {0}")]
    Storage(#[from] StoreError),
}

/// Run one submission end to end and return the analyzed record.
///
/// The input is validated before anything else; an input that fails
/// validation never reaches the analyzer or the store.
pub async fn submit_process(
    store: &dyn ProcessStore,
    analyzer: &dyn ProcessAnalyzer,
    owner_id: &str,
    input: &ProcessInput,
) -> Result<ProcessRecord, FlowError> {
    input.validate()?;

    let record = store.create(owner_id, input).await?;
    info!(id = %record.id, title = %record.title, "process stored, requesting analysis");

    // Blocks for the duration of the model call; single attempt.
    let analysis = analyzer.analyze(input).await;
    if analysis.is_fallback() {
        warn!(id = %record.id, "analysis degraded to the fallback result");
    }

    let record = store.attach_analysis(&record.id, owner_id, &analysis).await?;
    Ok(record)
}
