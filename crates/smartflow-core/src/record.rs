//! Persisted process rows as stored in the `processes` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::process::ProcessInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    /// Submitted but not yet analyzed.
    New,
    /// An [`AnalysisResult`] has been attached.
    Analyzed,
}

impl ProcessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Analyzed => "analyzed",
        }
    }
}

/// One stored process, owned by a single user.
///
/// `potential_score` is the canonical denormalized copy of
/// `ai_analysis.potential_score`, written only when the analysis is attached;
/// it exists so lists can sort without unpacking the JSON column. A record is
/// never physically erased: deletion sets `deleted_at` and every read filters
/// on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: String,
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub form_data: ProcessInput,
    #[serde(default)]
    pub ai_analysis: Option<AnalysisResult>,
    #[serde(default)]
    pub potential_score: u8,
    pub status: ProcessStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ProcessRecord {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
