//! Normalized output of the analysis pipeline.
//!
//! Every field carries `#[serde(default)]` so a partially filled model answer
//! still deserializes; absent numbers become 0 and absent lists become empty.
//! Unknown fields in the model's JSON are ignored.

use serde::{Deserialize, Serialize};

/// Estimated monthly savings if the process were automated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Savings {
    pub monthly_hours: f64,
    pub monthly_currency: f64,
}

/// One concrete tool recommendation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub tool_name: String,
    pub description: String,
    pub rollout_time: String,
    pub monthly_cost: f64,
}

/// The AI-generated assessment of a process's automation potential.
///
/// `potential_score` is 1..=10 for a live answer and
/// [`FALLBACK_SCORE`](Self::FALLBACK_SCORE) when the provider or parser could
/// not produce one. Numeric values are stored as the model returned them;
/// negative savings are not clamped here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub potential_score: u8,
    pub savings: Savings,
    pub recommendations: Vec<Recommendation>,
    pub rollout_plan: Vec<String>,
    pub notes: Vec<String>,
}

impl AnalysisResult {
    /// Score assigned when no usable answer was produced. Outside the live
    /// 1..=10 range so callers can tell degraded results apart.
    pub const FALLBACK_SCORE: u8 = 0;

    /// The fixed result returned when the provider call or response parsing
    /// fails: zero score, zero savings, no recommendations.
    pub fn fallback() -> Self {
        Self::default()
    }

    pub fn is_fallback(&self) -> bool {
        self.potential_score == Self::FALLBACK_SCORE
    }
}
