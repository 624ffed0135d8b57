//! User-submitted process descriptions and their pre-analysis validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum description length before a process may be sent for analysis.
///
/// Shorter descriptions give the model too little to work with; the form
/// layer rejects them and they must never reach the analysis client.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("process title must not be empty")]
    EmptyTitle,
    #[error("process description must be at least {MIN_DESCRIPTION_CHARS} characters, got {0}")]
    DescriptionTooShort(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "5-10 people")]
    Small,
    #[serde(rename = "11-25 people")]
    Medium,
    #[serde(rename = "26-50 people")]
    Large,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "5-10 people",
            Self::Medium => "11-25 people",
            Self::Large => "26-50 people",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Marketing,
    Accounting,
    Retail,
    Manufacturing,
    Services,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marketing => "marketing",
            Self::Accounting => "accounting",
            Self::Retail => "retail",
            Self::Manufacturing => "manufacturing",
            Self::Services => "services",
        }
    }
}

/// Monthly budget the company is willing to spend on improvements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under 500/month")]
    Low,
    #[serde(rename = "500-2000/month")]
    Medium,
    #[serde(rename = "over 2000/month")]
    High,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "under 500/month",
            Self::Medium => "500-2000/month",
            Self::High => "over 2000/month",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participants {
    #[serde(rename = "1 person")]
    One,
    #[serde(rename = "2-3 people")]
    Few,
    #[serde(rename = "4 or more")]
    Many,
}

impl Participants {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1 person",
            Self::Few => "2-3 people",
            Self::Many => "4 or more",
        }
    }
}

/// Company attributes collected once per account and attached to every
/// submitted process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub size: CompanySize,
    pub industry: Industry,
    pub budget: Budget,
}

/// Shape of the process itself: how often it runs and what it costs to run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessShape {
    pub frequency: Frequency,
    pub participants: Participants,
    pub duration_hours: f64,
}

/// A manual business process as submitted through the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInput {
    pub title: String,
    pub description: String,
    pub company: CompanyProfile,
    pub process: ProcessShape,
    #[serde(default)]
    pub improvement_goals: Vec<String>,
}

impl ProcessInput {
    /// Check the form-level preconditions for analysis.
    ///
    /// A [`ProcessInput`] that fails here must never be handed to the
    /// analysis client; callers surface the error and re-prompt the user.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let chars = self.description.chars().count();
        if chars < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooShort(chars));
        }
        Ok(())
    }
}
