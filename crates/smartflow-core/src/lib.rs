//! Core types for SmartFlow: process descriptions, analysis results, stored
//! records, and the validation/formatting helpers shared by every layer.

pub mod analysis;
pub mod helpers;
pub mod process;
pub mod record;

pub use analysis::{AnalysisResult, Recommendation, Savings};
pub use helpers::{validate_email, validate_password, PasswordIssue};
pub use process::{
    Budget, CompanyProfile, CompanySize, Frequency, Industry, Participants, ProcessInput,
    ProcessShape, ValidationError, MIN_DESCRIPTION_CHARS,
};
pub use record::{ProcessRecord, ProcessStatus};
