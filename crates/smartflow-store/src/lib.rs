//! Storage layer: the owner-scoped process repository over Supabase's row
//! API, plus the auth client that supplies owner identities.

mod auth;
mod error;
mod memory;
mod supabase;

pub use auth::{AuthClient, AuthError, User};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use async_trait::async_trait;
use serde::Serialize;
use smartflow_core::{AnalysisResult, ProcessInput, ProcessRecord};

/// Partial update applied to a stored process. `None` fields are left alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_data: Option<ProcessInput>,
}

/// Owner-scoped CRUD over stored processes.
///
/// Records are never physically erased: [`soft_delete`](Self::soft_delete)
/// stamps `deleted_at` and every read skips stamped rows. Operations that
/// name a record fail with [`StoreError::NotFound`] when it is absent,
/// already deleted, or owned by someone else; `soft_delete` instead returns
/// `false` so deleting twice stays idempotent.
#[async_trait]
pub trait ProcessStore: Send + Sync {
    /// Insert a newly submitted process with status `new` and no analysis.
    async fn create(
        &self,
        owner_id: &str,
        input: &ProcessInput,
    ) -> Result<ProcessRecord, StoreError>;

    /// Attach an analysis: stores it, denormalizes `potential_score`, and
    /// moves the record to status `analyzed`.
    async fn attach_analysis(
        &self,
        id: &str,
        owner_id: &str,
        analysis: &AnalysisResult,
    ) -> Result<ProcessRecord, StoreError>;

    /// Fetch a single live record by id.
    async fn get(&self, id: &str, owner_id: &str) -> Result<ProcessRecord, StoreError>;

    /// All live records for this owner, most recent first.
    async fn list(&self, owner_id: &str) -> Result<Vec<ProcessRecord>, StoreError>;

    /// Apply a partial update to a live record.
    async fn update(
        &self,
        id: &str,
        owner_id: &str,
        patch: ProcessPatch,
    ) -> Result<ProcessRecord, StoreError>;

    /// Stamp `deleted_at` on a live record. Returns `false` when no matching
    /// live record exists.
    async fn soft_delete(&self, id: &str, owner_id: &str) -> Result<bool, StoreError>;
}
