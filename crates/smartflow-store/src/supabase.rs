//! Process repository over Supabase's PostgREST row API.
//!
//! Every operation is a single HTTP round trip against the `processes`
//! table: equality filters on `id` and `user_id`, a `deleted_at=is.null`
//! filter on reads and updates, and `Prefer: return=representation` on
//! writes so the affected rows come back in the response. An empty
//! representation after a filtered write means the record was absent,
//! deleted, or foreign-owned.

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use smartflow_core::{AnalysisResult, ProcessInput, ProcessRecord, ProcessStatus};
use tracing::info;

use crate::{ProcessPatch, ProcessStore, StoreError};

const PROCESSES_TABLE: &str = "processes";

/// Supabase-backed [`ProcessStore`].
///
/// Constructed explicitly from a project URL and key and passed to whoever
/// needs it; there is no process-wide connection handle. The backend owns
/// consistency; concurrent edits are last-write-wins and nothing here
/// retries.
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct NewProcessRow<'a> {
    user_id: &'a str,
    title: &'a str,
    description: &'a str,
    form_data: &'a ProcessInput,
    status: ProcessStatus,
}

#[derive(Serialize)]
struct AttachAnalysisRow<'a> {
    ai_analysis: &'a AnalysisResult,
    potential_score: u8,
    status: ProcessStatus,
}

/// Filter pair for one owner's live rows.
fn owner_filter(owner_id: &str) -> [(&'static str, String); 2] {
    [
        ("user_id", format!("eq.{owner_id}")),
        ("deleted_at", "is.null".to_string()),
    ]
}

/// Filter triple pinning a single live row to its owner.
fn record_filter(id: &str, owner_id: &str) -> [(&'static str, String); 3] {
    [
        ("id", format!("eq.{id}")),
        ("user_id", format!("eq.{owner_id}")),
        ("deleted_at", "is.null".to_string()),
    ]
}

impl SupabaseStore {
    /// Create a store for the given Supabase project.
    ///
    /// `base_url` is the project URL such as `https://xyz.supabase.co`
    /// (no trailing slash); `api_key` is the anon or service key.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{PROCESSES_TABLE}", self.base_url)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Send a prepared request and decode the returned rows.
    async fn fetch_rows(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<Vec<ProcessRecord>, StoreError> {
        let resp = self.authed(req).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let rows: Vec<ProcessRecord> = resp.json().await?;
        Ok(rows)
    }

    /// Send a write and decode the representation of the affected rows.
    async fn write_rows(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<Vec<ProcessRecord>, StoreError> {
        self.fetch_rows(req.header("Prefer", "return=representation"))
            .await
    }

    fn single(rows: Vec<ProcessRecord>, id: &str) -> Result<ProcessRecord, StoreError> {
        rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })
    }
}

#[async_trait]
impl ProcessStore for SupabaseStore {
    async fn create(
        &self,
        owner_id: &str,
        input: &ProcessInput,
    ) -> Result<ProcessRecord, StoreError> {
        let row = NewProcessRow {
            user_id: owner_id,
            title: &input.title,
            description: &input.description,
            form_data: input,
            status: ProcessStatus::New,
        };
        let rows = self
            .write_rows(self.client.post(self.table_url()).json(&row))
            .await?;
        let record = rows.into_iter().next().ok_or(StoreError::NoRows)?;
        info!(id = %record.id, title = %record.title, "process created");
        Ok(record)
    }

    async fn attach_analysis(
        &self,
        id: &str,
        owner_id: &str,
        analysis: &AnalysisResult,
    ) -> Result<ProcessRecord, StoreError> {
        let row = AttachAnalysisRow {
            ai_analysis: analysis,
            potential_score: analysis.potential_score,
            status: ProcessStatus::Analyzed,
        };
        let rows = self
            .write_rows(
                self.client
                    .patch(self.table_url())
                    .query(&record_filter(id, owner_id))
                    .json(&row),
            )
            .await?;
        let record = Self::single(rows, id)?;
        info!(id = %record.id, score = record.potential_score, "analysis attached");
        Ok(record)
    }

    async fn get(&self, id: &str, owner_id: &str) -> Result<ProcessRecord, StoreError> {
        let rows = self
            .fetch_rows(
                self.client
                    .get(self.table_url())
                    .query(&record_filter(id, owner_id)),
            )
            .await?;
        Self::single(rows, id)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<ProcessRecord>, StoreError> {
        let rows = self
            .fetch_rows(
                self.client
                    .get(self.table_url())
                    .query(&owner_filter(owner_id))
                    .query(&[("order", "created_at.desc")]),
            )
            .await?;
        Ok(rows)
    }

    async fn update(
        &self,
        id: &str,
        owner_id: &str,
        patch: ProcessPatch,
    ) -> Result<ProcessRecord, StoreError> {
        let rows = self
            .write_rows(
                self.client
                    .patch(self.table_url())
                    .query(&record_filter(id, owner_id))
                    .json(&patch),
            )
            .await?;
        Self::single(rows, id)
    }

    async fn soft_delete(&self, id: &str, owner_id: &str) -> Result<bool, StoreError> {
        let stamp = serde_json::json!({ "deleted_at": Utc::now() });
        let rows = self
            .write_rows(
                self.client
                    .patch(self.table_url())
                    .query(&record_filter(id, owner_id))
                    .json(&stamp),
            )
            .await?;
        let deleted = !rows.is_empty();
        info!(id = %id, deleted, "soft delete");
        Ok(deleted)
    }
}
