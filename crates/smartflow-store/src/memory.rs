//! In-memory [`ProcessStore`] honoring the same contract as the Supabase
//! store: owner scoping, soft deletion, most-recent-first listing. Serves as
//! the test double for everything built on the trait.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use smartflow_core::{AnalysisResult, ProcessInput, ProcessRecord, ProcessStatus};

use crate::{ProcessPatch, ProcessStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    // Insertion order doubles as created_at order.
    rows: Mutex<Vec<ProcessRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &str) -> StoreError {
        StoreError::NotFound { id: id.to_string() }
    }
}

fn matches_live(row: &ProcessRecord, id: &str, owner_id: &str) -> bool {
    row.id == id && row.owner_id == owner_id && !row.is_deleted()
}

#[async_trait]
impl ProcessStore for MemoryStore {
    async fn create(
        &self,
        owner_id: &str,
        input: &ProcessInput,
    ) -> Result<ProcessRecord, StoreError> {
        let mut rows = self.rows.lock().expect("process store mutex poisoned");
        let record = ProcessRecord {
            id: format!("mem-{}", rows.len() + 1),
            owner_id: owner_id.to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            form_data: input.clone(),
            ai_analysis: None,
            potential_score: 0,
            status: ProcessStatus::New,
            created_at: Utc::now(),
            deleted_at: None,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn attach_analysis(
        &self,
        id: &str,
        owner_id: &str,
        analysis: &AnalysisResult,
    ) -> Result<ProcessRecord, StoreError> {
        let mut rows = self.rows.lock().expect("process store mutex poisoned");
        let row = rows
            .iter_mut()
            .find(|row| matches_live(row, id, owner_id))
            .ok_or_else(|| Self::not_found(id))?;
        row.ai_analysis = Some(analysis.clone());
        row.potential_score = analysis.potential_score;
        row.status = ProcessStatus::Analyzed;
        Ok(row.clone())
    }

    async fn get(&self, id: &str, owner_id: &str) -> Result<ProcessRecord, StoreError> {
        let rows = self.rows.lock().expect("process store mutex poisoned");
        rows.iter()
            .find(|row| matches_live(row, id, owner_id))
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<ProcessRecord>, StoreError> {
        let rows = self.rows.lock().expect("process store mutex poisoned");
        Ok(rows
            .iter()
            .rev()
            .filter(|row| row.owner_id == owner_id && !row.is_deleted())
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &str,
        owner_id: &str,
        patch: ProcessPatch,
    ) -> Result<ProcessRecord, StoreError> {
        let mut rows = self.rows.lock().expect("process store mutex poisoned");
        let row = rows
            .iter_mut()
            .find(|row| matches_live(row, id, owner_id))
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(title) = patch.title {
            row.title = title;
        }
        if let Some(description) = patch.description {
            row.description = description;
        }
        if let Some(form_data) = patch.form_data {
            row.form_data = form_data;
        }
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: &str, owner_id: &str) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().expect("process store mutex poisoned");
        match rows.iter_mut().find(|row| matches_live(row, id, owner_id)) {
            Some(row) => {
                row.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use smartflow_core::{
        Budget, CompanyProfile, CompanySize, Frequency, Industry, Participants, ProcessShape,
        Savings,
    };

    pub(crate) fn sample_input() -> ProcessInput {
        ProcessInput {
            title: "Invoicing customers".into(),
            description: "Every Friday an employee copies order data from email \
                          into the invoicing tool and mails each PDF by hand."
                .into(),
            company: CompanyProfile {
                size: CompanySize::Small,
                industry: Industry::Accounting,
                budget: Budget::Medium,
            },
            process: ProcessShape {
                frequency: Frequency::Weekly,
                participants: Participants::Few,
                duration_hours: 2.5,
            },
            improvement_goals: vec!["speed".into()],
        }
    }

    fn sample_analysis() -> AnalysisResult {
        AnalysisResult {
            potential_score: 8,
            savings: Savings {
                monthly_hours: 16.0,
                monthly_currency: 2400.0,
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_starts_new_without_analysis() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        assert_eq!(record.status, ProcessStatus::New);
        assert!(record.ai_analysis.is_none());
        assert_eq!(record.potential_score, 0);
    }

    #[tokio::test]
    async fn attach_analysis_denormalizes_and_transitions() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        let updated = store
            .attach_analysis(&record.id, "user-1", &sample_analysis())
            .await
            .unwrap();
        assert_eq!(updated.status, ProcessStatus::Analyzed);
        assert_eq!(updated.potential_score, 8);
        assert_eq!(updated.ai_analysis.unwrap().potential_score, 8);
    }

    #[tokio::test]
    async fn attach_analysis_rejects_foreign_owner() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        let err = store
            .attach_analysis(&record.id, "user-2", &sample_analysis())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn get_returns_live_record() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        let fetched = store.get(&record.id, "user-1").await.unwrap();
        assert_eq!(fetched.id, record.id);
        assert_eq!(fetched.title, record.title);
    }

    #[tokio::test]
    async fn get_rejects_foreign_and_deleted_records() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        assert!(store.get(&record.id, "user-2").await.unwrap_err().is_not_found());

        store.soft_delete(&record.id, "user-1").await.unwrap();
        assert!(store.get(&record.id, "user-1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn list_is_most_recent_first() {
        let store = MemoryStore::new();
        let first = store.create("user-1", &sample_input()).await.unwrap();
        let second = store.create("user-1", &sample_input()).await.unwrap();
        let listed = store.list("user-1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[tokio::test]
    async fn list_skips_deleted_and_foreign_records() {
        let store = MemoryStore::new();
        let mine = store.create("user-1", &sample_input()).await.unwrap();
        let gone = store.create("user-1", &sample_input()).await.unwrap();
        store.create("user-2", &sample_input()).await.unwrap();
        assert!(store.soft_delete(&gone.id, "user-1").await.unwrap());

        let listed = store.list("user-1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mine.id);
        assert!(listed.iter().all(|row| !row.is_deleted()));
    }

    #[tokio::test]
    async fn soft_delete_is_idempotent() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        assert!(store.soft_delete(&record.id, "user-1").await.unwrap());
        assert!(!store.soft_delete(&record.id, "user-1").await.unwrap());
    }

    #[tokio::test]
    async fn soft_delete_ignores_foreign_records() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        assert!(!store.soft_delete(&record.id, "user-2").await.unwrap());
        assert_eq!(store.list("user-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        let patch = ProcessPatch {
            title: Some("Invoicing, take two".into()),
            ..Default::default()
        };
        let updated = store.update(&record.id, "user-1", patch).await.unwrap();
        assert_eq!(updated.title, "Invoicing, take two");
        assert_eq!(updated.description, record.description);
    }

    #[tokio::test]
    async fn update_after_delete_is_not_found() {
        let store = MemoryStore::new();
        let record = store.create("user-1", &sample_input()).await.unwrap();
        store.soft_delete(&record.id, "user-1").await.unwrap();
        let err = store
            .update(&record.id, "user-1", ProcessPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
