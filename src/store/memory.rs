//! In-memory store for tests. No persistence, same contract.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::models::{Grievance, NewGrievance, next_record_id};
use crate::store::GrievanceStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Grievance>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GrievanceStore for MemoryStore {
    async fn init(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn append(&self, new: NewGrievance) -> StoreResult<Grievance> {
        let mut records = self.records.write().await;
        let id = next_record_id(&records, Utc::now().timestamp_millis());
        let stored = new.into_grievance(id);
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> StoreResult<Vec<Grievance>> {
        Ok(self.records.read().await.clone())
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|g| g.id != id);
        Ok(records.len() != before)
    }

    async fn clear_all(&self) -> StoreResult<()> {
        self.records.write().await.clear();
        Ok(())
    }
}
