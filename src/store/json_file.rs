//! File-backed store: one pretty-printed JSON array on disk.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Grievance, NewGrievance, next_record_id};
use crate::store::GrievanceStore;

/// Grievance store over a single JSON file.
///
/// Mutations serialize behind `write_lock`, so concurrent read-modify-write
/// cycles cannot lose an update. Reads skip the lock: a save replaces the
/// file atomically, so a reader always sees a complete snapshot.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full collection. A missing file is the empty
    /// collection, not an error.
    async fn load(&self) -> StoreResult<Vec<Grievance>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            source: err,
        })
    }

    /// Persist the full collection: write a sibling temp file, then rename
    /// it over the target so readers never see a torn write.
    async fn save(&self, records: &[Grievance]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: io::Error::other(err),
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StoreError::Write {
                    path: parent.to_path_buf(),
                    source: err,
                })?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)
            .await
            .map_err(|err| StoreError::Write {
                path: tmp.clone(),
                source: err,
            })?;

        fs::rename(&tmp, &self.path)
            .await
            .map_err(|err| StoreError::Write {
                path: self.path.clone(),
                source: err,
            })?;

        Ok(())
    }
}

#[async_trait]
impl GrievanceStore for JsonFileStore {
    async fn init(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        match fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "creating empty grievance store");
                self.save(&[]).await
            }
            Err(err) => Err(StoreError::Read {
                path: self.path.clone(),
                source: err,
            }),
        }
    }

    async fn append(&self, new: NewGrievance) -> StoreResult<Grievance> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let id = next_record_id(&records, Utc::now().timestamp_millis());
        let stored = new.into_grievance(id);
        records.push(stored.clone());
        self.save(&records).await?;

        Ok(stored)
    }

    async fn list_all(&self) -> StoreResult<Vec<Grievance>> {
        self.load().await
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|g| g.id != id);

        // A miss must leave the file untouched, byte for byte.
        if records.len() == before {
            return Ok(false);
        }

        self.save(&records).await?;
        Ok(true)
    }

    async fn clear_all(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.save(&[]).await
    }
}
