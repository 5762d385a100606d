//! # Record store
//!
//! Durable ownership of the grievance collection behind a trait, so the
//! backing medium can be swapped without touching the handlers.
//!
//! Every operation is a read-modify-write cycle over the *entire*
//! collection; the expected volume is a personal-scale log, far below
//! anything that would need indexed access.
//!
//! ## Implementations
//!
//! - [`JsonFileStore`]: production store over a single JSON array file.
//!   Writes are atomic (temp file + rename) and mutations are serialized
//!   behind one lock.
//! - [`MemoryStore`]: in-memory store for tests; same id semantics, no
//!   filesystem.
//!
//! ## Storage format
//!
//! ```text
//! data/
//! └── grievances.json     # pretty-printed JSON array of records
//! ```
//!
//! A missing file is equivalent to an empty collection; [`GrievanceStore::init`]
//! creates it and is safe to call on every startup.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Grievance, NewGrievance};

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Durable access to the grievance collection.
///
/// No caller ever observes a partially-applied mutation: implementations
/// persist the full collection in a single replace.
#[async_trait]
pub trait GrievanceStore: Send + Sync {
    /// Ensure the backing storage exists, creating it empty if absent.
    ///
    /// Idempotent; never alters an already-populated collection.
    async fn init(&self) -> StoreResult<()>;

    /// Assign an id, store the record at the end of the collection, persist,
    /// and return the stored record. Fields are kept verbatim.
    async fn append(&self, new: NewGrievance) -> StoreResult<Grievance>;

    /// All records in persisted order.
    async fn list_all(&self) -> StoreResult<Vec<Grievance>>;

    /// Remove the record with exactly this id, if present.
    ///
    /// Returns whether a record was removed; `false` is a normal outcome,
    /// not an error, and leaves the persisted collection untouched.
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;

    /// Unconditionally replace the collection with an empty one.
    async fn clear_all(&self) -> StoreResult<()>;
}
