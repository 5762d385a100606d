//! Grievance portal: a small web service that accepts grievance records via
//! an HTTP form, keeps them in a single JSON file, and serves an admin page
//! to list, delete, or clear them.
//!
//! The storage core lives in [`store`]; everything else is the thin HTTP
//! boundary around it.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;
pub mod store;

pub use app::build_router;
pub use error::{AppError, StoreError};
pub use models::{Grievance, NewGrievance};
pub use store::{GrievanceStore, JsonFileStore, MemoryStore};
