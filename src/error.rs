//! Error types for the grievance portal.
//!
//! [`StoreError`] is the storage taxonomy: every store operation fails with
//! exactly one of read, write, or corrupt-data. [`AppError`] is the web-facing
//! wrapper that turns those into HTTP responses.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Failures of the record store.
///
/// A missing store file is not an error anywhere: it reads as the empty
/// collection. `Read` covers every other reason the file cannot be read.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read grievance data at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisting the collection failed (temp write, rename, or directory
    /// creation).
    #[error("failed to write grievance data at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted payload does not parse as a grievance collection.
    #[error("grievance data at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Web-layer error; every handler returns [`AppResult`].
///
/// "Not found" on delete is a normal store outcome (`delete_by_id` returning
/// `false`); the handler converts it here so the response is a 404.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("grievance not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Grievance not found."),
            Self::Store(err) => {
                error!(error = %err, "store operation failed");
                let message = match err {
                    StoreError::Read { .. } => "Error reading grievance data.",
                    StoreError::Corrupt { .. } => "Error processing grievance data.",
                    StoreError::Write { .. } => "Error saving grievance data.",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, message).into_response()
    }
}
