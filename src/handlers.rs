use axum::Json;
use axum::extract::{Form, State};
use axum::response::Html;
use serde_json::json;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{DeleteGrievance, NewGrievance};
use crate::render;
use crate::state::AppState;

pub async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn submit_grievance(
    State(state): State<AppState>,
    Form(payload): Form<NewGrievance>,
) -> AppResult<&'static str> {
    let stored = state.store.append(payload).await?;
    info!(id = stored.id, title = %stored.title, "grievance saved");

    Ok("Grievance submitted and saved successfully.")
}

pub async fn admin_grievances(State(state): State<AppState>) -> AppResult<Html<String>> {
    let records = state.store.list_all().await?;
    Ok(Html(render::admin_page(records)))
}

pub async fn delete_grievance(
    State(state): State<AppState>,
    Json(payload): Json<DeleteGrievance>,
) -> AppResult<&'static str> {
    let removed = state.store.delete_by_id(payload.id).await?;
    if !removed {
        return Err(AppError::NotFound);
    }
    info!(id = payload.id, "grievance deleted");

    Ok("Grievance deleted successfully.")
}

pub async fn clear_all_grievances(State(state): State<AppState>) -> AppResult<&'static str> {
    state.store.clear_all().await?;
    info!("all grievances cleared");

    Ok("All grievances cleared successfully.")
}
