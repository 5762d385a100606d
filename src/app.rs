use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Assembles the router with request tracing on every route.
///
/// `public_dir` backs every path no explicit route claims, so the
/// submission form ships as plain files next to the binary.
pub fn build_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(handlers::healthcheck))
        .route("/submit-grievance", post(handlers::submit_grievance))
        .route("/admin/grievances", get(handlers::admin_grievances))
        .route("/admin/delete-grievance", post(handlers::delete_grievance))
        .route(
            "/admin/clear-all-grievances",
            post(handlers::clear_all_grievances),
        )
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
