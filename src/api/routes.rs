//! API route configuration.
//!
//! Every endpoint is public and read-only; there is nothing to authenticate
//! or mutate.

use crate::api::handlers::{health_handler, profile_handler, projects_handler};
use crate::error::AppError;
use crate::state::AppState;
use axum::{Router, http::Uri, routing::get};
use serde_json::json;

/// All API routes.
///
/// # Endpoints
///
/// - `GET /health`   - Component health checks
/// - `GET /profile`  - Full page dataset as JSON
/// - `GET /projects` - Project sequence as JSON
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/profile", get(profile_handler))
        .route("/projects", get(projects_handler))
        .fallback(api_fallback)
}

/// JSON 404 for unknown API paths; the HTML not-found page would be wrong
/// for programmatic consumers.
async fn api_fallback(uri: Uri) -> AppError {
    AppError::not_found("No such API endpoint", json!({ "path": uri.path() }))
}
