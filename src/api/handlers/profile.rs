//! Handlers for the page-content projection endpoints.

use axum::{Json, extract::State};

use crate::api::dto::profile::{ProfileResponse, ProjectResponse};
use crate::state::AppState;

/// Returns the full page dataset as JSON.
///
/// # Endpoint
///
/// `GET /api/profile`
pub async fn profile_handler(State(state): State<AppState>) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(state.profile.as_ref()))
}

/// Returns the project sequence as JSON, in display order.
///
/// # Endpoint
///
/// `GET /api/projects`
pub async fn projects_handler(State(state): State<AppState>) -> Json<Vec<ProjectResponse>> {
    Json(
        state
            .profile
            .projects
            .iter()
            .map(ProjectResponse::from)
            .collect(),
    )
}
