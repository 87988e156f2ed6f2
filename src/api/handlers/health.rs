//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;
use crate::web::handlers::render_home;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Content**: Re-runs dataset validation
/// 2. **Renderer**: Renders the page template once
/// 3. **Resume asset**: Checks the file behind `/resume.pdf` exists
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "content": {
///       "status": "ok",
///       "message": "8 projects, 3 education entries"
///     },
///     "renderer": {
///       "status": "ok",
///       "message": "Rendered 21340 bytes"
///     },
///     "resume_asset": {
///       "status": "ok",
///       "message": "static/resume.pdf"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let content_check = check_content(&state);

    let renderer_check = check_renderer(&state);

    let resume_check = check_resume_asset(&state);

    let all_healthy = content_check.status == "ok"
        && renderer_check.status == "ok"
        && resume_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            content: content_check,
            renderer: renderer_check,
            resume_asset: resume_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Re-checks the dataset's authoring invariants.
fn check_content(state: &AppState) -> CheckStatus {
    match state.profile.validate() {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} projects, {} education entries",
                state.profile.projects.len(),
                state.profile.education.len()
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Content error: {}", e)),
        },
    }
}

/// Renders the page template once to prove the renderer is operational.
fn check_renderer(state: &AppState) -> CheckStatus {
    match render_home(state.profile.clone()) {
        Ok(html) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Rendered {} bytes", html.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Render error: {}", e)),
        },
    }
}

/// Checks the resume document behind `/resume.pdf` is present on disk.
fn check_resume_asset(state: &AppState) -> CheckStatus {
    if state.resume_path.is_file() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(state.resume_path.display().to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Missing file: {}", state.resume_path.display())),
        }
    }
}
