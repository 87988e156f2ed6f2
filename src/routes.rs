//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`           - Rendered portfolio page (public)
//! - `GET  /resume.pdf` - Resume document (static file)
//! - `/api/*`           - Read-only JSON projection of the page content
//! - `/static/*`        - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API surface
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// Asset locations are taken from `state` so tests can point them at
/// fixtures.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::public_routes().layer(rate_limit::layer());

    let router = Router::new()
        .merge(web::routes::public_routes())
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(state.static_dir.as_ref()))
        .route_service("/resume.pdf", ServeFile::new(state.resume_path.as_ref()))
        .fallback(web::handlers::not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
