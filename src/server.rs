//! HTTP server initialization and runtime setup.
//!
//! Handles content construction, startup validation, and Axum server lifecycle.

use crate::config::Config;
use crate::content;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The literal page dataset, validated once before serving
/// - The Axum router with page, API, and static-asset routes
/// - Graceful shutdown on SIGINT / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Content validation fails (a data-authoring mistake)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let profile = content::profile();
    profile
        .validate()
        .context("portfolio content failed validation")?;
    tracing::info!(
        "Content loaded: {} projects, {} education entries",
        profile.projects.len(),
        profile.education.len()
    );

    let resume_path = PathBuf::from(&config.resume_path);
    if !resume_path.is_file() {
        // Deployment concern, not a boot failure: /resume.pdf will 404.
        tracing::warn!("Resume asset not found at {}", resume_path.display());
    }

    let state = AppState::new(
        Arc::new(profile),
        PathBuf::from(&config.static_dir),
        resume_path,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
