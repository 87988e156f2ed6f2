//! # Portfolio
//!
//! Personal portfolio site for Dhairya Joshi, rendered server-side with Axum
//! and Askama.
//!
//! ## Architecture
//!
//! The crate follows a small layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Content entities and authoring invariants
//! - **Content** ([`content`]) - The literal page dataset, fixed at build time
//! - **Web Layer** ([`web`]) - The rendered HTML page and its templates
//! - **API Layer** ([`api`]) - Read-only JSON projection of the dataset
//!
//! ## Features
//!
//! - Single-page portfolio rendered from an immutable in-memory dataset
//! - Startup validation of content links and display keys
//! - Static export binary for hosting the page without a server
//! - Request tracing and per-IP rate limiting on the API surface
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override defaults
//! export LISTEN="0.0.0.0:3000"
//! export STATIC_DIR="static"
//!
//! # Start the service
//! cargo run
//!
//! # Or render the page to disk
//! cargo run --bin export -- --out dist
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod content;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::content;
    pub use crate::domain::{EducationEntry, Profile, Project};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
