//! Shared application state injected into every handler.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::Profile;

/// Read-only state cloned into handlers.
///
/// The profile is built and validated once at startup; handlers only ever
/// read it. Asset paths are resolved from [`crate::config::Config`] so tests
/// can point them at fixtures.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    pub static_dir: Arc<PathBuf>,
    pub resume_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(profile: Arc<Profile>, static_dir: PathBuf, resume_path: PathBuf) -> Self {
        Self {
            profile,
            static_dir: Arc::new(static_dir),
            resume_path: Arc::new(resume_path),
        }
    }
}
