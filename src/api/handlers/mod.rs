//! Request handlers for the JSON API.

mod health;
mod profile;

pub use health::health_handler;
pub use profile::{profile_handler, projects_handler};
