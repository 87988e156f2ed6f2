//! Portfolio page handler.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::{Datelike, Local};

use crate::domain::Profile;
use crate::state::AppState;

/// Template for the portfolio page.
///
/// Renders `templates/home.html` from the immutable dataset, in fixed order:
/// header with navigation anchors, hero, quick stats, projects grid,
/// experience and skills, education and certifications, contact, footer.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub profile: Arc<Profile>,
    /// Footer copyright year, read from the clock at render time.
    pub year: i32,
}

/// Renders the portfolio page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/home.html` for server-side rendering. The render is a
/// pure single pass over the dataset; the only clock read is the footer
/// year.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        profile: state.profile.clone(),
        year: Local::now().year(),
    }
}

/// Renders the page to a string, for the health check and static export.
pub fn render_home(profile: Arc<Profile>) -> askama::Result<String> {
    HomeTemplate {
        profile,
        year: Local::now().year(),
    }
    .render()
}
