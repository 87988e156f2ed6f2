#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use portfolio::content;
use portfolio::state::AppState;

/// Builds handler state over the real dataset, with asset paths pointing at
/// the given locations.
pub fn create_test_state(static_dir: PathBuf, resume_path: PathBuf) -> AppState {
    AppState::new(Arc::new(content::profile()), static_dir, resume_path)
}

/// State with repo-relative asset paths, for tests that never touch disk.
pub fn default_state() -> AppState {
    create_test_state(
        PathBuf::from("static"),
        PathBuf::from("static/resume.pdf"),
    )
}

/// Resolves the HTML entities the template escaper emits, so tests can
/// assert against the raw content literals.
pub fn unescape(html: &str) -> String {
    html.replace("&amp;", "&")
        .replace("&#38;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
}

/// Escapes `&` the way the template escaper does; enough for locating
/// titles and headings in raw markup.
pub fn escape_amp(text: &str) -> String {
    text.replace('&', "&#38;")
}
