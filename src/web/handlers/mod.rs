//! HTML template rendering handlers for the page.

mod home;
mod not_found;

pub use home::{home_handler, render_home};
pub use not_found::not_found_handler;
