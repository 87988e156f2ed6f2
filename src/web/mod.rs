//! Server-rendered page layer.
//!
//! The one-shot, pure transformation of the dataset into the portfolio page.

pub mod handlers;
pub mod routes;
