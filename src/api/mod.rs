//! JSON API layer.
//!
//! A read-only projection of the page dataset for programmatic consumers,
//! plus the service health endpoint.
//!
//! - [`handlers`] - Request handlers
//! - [`dto`] - Response shapes
//! - [`middleware`] - Tracing and rate limiting
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
