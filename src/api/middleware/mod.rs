//! API middleware: request tracing and rate limiting.

pub mod rate_limit;
pub mod tracing;
