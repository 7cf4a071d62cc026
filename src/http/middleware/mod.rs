//! Axum middleware applied at the router level.

pub mod security_headers;
