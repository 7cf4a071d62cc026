//! Routing tables for the two server variants.
//!
//! ```text
//! Insecure:  GET /  GET /greet (raw)
//! Secure:    GET /  GET /greet (escaped)  GET /health
//!            + security header finalization on every response
//! ```

use std::fmt;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::middleware::security_headers;
use crate::security::SecurityHeaders;

/// Which flavour of the demo app to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Reflects input verbatim. Intentionally vulnerable.
    Insecure,
    /// Escapes input and hardens every response.
    Secure,
}

impl Variant {
    fn as_str(&self) -> &'static str {
        match self {
            Variant::Insecure => "insecure",
            Variant::Secure => "secure",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the router for `variant`.
pub fn build(variant: Variant) -> Router {
    match variant {
        Variant::Insecure => insecure(),
        Variant::Secure => secure(Arc::new(SecurityHeaders::hardened())),
    }
}

fn insecure() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/greet", get(handlers::greet_raw))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
}

fn secure(headers: Arc<SecurityHeaders>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/greet", get(handlers::greet_escaped))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            headers,
            security_headers::finalize,
        ))
        .layer(TraceLayer::new_for_http())
}
