//! Response finalization for the secure variant.
//!
//! Runs after the inner handler (or fallback) and stamps the hardened header
//! set onto whatever response it produced.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::security::SecurityHeaders;

pub async fn finalize(
    State(headers): State<Arc<SecurityHeaders>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    headers.apply(response.headers_mut());
    response
}
