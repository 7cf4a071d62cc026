//! Route handlers shared by both variants.
//!
//! Each handler is a pure function of the request: no state, no I/O beyond
//! reading the query string.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::security::escape_html;

/// Static landing page, identical in both variants.
pub const INDEX_HTML: &str = "<h1>Demo App</h1><p>Go to /greet?name=YourName</p>";

/// Name used when `/greet` is called without a `name` parameter.
pub const DEFAULT_NAME: &str = "Guest";

/// Decoded query string pairs, in request order.
pub type QueryPairs = Query<Vec<(String, String)>>;

/// First `name` parameter, or `DEFAULT_NAME` when absent.
///
/// A present but empty value (`?name=`) is returned as-is.
pub fn name_param(pairs: &[(String, String)]) -> &str {
    pairs
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .unwrap_or(DEFAULT_NAME)
}

/// Build the greeting markup around an already-prepared name.
pub fn greeting(name: &str) -> String {
    format!("<h2>Hello {name}!</h2>")
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Reflect `name` into the page without escaping.
///
/// This is the reflected XSS under study: markup in `name` reaches the
/// browser verbatim.
pub async fn greet_raw(Query(pairs): QueryPairs) -> Html<String> {
    let name = name_param(&pairs);
    tracing::debug!(name_len = name.len(), escaped = false, "Greeting");
    Html(greeting(name))
}

/// Reflect `name` into the page after HTML-escaping it.
pub async fn greet_escaped(Query(pairs): QueryPairs) -> Html<String> {
    let name = name_param(&pairs);
    tracing::debug!(name_len = name.len(), escaped = true, "Greeting");
    Html(greeting(&escape_html(name)))
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
