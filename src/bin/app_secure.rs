//! Secure demo server.
//!
//! Same routes as `app` plus `/health`. User input is HTML-escaped and every
//! response carries the hardened security header set.

use xss_demo::http::Variant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    xss_demo::lifecycle::startup::launch(Variant::Secure).await
}
