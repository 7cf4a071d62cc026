//! Insecure demo server.
//!
//! Reflects `/greet?name=` into the page without escaping and sends no
//! hardening headers. Intentionally vulnerable to reflected XSS.

use xss_demo::http::Variant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    xss_demo::lifecycle::startup::launch(Variant::Insecure).await
}
