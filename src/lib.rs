//! Reflected XSS demonstration servers.
//!
//! Two variants of one tiny axum app:
//!
//! ```text
//!                  ┌──────────┐    ┌─────────────┐
//!   Client ───────▶│  router  │───▶│  handlers   │
//!                  └──────────┘    │ index/greet │
//!                                  │   /health   │
//!                                  └──────┬──────┘
//!                                         │
//!                        secure only:     ▼
//!                              ┌────────────────────┐
//!   Client ◀───────────────────│ security headers   │
//!                              └────────────────────┘
//! ```
//!
//! - `app`: echoes the `name` parameter verbatim (vulnerable)
//! - `app-secure`: escapes it and hardens every response

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::AppConfig;
pub use http::{HttpServer, Variant};
pub use lifecycle::Shutdown;
pub use security::SecurityHeaders;
