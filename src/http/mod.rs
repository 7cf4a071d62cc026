//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve, graceful shutdown)
//!     → router.rs (routing table for the chosen variant)
//!     → handlers.rs (index, greet, health)
//!     → middleware/ (secure variant: stamp security headers)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use router::Variant;
pub use server::HttpServer;
