//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and server:
//!     → tracing macros (structured fields)
//!     → tower_http TraceLayer (per-request spans)
//!     → logging.rs subscriber → stdout
//! ```

pub mod logging;
