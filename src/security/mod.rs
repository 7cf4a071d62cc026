//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Secure variant only:
//!     handler output
//!         → escape.rs (neutralize user input before interpolation)
//!     response
//!         → headers.rs (stamp the hardened header set)
//!         → Send to client
//! ```
//!
//! # Design Decisions
//! - Escape at the point of interpolation, not on input
//! - Header set applied uniformly, regardless of route or status

pub mod escape;
pub mod headers;

pub use escape::escape_html;
pub use headers::SecurityHeaders;
