//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig::default() (bind address and log level fixed in source)
//!     → optional TOML file via loader.rs (--config)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so no file is ever required
//! - Security headers are not part of the config; they are fixed in `security::headers`
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
