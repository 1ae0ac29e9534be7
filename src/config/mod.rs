//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → FrameworkConfig (validated, immutable)
//!     → lifecycle::startup assembles the Application from it
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Paths are never checked against the filesystem

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ApplicationConfig, FrameworkConfig, ModuleEntry, ModuleKind, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
