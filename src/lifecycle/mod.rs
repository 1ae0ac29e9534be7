//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Assemble application → bind(context)
//!
//! Serving:
//!     Application::run() per request
//!
//! Teardown:
//!     Application::end() → host decides how the process exits
//! ```
//!
//! # Design Decisions
//! - Ordered startup: identity first, then root aliases, then modules in declaration order
//! - Fail fast: any assembly error is fatal
//! - The module tree is complete before the application is shared

pub mod startup;

pub use startup::{assemble, assemble_from_file, StartupError};
