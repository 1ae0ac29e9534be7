//! Path alias subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     config [aliases] / module base paths
//!     → registry.rs register() (trailing separators stripped)
//!
//! Lookup (any time, any thread):
//!     "app.models.User"
//!     → exact entry?               → hit
//!     → root "app" registered?     → "/srv/app" + "/models/User"
//!     → memoize under full alias   → next lookup is an exact hit
//!     → otherwise None (unknown alias, not an error)
//! ```
//!
//! # Design Decisions
//! - Entries live in a sharded concurrent map; resolve and register take `&self`
//! - Memoized entries are never invalidated when their root changes
//! - Hierarchical fallback between modules lives in the module tree, not here

pub mod registry;

pub use registry::AliasRegistry;
