//! Module composition subsystem.
//!
//! # Data Flow
//! ```text
//! ModuleConfig (id, base path, parent handle, alias registry)
//!     → embedded by WebModule (default controller, layout, view path)
//!     → stored as ModuleNode in the ModuleTree arena
//!
//! ModuleTree
//!     slot 0  = application root (no parent)
//!     slot n  = attached module, parent = ModuleId of an earlier slot
//!
//! Alias lookup from a module:
//!     own registry → parent registry → ... → root registry → None
//! ```
//!
//! # Design Decisions
//! - Parents are plain indices; the tree owns every node, nodes own nothing upward
//! - Shared behaviour lives in the `Module` trait over an embedded `ModuleConfig`
//! - Paths are stored verbatim; nothing checks that directories exist
//! - Tree shape is fixed once the application is shared (attach needs `&mut`)

pub mod base;
pub mod error;
pub mod tree;
pub mod web;

pub use base::{Module, ModuleConfig};
pub use error::ModuleError;
pub use tree::{ModuleId, ModuleNode, ModuleTree};
pub use web::{WebModule, DEFAULT_CONTROLLER};
