//! Foundation layer of a web-application framework.
//!
//! Path aliases, a hierarchical module tree and the application root that
//! owns process identity and the request-processing entry point.

pub mod alias;
pub mod application;
pub mod config;
pub mod lifecycle;
pub mod module;
pub mod observability;

pub use alias::AliasRegistry;
pub use application::{Application, Context, RequestProcessor, RunError};
pub use config::FrameworkConfig;
pub use module::{Module, ModuleId, ModuleTree, WebModule};
