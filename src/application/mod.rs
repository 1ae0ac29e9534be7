//! Application subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Application::new(processor)       root web module + defaults
//!     → setters / lifecycle::startup     identity, paths, modules
//!     → bind(context)                    Arc<Application>, core aliases,
//!                                        context.set_application()
//!
//! Per request:
//!     run()
//!     → begin-request hooks
//!     → RequestProcessor::process_request()
//!     → end-request hooks
//!     → Ok | RunError::Io | RunError::Transport
//!
//! Teardown:
//!     end(status, exit)                  left to the hosting environment
//! ```
//!
//! # Design Decisions
//! - Request processing is a trait object supplied by the embedding framework
//! - Only two failure kinds cross `run()`; everything else becomes a transport failure
//! - Hook lists start empty, so `run()` is a plain processor call by default

pub mod app;
pub mod context;
pub mod error;
pub mod hooks;

pub use app::{
    Application, RequestProcessor, DEFAULT_CHARSET, DEFAULT_NAME, DEFAULT_SOURCE_LANGUAGE,
};
pub use context::{Context, SharedContext};
pub use error::{BoxError, ProcessError, RunError, TransportError};
pub use hooks::{RequestHook, RequestHooks};
