//! The hosting environment's view of the application.

use std::sync::{Arc, OnceLock};

use crate::application::app::Application;

/// Receives the application when it is bound.
pub trait Context: Send + Sync {
    fn set_application(&self, application: Arc<Application>);
}

/// A context that keeps the first application bound to it.
#[derive(Debug, Default)]
pub struct SharedContext {
    application: OnceLock<Arc<Application>>,
}

impl SharedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn application(&self) -> Option<Arc<Application>> {
        self.application.get().cloned()
    }
}

impl Context for SharedContext {
    fn set_application(&self, application: Arc<Application>) {
        if self.application.set(application).is_err() {
            tracing::warn!("Context already holds an application, keeping the first one");
        }
    }
}
