//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use webframe_core::application::{Application, Context, ProcessError, RequestProcessor};

/// A context that records every application bound to it.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingContext {
    pub bound: Mutex<Vec<Arc<Application>>>,
}

impl Context for RecordingContext {
    fn set_application(&self, application: Arc<Application>) {
        self.bound.lock().unwrap().push(application);
    }
}

/// A processor that always succeeds.
#[allow(dead_code)]
pub fn ok_processor() -> Box<dyn RequestProcessor> {
    Box::new(|_: &Application| -> Result<(), ProcessError> { Ok(()) })
}

/// A processor that fails with the error produced by `make`.
#[allow(dead_code)]
pub fn failing_processor<F>(make: F) -> Box<dyn RequestProcessor>
where
    F: Fn() -> ProcessError + Send + Sync + 'static,
{
    Box::new(move |_: &Application| -> Result<(), ProcessError> { Err(make()) })
}

/// Shared log of lifecycle events.
#[allow(dead_code)]
pub type EventLog = Arc<Mutex<Vec<String>>>;

#[allow(dead_code)]
pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}
