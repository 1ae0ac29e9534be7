//! Begin/end request extension points.

use crate::application::app::Application;

/// Callback fired around request processing.
pub type RequestHook = Box<dyn Fn(&Application) + Send + Sync>;

/// Hooks fired by [`Application::run`]. Empty by default.
#[derive(Default)]
pub struct RequestHooks {
    begin: Vec<RequestHook>,
    end: Vec<RequestHook>,
}

impl RequestHooks {
    pub fn on_begin(&mut self, hook: RequestHook) {
        self.begin.push(hook);
    }

    pub fn on_end(&mut self, hook: RequestHook) {
        self.end.push(hook);
    }

    pub fn is_empty(&self) -> bool {
        self.begin.is_empty() && self.end.is_empty()
    }

    pub(crate) fn fire_begin(&self, app: &Application) {
        for hook in &self.begin {
            hook(app);
        }
    }

    pub(crate) fn fire_end(&self, app: &Application) {
        for hook in &self.end {
            hook(app);
        }
    }
}

impl std::fmt::Debug for RequestHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHooks")
            .field("begin", &self.begin.len())
            .field("end", &self.end.len())
            .finish()
    }
}
