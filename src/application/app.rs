//! The root module of a process.

use std::sync::{Arc, OnceLock};

use crate::application::context::Context;
use crate::application::error::{ProcessError, RunError};
use crate::application::hooks::{RequestHook, RequestHooks};
use crate::module::{Module, ModuleConfig, ModuleTree, WebModule};

pub const DEFAULT_NAME: &str = "My Application";
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en_us";
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Does the actual work of a request.
pub trait RequestProcessor: Send + Sync {
    fn process_request(&self, app: &Application) -> Result<(), ProcessError>;
}

impl<F> RequestProcessor for F
where
    F: Fn(&Application) -> Result<(), ProcessError> + Send + Sync,
{
    fn process_request(&self, app: &Application) -> Result<(), ProcessError> {
        self(app)
    }
}

/// Process identity plus the module tree it roots.
pub struct Application {
    modules: ModuleTree,
    /// Explicit id, or a checksum derived on first read.
    id: OnceLock<String>,
    name: String,
    runtime_path: Option<String>,
    language: Option<String>,
    source_language: String,
    charset: String,
    processor: Box<dyn RequestProcessor>,
    hooks: RequestHooks,
}

impl Application {
    /// Create an application whose root is a web module with no base path.
    pub fn new(processor: Box<dyn RequestProcessor>) -> Self {
        Self {
            modules: ModuleTree::new(WebModule::new(ModuleConfig::root(""))),
            id: OnceLock::new(),
            name: DEFAULT_NAME.to_string(),
            runtime_path: None,
            language: None,
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            processor,
            hooks: RequestHooks::default(),
        }
    }

    /// Share the application and hand it to `context`.
    pub fn bind(self, context: &dyn Context) -> Arc<Self> {
        let app = Arc::new(self);
        context.set_application(Arc::clone(&app));
        app.register_core_aliases();
        tracing::info!(
            name = %app.name,
            base_path = %app.base_path(),
            modules = app.modules.len(),
            "Application bound to context"
        );
        app
    }

    /// Point `application` at the base path and `ext` at `<base>/extensions`.
    ///
    /// Aliases that are already registered are left alone, so calling this
    /// again (assembly, then `bind`) changes nothing. No-op without a base path.
    pub fn register_core_aliases(&self) {
        let base = self.base_path();
        if base.is_empty() {
            return;
        }
        if !self.aliases().contains("application") {
            self.set_path_of_alias("application", Some(base));
        }
        if !self.aliases().contains("ext") {
            self.set_path_of_alias("ext", Some(&format!("{}/extensions", base)));
        }
    }

    /// Process one request.
    ///
    /// I/O and transport failures from the processor are returned unchanged;
    /// any other failure is wrapped into a transport failure.
    pub fn run(&self) -> Result<(), RunError> {
        self.hooks.fire_begin(self);

        if let Err(error) = self.processor.process_request(self) {
            if let ProcessError::Other(cause) = &error {
                tracing::warn!(error = %cause, "Request failed, reporting as transport failure");
            }
            return Err(error.into());
        }

        self.hooks.fire_end(self);
        Ok(())
    }

    /// Terminate the application.
    ///
    /// Exiting the process is up to the hosting environment.
    pub fn end(&self, status: i32, exit: bool) {
        tracing::debug!(status, exit, "Application end requested");
    }

    pub fn on_begin_request(&mut self, hook: RequestHook) {
        self.hooks.on_begin(hook);
    }

    pub fn on_end_request(&mut self, hook: RequestHook) {
        self.hooks.on_end(hook);
    }

    /// The explicit id, or a CRC-32 of base path + name in lowercase hex.
    ///
    /// The derived value is computed once; changing the base path or name
    /// afterwards does not change it.
    pub fn id(&self) -> &str {
        self.id.get_or_init(|| {
            let seed = format!("{}{}", self.base_path(), self.name);
            format!("{:x}", crc32fast::hash(seed.as_bytes()))
        })
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = OnceLock::from(id.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Not validated against the filesystem.
    ///
    /// Core aliases registered earlier keep pointing at the old path.
    pub fn set_base_path(&mut self, path: impl Into<String>) {
        self.modules.root_config_mut().set_base_path(path);
    }

    pub fn runtime_path(&self) -> Option<&str> {
        self.runtime_path.as_deref()
    }

    /// Not validated against the filesystem.
    pub fn set_runtime_path(&mut self, path: impl Into<String>) {
        self.runtime_path = Some(path.into());
    }

    /// The target language, falling back to the source language.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(&self.source_language)
    }

    /// `None` falls back to the source language.
    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn set_source_language(&mut self, language: impl Into<String>) {
        self.source_language = language.into();
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.charset = charset.into();
    }

    pub fn modules(&self) -> &ModuleTree {
        &self.modules
    }

    pub fn modules_mut(&mut self) -> &mut ModuleTree {
        &mut self.modules
    }
}

impl Module for Application {
    fn config(&self) -> &ModuleConfig {
        self.modules.root().config()
    }

    fn config_mut(&mut self) -> &mut ModuleConfig {
        self.modules.root_config_mut()
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("name", &self.name)
            .field("base_path", &self.base_path())
            .field("runtime_path", &self.runtime_path)
            .field("language", &self.language)
            .field("source_language", &self.source_language)
            .field("charset", &self.charset)
            .field("modules", &self.modules.len())
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
