//! Web module: a module that owns controllers, views and a layout.

use std::path::MAIN_SEPARATOR;
use std::sync::OnceLock;

use crate::module::base::{Module, ModuleConfig};

/// Controller used when a request names none.
pub const DEFAULT_CONTROLLER: &str = "default";

/// A module with view-related settings layered on a `ModuleConfig`.
#[derive(Debug)]
pub struct WebModule {
    config: ModuleConfig,
    default_controller: String,
    /// `None` inherits from the parent, `Some("")` disables the layout.
    layout: Option<String>,
    /// Derived from the base path on first read unless set explicitly.
    view_path: OnceLock<String>,
}

impl WebModule {
    pub fn new(config: ModuleConfig) -> Self {
        Self {
            config,
            default_controller: DEFAULT_CONTROLLER.to_string(),
            layout: None,
            view_path: OnceLock::new(),
        }
    }

    pub fn default_controller(&self) -> &str {
        &self.default_controller
    }

    pub fn set_default_controller(&mut self, controller: impl Into<String>) {
        self.default_controller = controller.into();
    }

    /// The layout stored on this module only.
    ///
    /// Inheritance through the parent chain is resolved by
    /// [`ModuleTree::effective_layout`](crate::module::ModuleTree::effective_layout).
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    pub fn set_layout(&mut self, layout: Option<String>) {
        self.layout = layout;
    }

    /// Root directory of view files, `<base path>/views` by default.
    ///
    /// The first read caches the value; later base path changes do not move it.
    pub fn view_path(&self) -> &str {
        self.view_path
            .get_or_init(|| format!("{}{}views", self.config.base_path(), MAIN_SEPARATOR))
    }

    /// Override the view directory. Stored verbatim.
    pub fn set_view_path(&mut self, path: impl Into<String>) {
        self.view_path = OnceLock::from(path.into());
    }
}

impl Module for WebModule {
    fn config(&self) -> &ModuleConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ModuleConfig {
        &mut self.config
    }
}
