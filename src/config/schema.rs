//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::{DEFAULT_CHARSET, DEFAULT_NAME, DEFAULT_SOURCE_LANGUAGE};
use crate::module::DEFAULT_CONTROLLER;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Identity and paths of the application root.
    pub application: ApplicationConfig,

    /// Aliases registered on the application root.
    pub aliases: BTreeMap<String, String>,

    /// Modules in attachment order. Parents must come first.
    pub modules: Vec<ModuleEntry>,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Application identity, paths and root web settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Explicit id. Derived from base path and name when absent.
    pub id: Option<String>,

    pub name: String,

    pub base_path: String,

    pub runtime_path: Option<String>,

    /// Target language. Falls back to `source_language` when absent.
    pub language: Option<String>,

    pub source_language: String,

    pub charset: String,

    /// Layout of the root module. Empty disables layouts.
    pub layout: Option<String>,

    pub default_controller: String,

    /// Overrides `<base_path>/views`.
    pub view_path: Option<String>,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            id: None,
            name: DEFAULT_NAME.to_string(),
            base_path: String::new(),
            runtime_path: None,
            language: None,
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            layout: None,
            default_controller: DEFAULT_CONTROLLER.to_string(),
            view_path: None,
        }
    }
}

/// Kind of module to attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    #[default]
    Web,
    Plain,
}

/// A module attached below the application.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleEntry {
    /// Id, unique among siblings.
    pub id: String,

    /// Route of the parent module (`admin/users`). Empty for the application.
    #[serde(default)]
    pub parent: String,

    #[serde(default)]
    pub base_path: String,

    #[serde(default)]
    pub kind: ModuleKind,

    /// Web modules only.
    #[serde(default)]
    pub layout: Option<String>,

    /// Web modules only.
    #[serde(default)]
    pub default_controller: Option<String>,

    /// Web modules only.
    #[serde(default)]
    pub view_path: Option<String>,

    /// Aliases registered on this module.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl ModuleEntry {
    /// Route of this module from the root.
    pub fn route(&self) -> String {
        let parent = self.parent.trim_matches('/');
        if parent.is_empty() {
            self.id.clone()
        } else {
            format!("{}/{}", parent, self.id)
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
