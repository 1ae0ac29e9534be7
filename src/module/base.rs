//! The configuration record shared by every module.

use crate::alias::AliasRegistry;
use crate::module::tree::ModuleId;

/// Identity, location and aliases of a single module.
#[derive(Debug, Default)]
pub struct ModuleConfig {
    id: String,
    base_path: String,
    parent: Option<ModuleId>,
    aliases: AliasRegistry,
}

impl ModuleConfig {
    /// Create a detached module. The parent is set when it is attached to a tree.
    pub fn new(id: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base_path: base_path.into(),
            parent: None,
            aliases: AliasRegistry::new(),
        }
    }

    /// The configuration of an application root: empty id, no parent.
    pub fn root(base_path: impl Into<String>) -> Self {
        Self::new("", base_path)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Accepts any string; the path is not checked against the filesystem.
    pub fn set_base_path(&mut self, path: impl Into<String>) {
        self.base_path = path.into();
    }

    pub fn parent(&self) -> Option<ModuleId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: ModuleId) {
        self.parent = Some(parent);
    }

    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }
}

/// Uniform access to the `ModuleConfig` a module type embeds.
pub trait Module {
    fn config(&self) -> &ModuleConfig;

    fn config_mut(&mut self) -> &mut ModuleConfig;

    fn id(&self) -> &str {
        self.config().id()
    }

    fn base_path(&self) -> &str {
        self.config().base_path()
    }

    fn set_base_path(&mut self, path: String) {
        self.config_mut().set_base_path(path);
    }

    fn parent(&self) -> Option<ModuleId> {
        self.config().parent()
    }

    /// This module's own alias registry (no fallback to ancestors).
    fn aliases(&self) -> &AliasRegistry {
        self.config().aliases()
    }

    /// Resolve an alias against this module's own registry.
    fn path_of_alias(&self, alias: &str) -> Option<String> {
        self.aliases().resolve(alias)
    }

    /// Register or remove an alias in this module's own registry.
    fn set_path_of_alias(&self, alias: &str, path: Option<&str>) {
        self.aliases().register(alias, path);
    }
}

impl Module for ModuleConfig {
    fn config(&self) -> &ModuleConfig {
        self
    }

    fn config_mut(&mut self) -> &mut ModuleConfig {
        self
    }
}
