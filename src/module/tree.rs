//! Arena-owned module hierarchy.

use crate::module::base::{Module, ModuleConfig};
use crate::module::error::ModuleError;
use crate::module::web::WebModule;

/// Non-owning handle to a module inside a [`ModuleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(usize);

impl ModuleId {
    /// The application root.
    pub const ROOT: ModuleId = ModuleId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A module stored in the tree.
#[derive(Debug)]
pub enum ModuleNode {
    Plain(ModuleConfig),
    Web(WebModule),
}

impl ModuleNode {
    pub fn as_web(&self) -> Option<&WebModule> {
        match self {
            ModuleNode::Web(web) => Some(web),
            ModuleNode::Plain(_) => None,
        }
    }

    pub fn as_web_mut(&mut self) -> Option<&mut WebModule> {
        match self {
            ModuleNode::Web(web) => Some(web),
            ModuleNode::Plain(_) => None,
        }
    }
}

impl Module for ModuleNode {
    fn config(&self) -> &ModuleConfig {
        match self {
            ModuleNode::Plain(config) => config,
            ModuleNode::Web(web) => web.config(),
        }
    }

    fn config_mut(&mut self) -> &mut ModuleConfig {
        match self {
            ModuleNode::Plain(config) => config,
            ModuleNode::Web(web) => web.config_mut(),
        }
    }
}

impl From<ModuleConfig> for ModuleNode {
    fn from(config: ModuleConfig) -> Self {
        ModuleNode::Plain(config)
    }
}

impl From<WebModule> for ModuleNode {
    fn from(web: WebModule) -> Self {
        ModuleNode::Web(web)
    }
}

/// Owns every module of an application. Slot 0 is the root.
#[derive(Debug)]
pub struct ModuleTree {
    nodes: Vec<ModuleNode>,
}

impl ModuleTree {
    /// Create a tree holding only `root`.
    pub fn new(root: impl Into<ModuleNode>) -> Self {
        Self {
            nodes: vec![root.into()],
        }
    }

    pub fn root(&self) -> &ModuleNode {
        &self.nodes[0]
    }

    pub fn get(&self, id: ModuleId) -> Option<&ModuleNode> {
        self.nodes.get(id.0)
    }

    // Nodes are never handed out mutably: replacing one would drop its
    // parent handle or turn the web root into a plain module.
    pub(crate) fn root_config_mut(&mut self) -> &mut ModuleConfig {
        self.nodes[0].config_mut()
    }

    pub(crate) fn web_mut(&mut self, id: ModuleId) -> Result<&mut WebModule, ModuleError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(ModuleError::UnknownModule(id))?
            .as_web_mut()
            .ok_or(ModuleError::NotWebModule(id))
    }

    /// Move `module` to a new base path.
    ///
    /// The alias named after an attached module's id follows the new path
    /// (removed when the path is empty). The root has no such alias. A view
    /// path that was already derived keeps its old value.
    pub fn set_base_path(&mut self, module: ModuleId, path: &str) -> Result<(), ModuleError> {
        let node = self
            .nodes
            .get_mut(module.0)
            .ok_or(ModuleError::UnknownModule(module))?;
        node.config_mut().set_base_path(path);

        if module != ModuleId::ROOT {
            let alias = if path.is_empty() { None } else { Some(path) };
            node.set_path_of_alias(node.id(), alias);
        }
        Ok(())
    }

    /// Set the local layout of a web module.
    pub fn set_layout(
        &mut self,
        module: ModuleId,
        layout: Option<String>,
    ) -> Result<(), ModuleError> {
        self.web_mut(module)?.set_layout(layout);
        Ok(())
    }

    /// Set the default controller of a web module.
    pub fn set_default_controller(
        &mut self,
        module: ModuleId,
        controller: &str,
    ) -> Result<(), ModuleError> {
        self.web_mut(module)?.set_default_controller(controller);
        Ok(())
    }

    /// Override the view directory of a web module.
    pub fn set_view_path(&mut self, module: ModuleId, path: &str) -> Result<(), ModuleError> {
        self.web_mut(module)?.set_view_path(path);
        Ok(())
    }

    /// Number of modules, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all modules in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &ModuleNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (ModuleId(i), node))
    }

    /// Attach `node` under `parent`.
    ///
    /// The module's id must be non-empty, free of `/` and unique among its
    /// siblings. A non-empty base path is registered as an alias named after
    /// the module id in the module's own registry.
    pub fn attach(
        &mut self,
        parent: ModuleId,
        node: impl Into<ModuleNode>,
    ) -> Result<ModuleId, ModuleError> {
        let mut node = node.into();
        let id = node.id().to_string();

        if id.is_empty() {
            return Err(ModuleError::EmptyId);
        }
        if id.contains('/') {
            return Err(ModuleError::InvalidId(id));
        }
        if self.get(parent).is_none() {
            return Err(ModuleError::UnknownParent(parent));
        }
        if self.child(parent, &id).is_some() {
            return Err(ModuleError::DuplicateId { parent, id });
        }

        node.config_mut().set_parent(parent);
        if !node.base_path().is_empty() {
            node.set_path_of_alias(&id, Some(node.base_path()));
        }

        let handle = ModuleId(self.nodes.len());
        tracing::info!(
            module = %id,
            parent = parent.index(),
            base_path = %node.base_path(),
            "Module attached"
        );
        self.nodes.push(node);
        Ok(handle)
    }

    /// Attach a plain module.
    pub fn attach_module(
        &mut self,
        parent: ModuleId,
        id: &str,
        base_path: &str,
    ) -> Result<ModuleId, ModuleError> {
        self.attach(parent, ModuleConfig::new(id, base_path))
    }

    /// Attach a web module with default settings.
    pub fn attach_web_module(
        &mut self,
        parent: ModuleId,
        id: &str,
        base_path: &str,
    ) -> Result<ModuleId, ModuleError> {
        self.attach(parent, WebModule::new(ModuleConfig::new(id, base_path)))
    }

    /// Direct children of `parent`.
    pub fn children(&self, parent: ModuleId) -> impl Iterator<Item = ModuleId> + '_ {
        self.iter()
            .filter(move |(_, node)| node.parent() == Some(parent))
            .map(|(id, _)| id)
    }

    /// The child of `parent` whose id is `id`.
    pub fn child(&self, parent: ModuleId, id: &str) -> Option<ModuleId> {
        self.children(parent)
            .find(|child| self.nodes[child.0].id() == id)
    }

    /// Look up a module by its slash-separated route from the root.
    /// The empty route names the root.
    pub fn find(&self, route: &str) -> Option<ModuleId> {
        route
            .split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(ModuleId::ROOT, |current, segment| self.child(current, segment))
    }

    /// `module` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, module: ModuleId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(module).map(|_| module),
        }
    }

    /// Slash-joined ids from below the root down to `module`.
    /// Empty for the root, `None` for an unknown handle.
    pub fn unique_id(&self, module: ModuleId) -> Option<String> {
        self.get(module)?;
        let mut ids: Vec<&str> = self
            .ancestors(module)
            .filter(|id| *id != ModuleId::ROOT)
            .map(|id| self.nodes[id.0].id())
            .collect();
        ids.reverse();
        Some(ids.join("/"))
    }

    /// Resolve an alias from `module`, falling back through its ancestors.
    pub fn resolve_alias(&self, module: ModuleId, alias: &str) -> Option<String> {
        self.ancestors(module)
            .find_map(|id| self.nodes[id.0].path_of_alias(alias))
    }

    /// The layout that applies to `module`.
    ///
    /// The nearest web module with a layout set decides. An empty layout
    /// there means "no layout" and yields `None`, as does a chain with no
    /// layout set anywhere.
    pub fn effective_layout(&self, module: ModuleId) -> Option<&str> {
        self.ancestors(module)
            .find_map(|id| self.nodes[id.0].as_web().and_then(WebModule::layout))
            .filter(|layout| !layout.is_empty())
    }
}

/// Iterator over a module and its ancestors, see [`ModuleTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a ModuleTree,
    next: Option<ModuleId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ModuleId;

    fn next(&mut self) -> Option<ModuleId> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(|node| node.parent());
        Some(current)
    }
}
