//! Startup orchestration.
//!
//! # Responsibilities
//! - Apply application identity and paths from configuration
//! - Register root aliases
//! - Attach modules in declaration order with their aliases and web settings

use std::path::Path;

use thiserror::Error;

use crate::application::{Application, RequestProcessor};
use crate::config::{load_config, ConfigError, FrameworkConfig, ModuleEntry, ModuleKind};
use crate::module::{Module, ModuleConfig, ModuleError, ModuleId, ModuleNode, WebModule};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("module assembly failed: {0}")]
    Module(#[from] ModuleError),
}

/// Build an application and its module tree from a validated configuration.
pub fn assemble(
    config: &FrameworkConfig,
    processor: Box<dyn RequestProcessor>,
) -> Result<Application, ModuleError> {
    let settings = &config.application;
    let mut app = Application::new(processor);

    app.set_name(settings.name.as_str());
    app.set_base_path(settings.base_path.as_str());
    if let Some(id) = &settings.id {
        app.set_id(id.as_str());
    }
    if let Some(runtime_path) = &settings.runtime_path {
        app.set_runtime_path(runtime_path.as_str());
    }
    app.set_language(settings.language.clone());
    app.set_source_language(settings.source_language.as_str());
    app.set_charset(settings.charset.as_str());

    let root = app.modules_mut().web_mut(ModuleId::ROOT)?;
    apply_web_settings(
        root,
        settings.layout.clone(),
        Some(&settings.default_controller),
        settings.view_path.as_deref(),
    );

    for (alias, path) in &config.aliases {
        app.set_path_of_alias(alias, Some(path.as_str()));
    }
    app.register_core_aliases();

    for entry in &config.modules {
        attach_entry(&mut app, entry)?;
    }

    tracing::info!(
        name = %app.name(),
        modules = app.modules().len() - 1,
        aliases = app.aliases().len(),
        "Application assembled"
    );
    Ok(app)
}

/// Load, validate and assemble in one step.
pub fn assemble_from_file(
    path: &Path,
    processor: Box<dyn RequestProcessor>,
) -> Result<Application, StartupError> {
    let config = load_config(path)?;
    Ok(assemble(&config, processor)?)
}

fn attach_entry(app: &mut Application, entry: &ModuleEntry) -> Result<(), ModuleError> {
    let parent = app
        .modules()
        .find(&entry.parent)
        .ok_or_else(|| ModuleError::UnknownRoute(entry.parent.clone()))?;

    let config = ModuleConfig::new(entry.id.as_str(), entry.base_path.as_str());
    let node = match entry.kind {
        ModuleKind::Web => {
            let mut web = WebModule::new(config);
            apply_web_settings(
                &mut web,
                entry.layout.clone(),
                entry.default_controller.as_ref(),
                entry.view_path.as_deref(),
            );
            ModuleNode::Web(web)
        }
        ModuleKind::Plain => {
            let has_web_settings = entry.layout.is_some()
                || entry.default_controller.is_some()
                || entry.view_path.is_some();
            if has_web_settings {
                tracing::warn!(
                    module = %entry.route(),
                    "Web settings on a plain module are ignored"
                );
            }
            ModuleNode::Plain(config)
        }
    };

    let handle = app.modules_mut().attach(parent, node)?;
    if let Some(node) = app.modules().get(handle) {
        for (alias, path) in &entry.aliases {
            node.set_path_of_alias(alias, Some(path.as_str()));
        }
    }
    Ok(())
}

fn apply_web_settings(
    web: &mut WebModule,
    layout: Option<String>,
    default_controller: Option<&String>,
    view_path: Option<&str>,
) {
    web.set_layout(layout);
    if let Some(controller) = default_controller {
        web.set_default_controller(controller.as_str());
    }
    if let Some(path) = view_path {
        web.set_view_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ProcessError;
    use crate::config::parse_config;

    fn processor() -> Box<dyn RequestProcessor> {
        Box::new(|_: &Application| -> Result<(), ProcessError> { Ok(()) })
    }

    #[test]
    fn test_assemble_identity() {
        let config = parse_config(
            r#"
            [application]
            id = "shop"
            name = "Shop"
            base_path = "/srv/shop"
            runtime_path = "/var/run/shop"
            source_language = "en_gb"
            charset = "ISO-8859-1"
            "#,
        )
        .unwrap();

        let app = assemble(&config, processor()).unwrap();
        assert_eq!(app.id(), "shop");
        assert_eq!(app.name(), "Shop");
        assert_eq!(app.base_path(), "/srv/shop");
        assert_eq!(app.runtime_path(), Some("/var/run/shop"));
        assert_eq!(app.language(), "en_gb");
        assert_eq!(app.charset(), "ISO-8859-1");
    }

    #[test]
    fn test_assemble_modules() {
        let config = parse_config(
            r#"
            [application]
            base_path = "/srv/app"
            layout = "main"
            default_controller = "site"

            [aliases]
            webroot = "/var/www/"

            [[modules]]
            id = "admin"
            base_path = "/srv/app/modules/admin"
            default_controller = "dashboard"
            view_path = "/srv/themes/admin"

            [[modules]]
            id = "export"
            parent = "admin"
            base_path = "/srv/app/modules/export"
            kind = "plain"

            [modules.aliases]
            csv = "/srv/csv/"
            "#,
        )
        .unwrap();

        let app = assemble(&config, processor()).unwrap();
        let tree = app.modules();
        assert_eq!(tree.len(), 3);

        let root = tree.root().as_web().unwrap();
        assert_eq!(root.layout(), Some("main"));
        assert_eq!(root.default_controller(), "site");
        assert_eq!(app.path_of_alias("webroot").as_deref(), Some("/var/www"));

        let admin = tree.find("admin").unwrap();
        let admin_web = tree.get(admin).unwrap().as_web().unwrap();
        assert_eq!(admin_web.default_controller(), "dashboard");
        assert_eq!(admin_web.view_path(), "/srv/themes/admin");
        assert!(admin_web.layout().is_none());
        assert_eq!(tree.effective_layout(admin), Some("main"));

        let export = tree.find("admin/export").unwrap();
        assert!(tree.get(export).unwrap().as_web().is_none());
        assert_eq!(tree.get(export).unwrap().parent(), Some(admin));
        assert_eq!(tree.resolve_alias(export, "csv.daily").as_deref(), Some("/srv/csv/daily"));
        assert_eq!(tree.resolve_alias(export, "webroot.css").as_deref(), Some("/var/www/css"));
        assert_eq!(
            tree.resolve_alias(export, "export").as_deref(),
            Some("/srv/app/modules/export")
        );
        assert!(tree.resolve_alias(ModuleId::ROOT, "csv").is_none());
    }

    #[test]
    fn test_unvalidated_unknown_parent_fails() {
        let mut config = FrameworkConfig::default();
        config.modules.push(ModuleEntry {
            id: "users".into(),
            parent: "admin".into(),
            base_path: String::new(),
            kind: ModuleKind::Plain,
            layout: None,
            default_controller: None,
            view_path: None,
            aliases: Default::default(),
        });

        let err = assemble(&config, processor()).unwrap_err();
        assert_eq!(err, ModuleError::UnknownRoute("admin".into()));
    }

    #[test]
    fn test_core_aliases_registered_by_assembly() {
        let config = parse_config("[application]\nbase_path = \"/srv/app\"").unwrap();

        let app = assemble(&config, processor()).unwrap();
        assert_eq!(app.path_of_alias("application").as_deref(), Some("/srv/app"));
        assert_eq!(app.path_of_alias("ext").as_deref(), Some("/srv/app/extensions"));

        let app = app.bind(&crate::application::SharedContext::new());
        assert_eq!(app.path_of_alias("application").as_deref(), Some("/srv/app"));
        assert_eq!(app.path_of_alias("ext").as_deref(), Some("/srv/app/extensions"));
    }

    #[test]
    fn test_configured_alias_wins_over_core_alias() {
        let config = parse_config(
            r#"
            [application]
            base_path = "/srv/app"

            [aliases]
            ext = "/opt/shared/extensions/"
            "#,
        )
        .unwrap();

        let app = assemble(&config, processor()).unwrap();
        assert_eq!(app.path_of_alias("ext").as_deref(), Some("/opt/shared/extensions"));
        assert_eq!(app.path_of_alias("application").as_deref(), Some("/srv/app"));
    }

    #[test]
    fn test_no_core_aliases_without_base_path() {
        let app = assemble(&FrameworkConfig::default(), processor()).unwrap();
        assert!(app.path_of_alias("application").is_none());
        assert!(app.path_of_alias("ext").is_none());
    }
}
