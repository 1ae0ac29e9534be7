//! Inspect an application described by a configuration file.
//!
//! # Architecture Overview
//!
//! ```text
//!   webframe.toml
//!        │
//!        ▼
//!   config::loader ──▶ config::validation ──▶ lifecycle::startup
//!                                                   │
//!                                                   ▼
//!                      ┌──────────────────────────────────────────┐
//!                      │ Application (root web module)            │
//!                      │   identity: id, name, language, charset  │
//!                      │   AliasRegistry                          │
//!                      │   ModuleTree ── admin ── admin/users     │
//!                      │             └── shop                     │
//!                      └──────────────────────────────────────────┘
//!                                                   │
//!                                 bind(SharedContext), then query
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use webframe_core::application::{Application, ProcessError, SharedContext};
use webframe_core::config::{load_config, FrameworkConfig};
use webframe_core::lifecycle::assemble;
use webframe_core::module::{Module, ModuleError, ModuleId, ModuleNode};
use webframe_core::observability::init_logging;

#[derive(Parser)]
#[command(name = "webframe")]
#[command(about = "Inspect application identity, path aliases and modules", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show application identity and paths
    Info,
    /// Resolve an alias, falling back through parent modules
    Resolve {
        alias: String,
        /// Route of the module to resolve from (e.g. admin/users)
        #[arg(short, long, default_value = "")]
        module: String,
    },
    /// List the module tree
    Modules,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FrameworkConfig::default(),
    };
    init_logging(&config.observability)?;

    let processor = Box::new(|app: &Application| -> Result<(), ProcessError> {
        tracing::debug!(application = %app.name(), "No request processing in inspection mode");
        Ok(())
    });

    let context = SharedContext::new();
    let app = assemble(&config, processor)?.bind(&context);

    let output = match cli.command {
        Commands::Info => info(&app),
        Commands::Resolve { alias, module } => {
            let from = app
                .modules()
                .find(&module)
                .ok_or_else(|| ModuleError::UnknownRoute(module.clone()))?;
            json!({
                "alias": alias,
                "module": module,
                "path": app.modules().resolve_alias(from, &alias),
            })
        }
        Commands::Modules => modules(&app),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    app.end(0, true);
    Ok(())
}

fn info(app: &Application) -> Value {
    json!({
        "id": app.id(),
        "name": app.name(),
        "base_path": app.base_path(),
        "runtime_path": app.runtime_path(),
        "language": app.language(),
        "source_language": app.source_language(),
        "charset": app.charset(),
        "aliases": app.aliases().snapshot(),
    })
}

fn modules(app: &Application) -> Value {
    let tree = app.modules();
    let entries: Vec<Value> = tree
        .iter()
        .map(|(handle, node)| {
            let mut entry = json!({
                "route": tree.unique_id(handle),
                "id": node.id(),
                "parent": node.parent().map(ModuleId::index),
                "base_path": node.base_path(),
                "aliases": node.aliases().snapshot(),
            });
            if let ModuleNode::Web(web) = node {
                entry["kind"] = json!("web");
                entry["default_controller"] = json!(web.default_controller());
                entry["layout"] = json!(web.layout());
                entry["effective_layout"] = json!(tree.effective_layout(handle));
                entry["view_path"] = json!(web.view_path());
            } else {
                entry["kind"] = json!("plain");
            }
            entry
        })
        .collect();
    Value::Array(entries)
}
