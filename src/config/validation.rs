//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (modules reference declared parents)
//! - Detect duplicate modules and malformed alias names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FrameworkConfig → Result<(), Vec<ValidationError>>
//! - Directory existence is not checked; paths are accepted as written

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::config::schema::FrameworkConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{scope}: default controller must not be empty")]
    EmptyDefaultController { scope: String },

    #[error("module #{index}: id must not be empty")]
    EmptyModuleId { index: usize },

    #[error("module #{index}: id \"{id}\" must not contain '/'")]
    InvalidModuleId { index: usize, id: String },

    #[error("module \"{route}\": parent \"{parent}\" is not declared before it")]
    UnknownParent { route: String, parent: String },

    #[error("module \"{route}\" is declared more than once")]
    DuplicateModule { route: String },

    #[error("{scope}: alias name must not be empty")]
    EmptyAlias { scope: String },

    #[error("{scope}: alias \"{alias}\" must not contain '.'")]
    DottedAlias { scope: String, alias: String },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &FrameworkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.application.default_controller.is_empty() {
        errors.push(ValidationError::EmptyDefaultController {
            scope: "application".to_string(),
        });
    }
    check_aliases("application", &config.aliases, &mut errors);

    let mut routes: HashSet<String> = HashSet::new();
    for (index, module) in config.modules.iter().enumerate() {
        if module.id.is_empty() {
            errors.push(ValidationError::EmptyModuleId { index });
            continue;
        }
        if module.id.contains('/') {
            errors.push(ValidationError::InvalidModuleId {
                index,
                id: module.id.clone(),
            });
            continue;
        }

        let route = module.route();
        let parent = module.parent.trim_matches('/');
        if !parent.is_empty() && !routes.contains(parent) {
            errors.push(ValidationError::UnknownParent {
                route: route.clone(),
                parent: parent.to_string(),
            });
        }

        if matches!(module.default_controller.as_deref(), Some("")) {
            errors.push(ValidationError::EmptyDefaultController {
                scope: format!("module \"{}\"", route),
            });
        }
        check_aliases(&format!("module \"{}\"", route), &module.aliases, &mut errors);

        if !routes.insert(route.clone()) {
            errors.push(ValidationError::DuplicateModule { route });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_aliases(
    scope: &str,
    aliases: &BTreeMap<String, String>,
    errors: &mut Vec<ValidationError>,
) {
    for alias in aliases.keys() {
        if alias.is_empty() {
            errors.push(ValidationError::EmptyAlias {
                scope: scope.to_string(),
            });
        } else if alias.contains('.') {
            // A dotted key would be an exact hit that hides derived resolution.
            errors.push(ValidationError::DottedAlias {
                scope: scope.to_string(),
                alias: alias.clone(),
            });
        }
    }
}
