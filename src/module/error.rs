//! Module tree errors.

use thiserror::Error;

use crate::module::tree::ModuleId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    #[error("module id must not be empty")]
    EmptyId,

    #[error("module id \"{0}\" must not contain '/'")]
    InvalidId(String),

    #[error("parent module {0:?} does not exist")]
    UnknownParent(ModuleId),

    #[error("module {0:?} does not exist")]
    UnknownModule(ModuleId),

    #[error("module {0:?} is not a web module")]
    NotWebModule(ModuleId),

    #[error("no module at route \"{0}\"")]
    UnknownRoute(String),

    #[error("module \"{id}\" already exists under parent {parent:?}")]
    DuplicateId { parent: ModuleId, id: String },
}
