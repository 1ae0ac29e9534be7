//! Alias → path registry with dotted-path derivation.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;

/// Characters stripped from the end of a registered path.
const REGISTER_TRIM: &[char] = &['/', '\\'];

/// Characters stripped from the end of a derived path.
const DERIVED_TRIM: &[char] = &['*', '/'];

/// A thread-safe registry mapping alias names to filesystem paths.
///
/// Cloning is cheap and yields a handle to the same entries.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    entries: Arc<DashMap<String, String>>,
}

impl AliasRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an alias to a path.
    ///
    /// An exact entry wins. Otherwise a dotted alias such as `app.models.User`
    /// is derived from its root (`app`) and memoized under the full alias.
    /// Returns `None` when neither applies.
    pub fn resolve(&self, alias: &str) -> Option<String> {
        if let Some(path) = self.entries.get(alias) {
            return Some(path.value().clone());
        }

        let (root, remainder) = alias.split_once('.')?;

        // Clone out of the guard so the shard lock is released before inserting.
        let root_path = self.entries.get(root).map(|r| r.value().clone())?;

        let derived = format!("{}/{}", root_path, remainder.replace('.', "/"))
            .trim_end_matches(DERIVED_TRIM)
            .to_string();

        tracing::debug!(alias = %alias, path = %derived, "Memoized derived alias");
        self.entries.insert(alias.to_string(), derived.clone());
        Some(derived)
    }

    /// Register `alias` for `path`, or remove it when `path` is `None`.
    ///
    /// Entries previously derived from `alias` keep their old value.
    pub fn register(&self, alias: &str, path: Option<&str>) {
        match path {
            Some(path) => {
                let stored = path.trim_end_matches(REGISTER_TRIM).to_string();
                tracing::debug!(alias = %alias, path = %stored, "Registered alias");
                self.entries.insert(alias.to_string(), stored);
            }
            None => {
                if self.entries.remove(alias).is_some() {
                    tracing::debug!(alias = %alias, "Removed alias");
                }
            }
        }
    }

    /// Remove `alias`. Same as `register(alias, None)`.
    pub fn unregister(&self, alias: &str) {
        self.register(alias, None);
    }

    /// Whether an exact entry exists for `alias` (no derivation).
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Number of stored entries, memoized ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted copy of all entries.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }
}
