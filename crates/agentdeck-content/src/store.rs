//! Write-once content store

use agentdeck_types::{ContentBundle, DocumentKind};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Returned by lookups before the bundle has been loaded
pub const LOADING: &str = "Loading...";
/// Returned by lookups for ids absent from a loaded bundle
pub const NOT_FOUND: &str = "Content not found";

/// Raw documents keyed by kind and id, populated once per process
#[derive(Debug, Default)]
pub struct ContentStore {
    bundle: OnceLock<ContentBundle>,
}

static GLOBAL: ContentStore = ContentStore::new();

/// The process-wide store
pub fn global() -> &'static ContentStore {
    &GLOBAL
}

impl ContentStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            bundle: OnceLock::new(),
        }
    }

    /// Whether the one-time load has completed (successfully or not)
    pub fn is_ready(&self) -> bool {
        self.bundle.get().is_some()
    }

    /// Install the bundle. Returns false, leaving the store unchanged, when
    /// it was already populated.
    pub fn populate(&self, bundle: ContentBundle) -> bool {
        let documents = bundle.len();
        match self.bundle.set(bundle) {
            Ok(()) => {
                info!("Content store ready with {} documents", documents);
                true
            }
            Err(_) => {
                warn!("Content store already populated; ignoring second bundle");
                false
            }
        }
    }

    /// Raw text for a document, or a placeholder. Never fails.
    pub fn lookup(&self, kind: DocumentKind, id: &str) -> &str {
        match self.bundle.get() {
            None => LOADING,
            Some(bundle) => bundle.get(kind, id).unwrap_or(NOT_FOUND),
        }
    }

    /// Raw text for a document when the store is ready and has it
    pub fn get(&self, kind: DocumentKind, id: &str) -> Option<&str> {
        self.bundle.get()?.get(kind, id)
    }

    /// The loaded bundle, if any
    pub fn bundle(&self) -> Option<&ContentBundle> {
        self.bundle.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> ContentBundle {
        let mut bundle = ContentBundle::new();
        bundle.insert(DocumentKind::Agent, "backend-expert", "# Backend Expert\n");
        bundle.insert(DocumentKind::Skill, "pdf", "# PDF\n");
        bundle
    }

    #[test]
    fn test_lookup_before_load() {
        let store = ContentStore::new();
        assert!(!store.is_ready());
        assert_eq!(store.lookup(DocumentKind::Agent, "backend-expert"), LOADING);
        assert_eq!(store.get(DocumentKind::Agent, "backend-expert"), None);
    }

    #[test]
    fn test_lookup_after_load() {
        let store = ContentStore::new();
        assert!(store.populate(bundle()));
        assert!(store.is_ready());
        assert_eq!(
            store.lookup(DocumentKind::Agent, "backend-expert"),
            "# Backend Expert\n"
        );
        assert_eq!(store.lookup(DocumentKind::Skill, "backend-expert"), NOT_FOUND);
        assert_eq!(store.lookup(DocumentKind::Agent, "nobody"), NOT_FOUND);
    }

    #[test]
    fn test_populate_only_once() {
        let store = ContentStore::new();
        assert!(store.populate(bundle()));
        assert!(!store.populate(ContentBundle::new()));
        assert_eq!(store.lookup(DocumentKind::Skill, "pdf"), "# PDF\n");
    }

    #[test]
    fn test_empty_bundle_degrades_to_not_found() {
        let store = ContentStore::new();
        store.populate(ContentBundle::new());
        assert!(store.is_ready());
        assert_eq!(store.lookup(DocumentKind::Skill, "pdf"), NOT_FOUND);
    }
}
