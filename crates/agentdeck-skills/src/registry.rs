//! Document registry used to build the content bundle
//!
//! Two phases, as with any progressive loader:
//! - Phase 1: scan directories and read front matter only
//! - Phase 2: load full text and assemble the bundle

use agentdeck_types::{ContentBundle, DocumentKind};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::document::Document;

/// Registry of agent and skill documents found on disk
pub struct DocumentRegistry {
    /// Discovered documents keyed by kind and id
    documents: BTreeMap<(DocumentKind, String), Document>,
    /// Directories holding `<id>.md` agent files
    agent_directories: Vec<PathBuf>,
    /// Directories holding `<id>/SKILL.md` skill folders
    skill_directories: Vec<PathBuf>,
}

impl DocumentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            documents: BTreeMap::new(),
            agent_directories: Vec::new(),
            skill_directories: Vec::new(),
        }
    }

    /// Add an agents directory to scan
    pub fn add_agents_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.agent_directories.push(dir.into());
        self
    }

    /// Add a skills directory to scan
    pub fn add_skills_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skill_directories.push(dir.into());
        self
    }

    /// Add personal directories: ~/.claude/agents/ and ~/.claude/skills/
    pub fn with_personal_documents(self) -> Self {
        if let Some(home) = dirs::home_dir() {
            let base = home.join(".claude");
            self.add_agents_directory(base.join("agents"))
                .add_skills_directory(base.join("skills"))
        } else {
            warn!("Could not find home directory for personal documents");
            self
        }
    }

    /// Scan all configured directories (Phase 1: Discovery).
    ///
    /// A later directory overrides an earlier one for the same id.
    pub fn discover(&mut self) -> Result<()> {
        info!(
            "Starting document discovery in {} agent and {} skill directories",
            self.agent_directories.len(),
            self.skill_directories.len()
        );

        for dir in self.agent_directories.clone() {
            if Self::usable(&dir) {
                self.scan_directory(&dir, DocumentKind::Agent)?;
            }
        }

        for dir in self.skill_directories.clone() {
            if Self::usable(&dir) {
                self.scan_directory(&dir, DocumentKind::Skill)?;
            }
        }

        info!(
            "Discovered {} agents and {} skills",
            self.count(DocumentKind::Agent),
            self.count(DocumentKind::Skill)
        );
        Ok(())
    }

    fn usable(dir: &Path) -> bool {
        if !dir.exists() {
            debug!("Document directory does not exist: {:?}", dir);
            return false;
        }

        if !dir.is_dir() {
            warn!("Document path is not a directory: {:?}", dir);
            return false;
        }

        true
    }

    /// Scan a single directory for documents of one kind
    fn scan_directory(&mut self, dir: &Path, kind: DocumentKind) -> Result<()> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {:?}", dir))?;

        for entry in entries {
            let path = entry?.path();

            let discovered = match kind {
                DocumentKind::Agent if path.is_file() => Document::agent_from_file(&path),
                DocumentKind::Skill if path.is_dir() => Document::skill_from_dir(&path),
                _ => continue,
            };

            match discovered {
                Ok(document) => {
                    debug!("Discovered {} '{}' at {:?}", kind, document.id, path);
                    self.documents
                        .insert((kind, document.id.clone()), document);
                }
                Err(e) => {
                    debug!("Skipping {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Get a discovered document
    pub fn get(&self, kind: DocumentKind, id: &str) -> Option<&Document> {
        self.documents.get(&(kind, id.to_string()))
    }

    /// Ids of one kind, sorted
    pub fn ids(&self, kind: DocumentKind) -> impl Iterator<Item = &str> {
        self.documents
            .keys()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, id)| id.as_str())
    }

    /// Number of documents of one kind
    pub fn count(&self, kind: DocumentKind) -> usize {
        self.ids(kind).count()
    }

    /// Get number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Load every document and assemble the bundle (Phase 2: Loading)
    pub fn into_bundle(mut self) -> Result<ContentBundle> {
        let mut bundle = ContentBundle::new();

        for ((kind, id), document) in self.documents.iter_mut() {
            let text = document.load_content()?;
            bundle.insert(*kind, id.clone(), text);
        }

        info!("Content bundle assembled with {} documents", bundle.len());
        Ok(bundle)
    }

    /// One line per document, for the sync report.
    /// Format: `- agent backend-expert: Designs services...`
    pub fn summary(&self) -> String {
        if self.documents.is_empty() {
            return "No documents found".to_string();
        }

        let mut summary = String::new();
        for ((kind, id), document) in &self.documents {
            summary.push_str(&format!("- {} {}", kind, id));
            if let Some(description) = document.description() {
                summary.push_str(&format!(": {}", description));
            }
            summary.push('\n');
        }
        summary
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fixture() -> tempfile::TempDir {
        let root = tempdir().unwrap();
        let agents = root.path().join("agents");
        let skills = root.path().join("skills");
        fs::create_dir_all(&agents).unwrap();
        fs::create_dir_all(skills.join("xlsx")).unwrap();
        fs::create_dir_all(skills.join("empty-folder")).unwrap();

        fs::write(agents.join("backend-expert.md"), "# Backend Expert\n").unwrap();
        fs::write(agents.join("README.txt"), "not an agent").unwrap();
        fs::write(
            skills.join("xlsx").join("SKILL.md"),
            "---\nname: xlsx\ndescription: Spreadsheets\n---\n# Excel\n",
        )
        .unwrap();
        root
    }

    #[test]
    fn test_registry_new() {
        let registry = DocumentRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.summary(), "No documents found");
    }

    #[test]
    fn test_discover_and_bundle() {
        let root = fixture();
        let mut registry = DocumentRegistry::new()
            .add_agents_directory(root.path().join("agents"))
            .add_skills_directory(root.path().join("skills"))
            .add_skills_directory(root.path().join("missing"));

        registry.discover().unwrap();
        assert_eq!(registry.count(DocumentKind::Agent), 1);
        assert_eq!(registry.count(DocumentKind::Skill), 1);
        assert!(registry.get(DocumentKind::Skill, "xlsx").is_some());
        assert!(registry.get(DocumentKind::Skill, "empty-folder").is_none());
        assert!(registry.summary().contains("- skill xlsx: Spreadsheets"));

        let bundle = registry.into_bundle().unwrap();
        assert_eq!(
            bundle.get(DocumentKind::Agent, "backend-expert"),
            Some("# Backend Expert\n")
        );
        assert!(bundle
            .get(DocumentKind::Skill, "xlsx")
            .is_some_and(|t| t.contains("# Excel")));
    }
}
