//! Agent and skill documents on disk
//!
//! An agent is a single `<id>.md` file; a skill is a folder containing `SKILL.md`.

use agentdeck_types::DocumentKind;
use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::render::{parse_front_matter, FrontMatter};

/// File name of a skill's document inside its folder
pub const SKILL_FILE: &str = "SKILL.md";

/// Ids longer than this are still accepted but logged
const MAX_ID_LENGTH: usize = 64;

static ID_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").ok());

/// A discovered document; content is loaded on demand
#[derive(Debug, Clone)]
pub struct Document {
    /// Agent or skill
    pub kind: DocumentKind,
    /// Catalog id (file stem or folder name)
    pub id: String,
    /// Markdown file backing the document
    pub path: PathBuf,
    /// Front matter, empty when absent or unparsable
    pub front_matter: FrontMatter,
    /// Full text (loaded on demand)
    pub content: Option<String>,
}

impl Document {
    /// Read an agent document from `<id>.md`, keeping front matter only
    pub fn agent_from_file(path: &Path) -> Result<Self> {
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            return Err(anyhow!("{:?} is not a Markdown file", path));
        }

        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("Cannot derive an id from {:?}", path))?;

        Self::discover(DocumentKind::Agent, id, path.to_path_buf())
    }

    /// Read a skill document from `<dir>/SKILL.md`, keeping front matter only
    pub fn skill_from_dir(dir: &Path) -> Result<Self> {
        let skill_file = dir.join(SKILL_FILE);

        if !skill_file.exists() {
            return Err(anyhow!("{} not found in {:?}", SKILL_FILE, dir));
        }

        let id = dir
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("Cannot derive an id from {:?}", dir))?;

        Self::discover(DocumentKind::Skill, id, skill_file)
    }

    fn discover(kind: DocumentKind, id: &str, path: PathBuf) -> Result<Self> {
        let text =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;

        let front_matter = match parse_front_matter(&text) {
            Ok(front_matter) => front_matter,
            Err(e) => {
                debug!("No usable front matter in {:?}: {:#}", path, e);
                FrontMatter::default()
            }
        };

        let document = Self {
            kind,
            id: id.to_string(),
            path,
            front_matter,
            content: None,
        };
        document.check_id();
        Ok(document)
    }

    /// Load full content if not already loaded
    pub fn load_content(&mut self) -> Result<&str> {
        if self.content.is_none() {
            let text = fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {:?}", self.path))?;
            self.content = Some(text);
        }

        Ok(self.content.as_deref().unwrap_or_default())
    }

    /// Display name: front matter name, falling back to the id
    pub fn name(&self) -> &str {
        self.front_matter.name.as_deref().unwrap_or(&self.id)
    }

    /// Front matter description, if any
    pub fn description(&self) -> Option<&str> {
        self.front_matter.description.as_deref()
    }

    /// Warn about ids the catalog is unlikely to reference. Never rejects.
    fn check_id(&self) {
        if self.id.len() > MAX_ID_LENGTH {
            warn!(
                "{} id '{}' exceeds {} characters (was {})",
                self.kind,
                self.id,
                MAX_ID_LENGTH,
                self.id.len()
            );
        }

        let kebab = ID_RE.as_ref().is_some_and(|re| re.is_match(&self.id));
        if !kebab {
            warn!(
                "{} id '{}' is not lowercase kebab-case; catalog lookups may miss it",
                self.kind, self.id
            );
        }

        if let Some(name) = self.front_matter.name.as_deref() {
            if name != self.id {
                warn!(
                    "{} '{}' declares name '{}' in its front matter",
                    self.kind, self.id, name
                );
            }
        }
    }
}
