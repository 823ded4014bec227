//! AgentDeck Types - Core types for the AgentDeck catalog
//!
//! This module defines the catalog records, the content bundle wire shape and
//! the derived display records shared by the other crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub mod category;
pub mod error;

pub use category::{AgentCategory, SkillCategory};
pub use error::{Error, Result};

// ============================================================================
// Catalog Records
// ============================================================================

/// An agent persona in the static catalog
#[derive(Debug, Clone, Serialize)]
pub struct AgentRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AgentCategory,
    pub description: &'static str,
    /// Skill ids, in display order
    pub skills: &'static [&'static str],
    pub tools: &'static [&'static str],
    /// Source file path, shown for copy-to-clipboard only
    pub path: &'static str,
}

/// A skill module in the static catalog
#[derive(Debug, Clone, Serialize)]
pub struct SkillRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SkillCategory,
    pub description: &'static str,
    pub path: &'static str,
}

// ============================================================================
// Content Bundle
// ============================================================================

/// Which keyed namespace of the content bundle a document lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Agent,
    Skill,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Agent => "agent",
            DocumentKind::Skill => "skill",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agent" | "agents" => Ok(DocumentKind::Agent),
            "skill" | "skills" => Ok(DocumentKind::Skill),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// Raw Markdown documents keyed by record id.
///
/// Wire shape of the static asset: `{ "agents": {id: text}, "skills": {id: text} }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub agents: BTreeMap<String, String>,
    #[serde(default)]
    pub skills: BTreeMap<String, String>,
}

impl ContentBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: DocumentKind, id: &str) -> Option<&str> {
        self.section(kind).get(id).map(String::as_str)
    }

    pub fn insert(&mut self, kind: DocumentKind, id: impl Into<String>, text: impl Into<String>) {
        let section = match kind {
            DocumentKind::Agent => &mut self.agents,
            DocumentKind::Skill => &mut self.skills,
        };
        section.insert(id.into(), text.into());
    }

    pub fn section(&self, kind: DocumentKind) -> &BTreeMap<String, String> {
        match kind {
            DocumentKind::Agent => &self.agents,
            DocumentKind::Skill => &self.skills,
        }
    }

    pub fn len(&self) -> usize {
        self.agents.len() + self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty() && self.skills.is_empty()
    }
}

// ============================================================================
// Derived Display Records
// ============================================================================

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_LICENSE: &str = "Apache-2.0";
pub const DEFAULT_UPDATED: &str = "2024-12-15";
pub const DEFAULT_STATUS: &str = "stable";

/// Metadata recovered from a document; recomputed on every render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMetadata {
    pub version: String,
    pub license: String,
    pub updated: String,
    pub status: String,
}

impl Default for ParsedMetadata {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            updated: DEFAULT_UPDATED.to_string(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// Copy-only example commands for the "test drive" panel.
///
/// Empty `triggers` / `allowed_tools` mean the section is omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDrive {
    pub triggers: Vec<String>,
    pub allowed_tools: Vec<String>,
    pub commands: Vec<String>,
}

impl TestDrive {
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty() && self.allowed_tools.is_empty()
    }
}
