//! Response records for the browse, detail and dashboard views
//!
//! Derived data (metadata, capabilities, test drive) is recomputed on every
//! request from whatever the content store currently answers.

use agentdeck_catalog::{agents_using_skill, filter, AGENTS, SKILLS};
use agentdeck_content::docs::{routes, DocRoute};
use agentdeck_content::ContentStore;
use agentdeck_skills::{extract_capabilities, extract_test_drive, parse_metadata, render_body};
use agentdeck_types::{
    AgentCategory, AgentRecord, DocumentKind, ParsedMetadata, SkillCategory, SkillRecord,
    TestDrive,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AgentSummary {
    #[serde(flatten)]
    pub record: &'static AgentRecord,
    pub category_label: &'static str,
    pub badge_class: &'static str,
}

impl AgentSummary {
    pub fn new(record: &'static AgentRecord) -> Self {
        Self {
            record,
            category_label: record.category.label(),
            badge_class: record.category.badge_class(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillSummary {
    #[serde(flatten)]
    pub record: &'static SkillRecord,
    pub category_label: &'static str,
    pub badge_class: &'static str,
}

impl SkillSummary {
    pub fn new(record: &'static SkillRecord) -> Self {
        Self {
            record,
            category_label: record.category.label(),
            badge_class: record.category.badge_class(),
        }
    }
}

pub fn list_agents(query: &str, category: Option<AgentCategory>) -> Vec<AgentSummary> {
    filter(AGENTS, query, category)
        .into_iter()
        .map(AgentSummary::new)
        .collect()
}

pub fn list_skills(query: &str, category: Option<SkillCategory>) -> Vec<SkillSummary> {
    filter(SKILLS, query, category)
        .into_iter()
        .map(SkillSummary::new)
        .collect()
}

#[derive(Debug, Serialize)]
pub struct AgentDetail {
    #[serde(flatten)]
    pub summary: AgentSummary,
    /// The agent's skill ids resolved to records; unknown ids are dropped
    pub skill_records: Vec<SkillSummary>,
    pub metadata: ParsedMetadata,
    pub content_ready: bool,
    /// Raw document or a placeholder
    pub content: String,
    /// Markdown handed to the renderer (front matter removed)
    pub body: String,
}

impl AgentDetail {
    pub fn build(record: &'static AgentRecord, store: &ContentStore) -> Self {
        let content = store.lookup(DocumentKind::Agent, record.id);

        Self {
            summary: AgentSummary::new(record),
            skill_records: record
                .skills
                .iter()
                .filter_map(|id| agentdeck_catalog::skill(id))
                .map(SkillSummary::new)
                .collect(),
            metadata: parse_metadata(content),
            content_ready: store.is_ready(),
            content: content.to_string(),
            body: render_body(content).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillDetail {
    #[serde(flatten)]
    pub summary: SkillSummary,
    pub used_by: Vec<AgentSummary>,
    pub metadata: ParsedMetadata,
    pub capabilities: Vec<String>,
    pub test_drive: TestDrive,
    pub content_ready: bool,
    pub content: String,
    pub body: String,
}

impl SkillDetail {
    pub fn build(record: &'static SkillRecord, store: &ContentStore) -> Self {
        let content = store.lookup(DocumentKind::Skill, record.id);

        Self {
            summary: SkillSummary::new(record),
            used_by: agents_using_skill(record.id)
                .into_iter()
                .map(AgentSummary::new)
                .collect(),
            metadata: parse_metadata(content),
            capabilities: extract_capabilities(content),
            test_drive: extract_test_drive(content, record.id),
            content_ready: store.is_ready(),
            content: content.to_string(),
            body: render_body(content).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Facet {
    pub slug: &'static str,
    pub label: &'static str,
    pub badge_class: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub agents: usize,
    pub skills: usize,
    pub agent_categories: Vec<Facet>,
    pub skill_categories: Vec<Facet>,
    pub content_ready: bool,
    pub docs: &'static [DocRoute],
}

impl Dashboard {
    pub fn build(store: &ContentStore) -> Self {
        let agent_categories = AgentCategory::ALL
            .into_iter()
            .map(|c| Facet {
                slug: c.slug(),
                label: c.label(),
                badge_class: c.badge_class(),
                count: AGENTS.iter().filter(|a| a.category == c).count(),
            })
            .collect();

        let skill_categories = SkillCategory::ALL
            .into_iter()
            .map(|c| Facet {
                slug: c.slug(),
                label: c.label(),
                badge_class: c.badge_class(),
                count: SKILLS.iter().filter(|s| s.category == c).count(),
            })
            .collect();

        Self {
            agents: AGENTS.len(),
            skills: SKILLS.len(),
            agent_categories,
            skill_categories,
            content_ready: store.is_ready(),
            docs: routes(),
        }
    }
}
