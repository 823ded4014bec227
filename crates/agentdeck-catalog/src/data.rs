//! Static catalog data
//!
//! Ids double as keys into the content bundle, so they must match the file
//! stem (agents) or folder name (skills) the bundle was synced from.

use agentdeck_types::{AgentCategory, AgentRecord, SkillCategory, SkillRecord};

/// All agents, in display order
pub static AGENTS: &[AgentRecord] = &[
    AgentRecord {
        id: "project-manager",
        name: "Project Manager",
        category: AgentCategory::Manager,
        description: "Plans milestones, splits work into tasks and coordinates the other agents \
                      through delivery.",
        skills: &["git-workflow", "changelog-writer", "docx"],
        tools: &["Read", "Write", "TodoWrite", "Task"],
        path: ".claude/agents/project-manager.md",
    },
    AgentRecord {
        id: "product-manager",
        name: "Product Manager",
        category: AgentCategory::Manager,
        description: "Turns user needs into requirements, acceptance criteria and prioritized \
                      roadmaps.",
        skills: &["docx", "pptx", "brand-guidelines"],
        tools: &["Read", "Write", "WebSearch"],
        path: ".claude/agents/product-manager.md",
    },
    AgentRecord {
        id: "backend-expert",
        name: "Backend Expert",
        category: AgentCategory::Expert,
        description: "Designs services, APIs and storage layers with attention to correctness \
                      and performance.",
        skills: &["api-design", "mcp-builder", "sql-analytics", "tdd-workflow"],
        tools: &["Read", "Write", "Edit", "Bash", "Grep"],
        path: ".claude/agents/backend-expert.md",
    },
    AgentRecord {
        id: "frontend-expert",
        name: "Frontend Expert",
        category: AgentCategory::Expert,
        description: "Builds accessible, responsive user interfaces and component libraries.",
        skills: &["frontend-design", "webapp-testing", "brand-guidelines"],
        tools: &["Read", "Write", "Edit", "Bash"],
        path: ".claude/agents/frontend-expert.md",
    },
    AgentRecord {
        id: "data-expert",
        name: "Data Expert",
        category: AgentCategory::Expert,
        description: "Cleans, models and reports on data using SQL and spreadsheet tooling.",
        skills: &["sql-analytics", "xlsx", "pdf"],
        tools: &["Read", "Write", "Bash"],
        path: ".claude/agents/data-expert.md",
    },
    AgentRecord {
        id: "code-reviewer",
        name: "Code Reviewer",
        category: AgentCategory::Quality,
        description: "Reviews changes for bugs, readability and security issues before they \
                      merge.",
        skills: &["code-review", "security-audit", "secrets-scanning"],
        tools: &["Read", "Grep", "Glob"],
        path: ".claude/agents/code-reviewer.md",
    },
    AgentRecord {
        id: "qa-engineer",
        name: "QA Engineer",
        category: AgentCategory::Quality,
        description: "Writes and runs test plans, reproduces defects and guards against \
                      regressions.",
        skills: &["webapp-testing", "tdd-workflow"],
        tools: &["Read", "Write", "Bash"],
        path: ".claude/agents/qa-engineer.md",
    },
    AgentRecord {
        id: "devops-engineer",
        name: "DevOps Engineer",
        category: AgentCategory::Operations,
        description: "Automates builds, deployments and infrastructure with containers and \
                      orchestration.",
        skills: &["docker-deploy", "kubernetes-ops", "secrets-scanning", "git-workflow"],
        tools: &["Read", "Write", "Edit", "Bash"],
        path: ".claude/agents/devops-engineer.md",
    },
];

/// All skills, in display order
pub static SKILLS: &[SkillRecord] = &[
    SkillRecord {
        id: "mcp-builder",
        name: "MCP Builder",
        category: SkillCategory::Development,
        description: "Scaffolds Model Context Protocol servers with typed tool definitions.",
        path: ".claude/skills/mcp-builder/SKILL.md",
    },
    SkillRecord {
        id: "api-design",
        name: "API Design",
        category: SkillCategory::Development,
        description: "Drafts consistent REST resource models, error formats and versioning \
                      rules.",
        path: ".claude/skills/api-design/SKILL.md",
    },
    SkillRecord {
        id: "webapp-testing",
        name: "Web App Testing",
        category: SkillCategory::Testing,
        description: "Drives a headless browser to verify user flows and capture screenshots.",
        path: ".claude/skills/webapp-testing/SKILL.md",
    },
    SkillRecord {
        id: "tdd-workflow",
        name: "TDD Workflow",
        category: SkillCategory::Testing,
        description: "Guides red-green-refactor cycles with failing tests written first.",
        path: ".claude/skills/tdd-workflow/SKILL.md",
    },
    SkillRecord {
        id: "pdf",
        name: "PDF",
        category: SkillCategory::Documentation,
        description: "Extracts text and tables, fills forms and merges PDF documents.",
        path: ".claude/skills/pdf/SKILL.md",
    },
    SkillRecord {
        id: "docx",
        name: "Word Documents",
        category: SkillCategory::Documentation,
        description: "Creates and edits Word documents with tracked changes and comments.",
        path: ".claude/skills/docx/SKILL.md",
    },
    SkillRecord {
        id: "changelog-writer",
        name: "Changelog Writer",
        category: SkillCategory::Documentation,
        description: "Summarizes merged commits into user-facing release notes.",
        path: ".claude/skills/changelog-writer/SKILL.md",
    },
    SkillRecord {
        id: "security-audit",
        name: "Security Audit",
        category: SkillCategory::Security,
        description: "Checks code for injection, authentication and dependency \
                      vulnerabilities.",
        path: ".claude/skills/security-audit/SKILL.md",
    },
    SkillRecord {
        id: "secrets-scanning",
        name: "Secrets Scanning",
        category: SkillCategory::Security,
        description: "Finds leaked keys and tokens in the working tree and history.",
        path: ".claude/skills/secrets-scanning/SKILL.md",
    },
    SkillRecord {
        id: "docker-deploy",
        name: "Docker Deploy",
        category: SkillCategory::Infrastructure,
        description: "Writes minimal container images and compose files for services.",
        path: ".claude/skills/docker-deploy/SKILL.md",
    },
    SkillRecord {
        id: "kubernetes-ops",
        name: "Kubernetes Ops",
        category: SkillCategory::Infrastructure,
        description: "Authors manifests, rolls out releases and debugs failing pods.",
        path: ".claude/skills/kubernetes-ops/SKILL.md",
    },
    SkillRecord {
        id: "xlsx",
        name: "Excel",
        category: SkillCategory::Data,
        description: "Creates, edits and analyzes spreadsheets with formulas and charts.",
        path: ".claude/skills/xlsx/SKILL.md",
    },
    SkillRecord {
        id: "sql-analytics",
        name: "SQL Analytics",
        category: SkillCategory::Data,
        description: "Writes and explains analytical queries over relational data.",
        path: ".claude/skills/sql-analytics/SKILL.md",
    },
    SkillRecord {
        id: "frontend-design",
        name: "Frontend Design",
        category: SkillCategory::Design,
        description: "Produces distinctive, production-grade interface layouts and styles.",
        path: ".claude/skills/frontend-design/SKILL.md",
    },
    SkillRecord {
        id: "brand-guidelines",
        name: "Brand Guidelines",
        category: SkillCategory::Design,
        description: "Applies the organization's colors, typography and voice to artifacts.",
        path: ".claude/skills/brand-guidelines/SKILL.md",
    },
    SkillRecord {
        id: "pptx",
        name: "PowerPoint",
        category: SkillCategory::Design,
        description: "Builds slide decks from outlines with consistent layouts.",
        path: ".claude/skills/pptx/SKILL.md",
    },
    SkillRecord {
        id: "git-workflow",
        name: "Git Workflow",
        category: SkillCategory::Workflow,
        description: "Keeps branches, commit messages and pull requests tidy.",
        path: ".claude/skills/git-workflow/SKILL.md",
    },
    SkillRecord {
        id: "code-review",
        name: "Code Review",
        category: SkillCategory::Workflow,
        description: "Structures review feedback by severity with concrete suggestions.",
        path: ".claude/skills/code-review/SKILL.md",
    },
];

/// Find an agent by id
pub fn agent(id: &str) -> Option<&'static AgentRecord> {
    AGENTS.iter().find(|a| a.id == id)
}

/// Find a skill by id
pub fn skill(id: &str) -> Option<&'static SkillRecord> {
    SKILLS.iter().find(|s| s.id == id)
}

/// Agents that list the given skill, in declaration order
pub fn agents_using_skill(skill_id: &str) -> Vec<&'static AgentRecord> {
    AGENTS
        .iter()
        .filter(|a| a.skills.iter().any(|s| *s == skill_id))
        .collect()
}
