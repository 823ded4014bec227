//! Closed category sets for agents and skills

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Agent category (four fixed values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentCategory {
    Manager,
    Expert,
    Quality,
    Operations,
}

impl AgentCategory {
    pub const ALL: [AgentCategory; 4] = [
        AgentCategory::Manager,
        AgentCategory::Expert,
        AgentCategory::Quality,
        AgentCategory::Operations,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AgentCategory::Manager => "manager",
            AgentCategory::Expert => "expert",
            AgentCategory::Quality => "quality",
            AgentCategory::Operations => "operations",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgentCategory::Manager => "Managers",
            AgentCategory::Expert => "Domain Experts",
            AgentCategory::Quality => "Quality & Review",
            AgentCategory::Operations => "Operations",
        }
    }

    /// CSS class used by the front end to style the category badge
    pub fn badge_class(self) -> &'static str {
        match self {
            AgentCategory::Manager => "badge-purple",
            AgentCategory::Expert => "badge-blue",
            AgentCategory::Quality => "badge-green",
            AgentCategory::Operations => "badge-orange",
        }
    }
}

impl fmt::Display for AgentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for AgentCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| Error::UnknownCategory {
                kind: "agent",
                value: s.to_string(),
            })
    }
}

/// Skill category (eight fixed values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Development,
    Testing,
    Documentation,
    Security,
    Infrastructure,
    Data,
    Design,
    Workflow,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 8] = [
        SkillCategory::Development,
        SkillCategory::Testing,
        SkillCategory::Documentation,
        SkillCategory::Security,
        SkillCategory::Infrastructure,
        SkillCategory::Data,
        SkillCategory::Design,
        SkillCategory::Workflow,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            SkillCategory::Development => "development",
            SkillCategory::Testing => "testing",
            SkillCategory::Documentation => "documentation",
            SkillCategory::Security => "security",
            SkillCategory::Infrastructure => "infrastructure",
            SkillCategory::Data => "data",
            SkillCategory::Design => "design",
            SkillCategory::Workflow => "workflow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Development => "Development",
            SkillCategory::Testing => "Testing",
            SkillCategory::Documentation => "Documentation",
            SkillCategory::Security => "Security",
            SkillCategory::Infrastructure => "Infrastructure",
            SkillCategory::Data => "Data & Analytics",
            SkillCategory::Design => "Design",
            SkillCategory::Workflow => "Workflow",
        }
    }

    /// CSS class used by the front end to style the category badge
    pub fn badge_class(self) -> &'static str {
        match self {
            SkillCategory::Development => "badge-blue",
            SkillCategory::Testing => "badge-green",
            SkillCategory::Documentation => "badge-gray",
            SkillCategory::Security => "badge-red",
            SkillCategory::Infrastructure => "badge-orange",
            SkillCategory::Data => "badge-cyan",
            SkillCategory::Design => "badge-pink",
            SkillCategory::Workflow => "badge-purple",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for SkillCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| Error::UnknownCategory {
                kind: "skill",
                value: s.to_string(),
            })
    }
}
