//! Search-as-filter over catalog entries
//!
//! An entry is visible when it matches both the free-text query and the
//! selected category. No ranking and no fuzzy matching.

use agentdeck_types::{AgentCategory, AgentRecord, SkillCategory, SkillRecord};

/// Anything the browse views can list and filter
pub trait Listing {
    /// Category set the entry belongs to
    type Category: Copy + PartialEq;

    /// Display name, searched by the query
    fn name(&self) -> &str;

    /// Free-text description, searched by the query
    fn description(&self) -> &str;

    /// Entry category, compared against the selected facet
    fn category(&self) -> Self::Category;
}

impl Listing for AgentRecord {
    type Category = AgentCategory;

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> AgentCategory {
        self.category
    }
}

impl Listing for SkillRecord {
    type Category = SkillCategory;

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> SkillCategory {
        self.category
    }
}

/// Check whether a single entry passes the query
pub fn matches_query<T: Listing>(entry: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    entry.name().to_lowercase().contains(&needle)
        || entry.description().to_lowercase().contains(&needle)
}

/// Visible subset of `entries`, in declaration order
pub fn filter<'a, T: Listing>(
    entries: &'a [T],
    query: &str,
    category: Option<T::Category>,
) -> Vec<&'a T> {
    entries
        .iter()
        .filter(|entry| category.map_or(true, |c| entry.category() == c))
        .filter(|entry| matches_query(*entry, query))
        .collect()
}
