//! Helpers that prepare documents for the Markdown renderer
//!
//! The front end renders Markdown itself; this module only separates the
//! YAML front matter from the body and cuts previews for list cards.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static FRONT_MATTER_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)(.*)\z").ok()
});

/// Fields read from a document's YAML front matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    /// Declared name; expected to equal the document id
    #[serde(default)]
    pub name: Option<String>,
    /// Declared description
    #[serde(default)]
    pub description: Option<String>,
}

/// Split a document into its front matter (if any) and Markdown body
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let captures = FRONT_MATTER_RE
        .as_ref()
        .and_then(|re| re.captures(content));

    match captures {
        Some(caps) => {
            let yaml = caps.get(1).map(|m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            (yaml, body)
        }
        None => (None, content),
    }
}

/// The part of a document handed to the Markdown renderer
pub fn render_body(content: &str) -> &str {
    split_front_matter(content).1.trim_start_matches(['\r', '\n'])
}

/// Parse the YAML front matter of a document
pub fn parse_front_matter(content: &str) -> Result<FrontMatter> {
    let (yaml, _) = split_front_matter(content);
    let yaml = yaml.ok_or_else(|| anyhow!("No YAML front matter found"))?;

    serde_yaml::from_str(yaml).with_context(|| "Failed to parse YAML front matter")
}

/// Cut `text` to at most `max_chars` characters for a list card.
///
/// Prefers a word boundary and appends `...` when anything was dropped.
pub fn preview(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..cut];
    match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => format!("{}...", head[..space].trim_end()),
        _ => format!("{}...", head),
    }
}
