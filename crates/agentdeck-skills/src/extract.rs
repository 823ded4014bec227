//! Best-effort field extraction from agent and skill documents
//!
//! Each extractor is an independent single pass over the raw text. Nothing
//! here validates shape: a `version:` value need not look like a version.

use agentdeck_types::{ParsedMetadata, TestDrive};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of capability bullets returned
pub const MAX_CAPABILITIES: usize = 5;
/// Maximum number of trigger keywords returned
pub const MAX_TRIGGERS: usize = 5;
/// Maximum number of allowed-tool tokens returned
pub const MAX_TOOLS: usize = 6;

/// Shown when a document has no capability bullets
pub const DEFAULT_CAPABILITIES: [&str; 3] = [
    "Automated task execution",
    "Context-aware assistance",
    "Integration with development tools",
];

/// `key:` then optional blanks, an optional quote, optional blanks, and the
/// value up to the next quote, newline or end of input.
fn field_pattern(key: &str) -> Option<Regex> {
    Regex::new(&format!(
        r#"{}:[ \t]*["']?[ \t]*([^"'\n]+)"#,
        regex::escape(key)
    ))
    .ok()
}

static VERSION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| field_pattern("version"));
static LICENSE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| field_pattern("license"));
static UPDATED_RE: LazyLock<Option<Regex>> = LazyLock::new(|| field_pattern("updated"));
static STATUS_RE: LazyLock<Option<Regex>> = LazyLock::new(|| field_pattern("status"));

static TRIGGERS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)triggers:.*?keywords:\s*\[([^\]]*)\]").ok());
static TOOLS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*allowed-tools:[ \t]*(.+)$").ok());

/// First capture of `re` in `content`, trimmed (possibly empty)
fn first_value<'a>(re: &Option<Regex>, content: &'a str) -> Option<&'a str> {
    re.as_ref()?
        .captures(content)?
        .get(1)
        .map(|m| m.as_str().trim())
}

/// Recover version, license, updated date and status from a document.
///
/// Fields that are not found keep the defaults of [`ParsedMetadata`].
pub fn parse_metadata(content: &str) -> ParsedMetadata {
    let mut metadata = ParsedMetadata::default();

    let fields = [
        (&*VERSION_RE, &mut metadata.version),
        (&*LICENSE_RE, &mut metadata.license),
        (&*UPDATED_RE, &mut metadata.updated),
        (&*STATUS_RE, &mut metadata.status),
    ];

    for (re, slot) in fields {
        if let Some(value) = first_value(re, content) {
            *slot = value.to_string();
        }
    }

    metadata
}

/// Bullets under the first `## Capabilities` or `## Features` heading.
///
/// Collection ends at the next `## ` heading. Falls back to
/// [`DEFAULT_CAPABILITIES`] when nothing was collected.
pub fn extract_capabilities(content: &str) -> Vec<String> {
    let mut collecting = false;
    let mut items = Vec::new();

    for line in content.lines() {
        if line.contains("## Capabilities") || line.contains("## Features") {
            collecting = true;
            continue;
        }

        if !collecting {
            continue;
        }

        if line.starts_with("## ") {
            break;
        }

        if let Some(item) = line.strip_prefix("- ") {
            items.push(item.trim().to_string());
        }
    }

    if items.is_empty() {
        return DEFAULT_CAPABILITIES.iter().map(|s| s.to_string()).collect();
    }

    items.truncate(MAX_CAPABILITIES);
    items
}

/// Keywords from a `triggers:` block's `keywords: [...]` list
pub fn extract_triggers(content: &str) -> Vec<String> {
    let Some(caps) = TRIGGERS_RE.as_ref().and_then(|re| re.captures(content)) else {
        return Vec::new();
    };
    let Some(list) = caps.get(1) else {
        return Vec::new();
    };

    list.as_str()
        .split(',')
        .map(|k| k.trim().trim_matches(|c| c == '"' || c == '\'').trim())
        .filter(|k| !k.is_empty())
        .take(MAX_TRIGGERS)
        .map(str::to_string)
        .collect()
}

/// Whitespace-separated tokens of an `allowed-tools:` line
pub fn extract_allowed_tools(content: &str) -> Vec<String> {
    let Some(value) = TOOLS_RE
        .as_ref()
        .and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    value
        .as_str()
        .split_whitespace()
        .take(MAX_TOOLS)
        .map(str::to_string)
        .collect()
}

/// Build the copy-only example commands for a document.
///
/// Sections with nothing extracted are omitted rather than defaulted. The
/// commands are display text; nothing runs them.
pub fn extract_test_drive(content: &str, id: &str) -> TestDrive {
    let triggers = extract_triggers(content);
    let allowed_tools = extract_allowed_tools(content);

    let mut commands: Vec<String> = triggers
        .iter()
        .map(|keyword| format!("claude -p \"{}\"", keyword))
        .collect();

    if !allowed_tools.is_empty() {
        commands.push(format!(
            "claude --allowedTools \"{}\" -p \"Use the {} skill\"",
            allowed_tools.join(","),
            id
        ));
    }

    TestDrive {
        triggers,
        allowed_tools,
        commands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_quoted_and_unquoted() {
        let meta = parse_metadata("version: \"2.3.1\"\nlicense: MIT\n");
        assert_eq!(meta.version, "2.3.1");
        assert_eq!(meta.license, "MIT");
        assert_eq!(meta.updated, "2024-12-15");
        assert_eq!(meta.status, "stable");
    }

    #[test]
    fn test_metadata_trims_value() {
        let meta = parse_metadata("version:   ' 0.9 beta  '\n");
        assert_eq!(meta.version, "0.9 beta");
    }

    #[test]
    fn test_metadata_scenario_keeps_unmatched_defaults() {
        let meta = parse_metadata("status: 'beta'\nupdated: 2025-01-01");
        assert_eq!(
            meta,
            ParsedMetadata {
                version: "1.0.0".to_string(),
                license: "Apache-2.0".to_string(),
                updated: "2025-01-01".to_string(),
                status: "beta".to_string(),
            }
        );
    }

    #[test]
    fn test_metadata_no_keys_gives_defaults() {
        assert_eq!(parse_metadata(""), ParsedMetadata::default());
        assert_eq!(
            parse_metadata("# Title\n\nJust prose with no fields."),
            ParsedMetadata::default()
        );
    }

    #[test]
    fn test_metadata_first_match_wins() {
        let meta = parse_metadata("version: 1.1.0\n\n## History\nversion: 0.1.0\n");
        assert_eq!(meta.version, "1.1.0");
    }

    #[test]
    fn test_metadata_keys_are_case_sensitive() {
        let meta = parse_metadata("Version: 9.9.9\nSTATUS: retired\n");
        assert_eq!(meta, ParsedMetadata::default());
    }

    #[test]
    fn test_metadata_does_not_cross_lines() {
        let meta = parse_metadata("version:\nlicense: MIT\n");
        assert_eq!(meta.version, "1.0.0");
        assert_eq!(meta.license, "MIT");
    }

    #[test]
    fn test_metadata_blank_first_value_is_kept() {
        let meta = parse_metadata("version: '   '\nversion: 2.0\n");
        assert_eq!(meta.version, "");
    }

    #[test]
    fn test_capabilities_skip_nested_bullets() {
        let caps = extract_capabilities("## Capabilities\n- A\n  - A.1\n  - A.2\n- B\n");
        assert_eq!(caps, vec!["A", "B"]);
    }

    #[test]
    fn test_capabilities_indented_heading_does_not_stop() {
        let caps = extract_capabilities("## Capabilities\n- A\n  ## aside\n- B\n");
        assert_eq!(caps, vec!["A", "B"]);
    }

    #[test]
    fn test_capabilities_stop_at_next_heading() {
        let caps = extract_capabilities("## Capabilities\n- A\n- B\n## Next\n- C");
        assert_eq!(caps, vec!["A", "B"]);
    }

    #[test]
    fn test_capabilities_from_features_heading() {
        let content = "# Skill\n\n## Features\n\n- Fast  \n- Small\n\nTrailing prose\n";
        assert_eq!(extract_capabilities(content), vec!["Fast", "Small"]);
    }

    #[test]
    fn test_capabilities_ignore_subheadings() {
        let content = "## Capabilities\n### Core\n- One\n### Extra\n- Two\n";
        assert_eq!(extract_capabilities(content), vec!["One", "Two"]);
    }

    #[test]
    fn test_capabilities_truncate_to_five() {
        let mut content = String::from("## Capabilities\n");
        for i in 0..10 {
            content.push_str(&format!("- item {}\n", i));
        }
        let caps = extract_capabilities(&content);
        assert_eq!(caps.len(), 5);
        assert_eq!(caps[0], "item 0");
        assert_eq!(caps[4], "item 4");
    }

    #[test]
    fn test_capabilities_default_without_heading() {
        let caps = extract_capabilities("- looks like a bullet\n- but no heading");
        assert_eq!(caps, DEFAULT_CAPABILITIES.to_vec());
    }

    #[test]
    fn test_capabilities_heading_as_last_line() {
        let caps = extract_capabilities("# Title\n\n## Capabilities");
        assert_eq!(caps, DEFAULT_CAPABILITIES.to_vec());
    }

    #[test]
    fn test_triggers_across_lines() {
        let content = "---\ntriggers:\n  keywords: [\"pdf\", 'merge', extract text , , form]\n---\n";
        assert_eq!(
            extract_triggers(content),
            vec!["pdf", "merge", "extract text", "form"]
        );
    }

    #[test]
    fn test_triggers_capped_at_five() {
        let content = "triggers:\n  keywords: [a, b, c, d, e, f, g]";
        assert_eq!(extract_triggers(content), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_allowed_tools_capped_at_six() {
        let content = "name: x\nallowed-tools: Read  Write Edit Bash Grep Glob WebFetch\n";
        assert_eq!(
            extract_allowed_tools(content),
            vec!["Read", "Write", "Edit", "Bash", "Grep", "Glob"]
        );
    }

    #[test]
    fn test_test_drive_sections_omitted_when_absent() {
        let drive = extract_test_drive("# Plain document", "plain");
        assert!(drive.is_empty());
        assert!(drive.commands.is_empty());
    }

    #[test]
    fn test_test_drive_commands() {
        let content = "triggers:\n  keywords: [spreadsheet]\nallowed-tools: Read Bash\n";
        let drive = extract_test_drive(content, "xlsx");
        assert_eq!(drive.triggers, vec!["spreadsheet"]);
        assert_eq!(drive.allowed_tools, vec!["Read", "Bash"]);
        assert_eq!(
            drive.commands,
            vec![
                "claude -p \"spreadsheet\"".to_string(),
                "claude --allowedTools \"Read,Bash\" -p \"Use the xlsx skill\"".to_string(),
            ]
        );
    }
}
