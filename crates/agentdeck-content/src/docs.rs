//! Documentation pages
//!
//! A fixed route table from path suffix to embedded Markdown. Unknown paths
//! resolve to a "coming soon" page rather than an error.

use serde::Serialize;
use std::borrow::Cow;

/// One entry of the route table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DocRoute {
    /// Path suffix below `/docs/`, without surrounding slashes
    pub path: &'static str,
    /// Sidebar title
    pub title: &'static str,
    /// Markdown source
    #[serde(skip)]
    pub content: &'static str,
}

/// A resolved documentation page
#[derive(Debug, Clone, Serialize)]
pub struct DocPage {
    /// Normalized requested path
    pub path: String,
    /// Page title
    pub title: Cow<'static, str>,
    /// Markdown to render
    pub content: Cow<'static, str>,
    /// False for the coming-soon placeholder
    pub found: bool,
}

static ROUTES: &[DocRoute] = &[
    DocRoute {
        path: "",
        title: "Documentation",
        content: include_str!("../docs/index.md"),
    },
    DocRoute {
        path: "getting-started",
        title: "Getting Started",
        content: include_str!("../docs/getting-started.md"),
    },
    DocRoute {
        path: "guides/agents",
        title: "Writing Agents",
        content: include_str!("../docs/guides/agents.md"),
    },
    DocRoute {
        path: "guides/skills",
        title: "Writing Skills",
        content: include_str!("../docs/guides/skills.md"),
    },
    DocRoute {
        path: "guides/metadata",
        title: "Document Metadata",
        content: include_str!("../docs/guides/metadata.md"),
    },
    DocRoute {
        path: "reference/content-bundle",
        title: "Content Bundle",
        content: include_str!("../docs/reference/content-bundle.md"),
    },
    DocRoute {
        path: "reference/cli",
        title: "Command Line",
        content: include_str!("../docs/reference/cli.md"),
    },
];

/// All documentation routes, in sidebar order
pub fn routes() -> &'static [DocRoute] {
    ROUTES
}

/// Strip surrounding slashes and a leading `docs/` segment
fn normalize(path: &str) -> &str {
    let path = path.trim().trim_matches('/');
    path.strip_prefix("docs/")
        .or_else(|| (path == "docs").then_some(""))
        .unwrap_or(path)
        .trim_matches('/')
}

/// Resolve a path suffix to a page, falling back to a placeholder that
/// echoes the unresolved path.
pub fn resolve(path: &str) -> DocPage {
    let path = normalize(path);

    match ROUTES.iter().find(|route| route.path == path) {
        Some(route) => DocPage {
            path: path.to_string(),
            title: Cow::Borrowed(route.title),
            content: Cow::Borrowed(route.content),
            found: true,
        },
        None => DocPage {
            path: path.to_string(),
            title: Cow::Borrowed("Coming Soon"),
            content: Cow::Owned(format!(
                "# Coming Soon\n\nThe page `/docs/{}` is under construction. \
                 Check back later or pick another page from the sidebar.\n",
                path
            )),
            found: false,
        },
    }
}
