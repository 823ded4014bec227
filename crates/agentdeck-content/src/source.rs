//! Where the content bundle comes from, and the one-time load

use agentdeck_types::ContentBundle;
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info};

use crate::error::Result;
use crate::store::ContentStore;

/// Location of the JSON content bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A file on disk
    File(PathBuf),
    /// An `http://` or `https://` URL fetched with a single GET
    Url(String),
}

impl ContentSource {
    /// Interpret a configured location: URLs by scheme, anything else as a path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            ContentSource::Url(location.to_string())
        } else {
            ContentSource::File(PathBuf::from(location))
        }
    }

    /// Fetch and decode the bundle
    pub async fn fetch(&self) -> Result<ContentBundle> {
        match self {
            ContentSource::File(path) => {
                let text = tokio::fs::read_to_string(path).await?;
                Ok(serde_json::from_str(&text)?)
            }
            ContentSource::Url(url) => {
                let response = reqwest::get(url).await?.error_for_status()?;
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Url(url) => f.write_str(url),
        }
    }
}

/// Fetch the bundle once and install it in `store`.
///
/// On failure the error is logged and an empty bundle is installed, so
/// lookups report "Content not found" instead of waiting forever. There is
/// no retry. Returns whether the fetch succeeded.
pub async fn load_into(store: &ContentStore, source: &ContentSource) -> bool {
    info!("Loading content bundle from {}", source);

    match source.fetch().await {
        Ok(bundle) => {
            info!(
                "Loaded {} agent and {} skill documents from {}",
                bundle.agents.len(),
                bundle.skills.len(),
                source
            );
            store.populate(bundle);
            true
        }
        Err(e) => {
            error!("Failed to load content bundle from {}: {}", source, e);
            store.populate(ContentBundle::default());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            ContentSource::parse("https://example.com/content.json"),
            ContentSource::Url("https://example.com/content.json".to_string())
        );
        assert_eq!(
            ContentSource::parse(" public/content.json "),
            ContentSource::File(PathBuf::from("public/content.json"))
        );
    }
}
