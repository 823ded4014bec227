use agentdeck_logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ContentConfig {
    /// Path or http(s) URL of the JSON content bundle
    pub source: String,
    /// Where `sync` looks for `<id>.md` agent documents
    pub agents_dir: PathBuf,
    /// Where `sync` looks for `<id>/SKILL.md` skill folders
    pub skills_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: "public/content.json".to_string(),
            agents_dir: PathBuf::from(".claude/agents"),
            skills_dir: PathBuf::from(".claude/skills"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.agentdeck/agentdeck.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".agentdeck").join("agentdeck.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<Option<PathBuf>> {
        let Some(config_path) = Self::global_config_path() else {
            return Ok(None);
        };

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
                eprintln!("Created config directory: {}", config_dir.display());
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, toml::to_string_pretty(&Config::default())?)?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(Some(config_path))
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.agentdeck/agentdeck.toml (auto-created if missing)
    /// 2. Local override: ./agentdeck.toml (workspace, optional)
    /// 3. Explicit `--config` file (required when given)
    /// 4. Environment variables (highest priority)
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder();

        // Layer 1: Global config
        if let Some(global_config_path) = Self::ensure_global_config()? {
            config_builder = config_builder.add_source(config::File::from(global_config_path));
        }

        // Layer 2: Local workspace config (optional override)
        config_builder =
            config_builder.add_source(config::File::with_name("agentdeck").required(false));

        // Layer 3: Explicit file
        if let Some(path) = explicit {
            config_builder = config_builder.add_source(config::File::from(path.to_path_buf()));
        }

        // Layer 4: Environment variables with AGENTDECK__ prefix
        config_builder = config_builder
            .add_source(config::Environment::with_prefix("AGENTDECK").separator("__"));

        // Layer 5: Convenience env var overrides (highest priority)
        if let Ok(source) = env::var("AGENTDECK_CONTENT") {
            config_builder = config_builder.set_override("content.source", source)?;
        }

        if let Ok(port) = env::var("AGENTDECK_PORT") {
            config_builder = config_builder.set_override("server.port", port)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load from explicit files only, without global, env or `.env` layers
    #[cfg(test)]
    pub fn from_files(files: &[&Path]) -> anyhow::Result<Self> {
        let mut config_builder = config::Config::builder();
        for path in files {
            config_builder = config_builder.add_source(config::File::from(path.to_path_buf()));
        }
        Ok(config_builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.content.source, "public/content.json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("agentdeck.toml");
        fs::write(
            &path,
            "[server]\nport = 9000\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::from_files(&[&path]).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.content.agents_dir, PathBuf::from(".claude/agents"));
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, toml::to_string_pretty(&Config::default()).unwrap()).unwrap();
        fs::write(&local, "[content]\nsource = \"https://example.com/content.json\"\n").unwrap();

        let config = Config::from_files(&[&global, &local]).unwrap();
        assert_eq!(config.content.source, "https://example.com/content.json");
        assert_eq!(config.server.port, 8080);
    }
}
