//! Command line interface

use crate::config::Config;
use crate::views::{self, AgentDetail, SkillDetail};
use agentdeck_content::{load_into, resolve_doc, ContentSource};
use agentdeck_skills::{preview, DocumentRegistry};
use agentdeck_types::{AgentCategory, DocumentKind, SkillCategory};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Width of the description column in list output
const DESCRIPTION_WIDTH: usize = 72;

#[derive(Debug, Parser)]
#[command(name = "agentdeck", version, about = "Browse the agent and skill catalog")]
pub struct Cli {
    /// Extra configuration file, layered over the global and local ones
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the catalog over HTTP
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Build the content bundle from agent and skill documents
    Sync {
        #[arg(long)]
        agents_dir: Option<PathBuf>,
        #[arg(long)]
        skills_dir: Option<PathBuf>,
        /// Also read ~/.claude/agents and ~/.claude/skills
        #[arg(long)]
        personal: bool,
        /// Output file (defaults to the configured content source)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List agents matching a query
    Agents {
        query: Option<String>,
        #[arg(long)]
        category: Option<AgentCategory>,
    },
    /// List skills matching a query
    Skills {
        query: Option<String>,
        #[arg(long)]
        category: Option<SkillCategory>,
    },
    /// Print an agent or skill detail record as JSON
    Show {
        /// agent or skill
        kind: DocumentKind,
        id: String,
    },
    /// Print a documentation page
    Docs { path: Option<String> },
}

/// Run every command except `serve`
pub async fn run(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Serve { .. } => Err(anyhow!("serve is handled by the gateway service")),
        Command::Sync {
            agents_dir,
            skills_dir,
            personal,
            out,
        } => sync(&config, agents_dir, skills_dir, personal, out),
        Command::Agents { query, category } => {
            for agent in views::list_agents(query.as_deref().unwrap_or(""), category) {
                println!(
                    "{:<20} {:<12} {}",
                    agent.record.id,
                    agent.record.category,
                    preview(agent.record.description, DESCRIPTION_WIDTH)
                );
            }
            Ok(())
        }
        Command::Skills { query, category } => {
            for skill in views::list_skills(query.as_deref().unwrap_or(""), category) {
                println!(
                    "{:<20} {:<15} {}",
                    skill.record.id,
                    skill.record.category,
                    preview(skill.record.description, DESCRIPTION_WIDTH)
                );
            }
            Ok(())
        }
        Command::Show { kind, id } => show(&config, kind, &id).await,
        Command::Docs { path } => {
            let page = resolve_doc(path.as_deref().unwrap_or(""));
            println!("{}", page.content);
            Ok(())
        }
    }
}

fn sync(
    config: &Config,
    agents_dir: Option<PathBuf>,
    skills_dir: Option<PathBuf>,
    personal: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let out = match out {
        Some(path) => path,
        None => match ContentSource::parse(&config.content.source) {
            ContentSource::File(path) => path,
            ContentSource::Url(url) => {
                return Err(anyhow!(
                    "Content source {} is a URL; pass --out to choose a file",
                    url
                ))
            }
        },
    };

    let mut registry = DocumentRegistry::new();
    if personal {
        registry = registry.with_personal_documents();
    }
    registry = registry
        .add_agents_directory(agents_dir.unwrap_or_else(|| config.content.agents_dir.clone()))
        .add_skills_directory(skills_dir.unwrap_or_else(|| config.content.skills_dir.clone()));

    registry.discover()?;
    print!("{}", registry.summary());

    let bundle = registry.into_bundle()?;
    let json = serde_json::to_string_pretty(&bundle)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }
    std::fs::write(&out, json).with_context(|| format!("Failed to write {:?}", out))?;

    info!("Wrote {} documents to {:?}", bundle.len(), out);
    Ok(())
}

async fn show(config: &Config, kind: DocumentKind, id: &str) -> Result<()> {
    let store = agentdeck_content::global();
    load_into(store, &ContentSource::parse(&config.content.source)).await;

    let json = match kind {
        DocumentKind::Agent => {
            let record = agentdeck_catalog::agent(id)
                .ok_or_else(|| anyhow!("Agent '{}' not found", id))?;
            serde_json::to_string_pretty(&AgentDetail::build(record, store))?
        }
        DocumentKind::Skill => {
            let record = agentdeck_catalog::skill(id)
                .ok_or_else(|| anyhow!("Skill '{}' not found", id))?;
            serde_json::to_string_pretty(&SkillDetail::build(record, store))?
        }
    };

    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_category() {
        let cli = Cli::parse_from(["agentdeck", "agents", "back", "--category", "expert"]);
        match cli.command {
            Command::Agents { query, category } => {
                assert_eq!(query.as_deref(), Some("back"));
                assert_eq!(category, Some(AgentCategory::Expert));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let result = Cli::try_parse_from(["agentdeck", "skills", "--category", "cooking"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_show_kind() {
        let cli = Cli::parse_from(["agentdeck", "--config", "x.toml", "show", "skill", "pdf"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(
            cli.command,
            Command::Show { kind: DocumentKind::Skill, ref id } if id == "pdf"
        ));
    }

    #[test]
    fn test_sync_writes_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let agents = dir.path().join("agents");
        std::fs::create_dir_all(&agents).unwrap();
        std::fs::write(agents.join("qa-engineer.md"), "# QA\n").unwrap();
        let out = dir.path().join("public").join("content.json");

        sync(
            &Config::default(),
            Some(agents),
            Some(dir.path().join("skills")),
            false,
            Some(out.clone()),
        )
        .unwrap();

        let written: agentdeck_types::ContentBundle =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(written.get(DocumentKind::Agent, "qa-engineer"), Some("# QA\n"));
        assert!(written.skills.is_empty());
    }
}
