use crate::config::Config;
use crate::http::{router, AppState};
use agentdeck_content::{load_into, ContentSource};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// Catalog server - serves the catalog while the content loads in the background
pub struct GatewayService {
    config: Config,
}

impl GatewayService {
    /// Create a new gateway service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the catalog server until Ctrl+C
    pub async fn run(self) -> Result<()> {
        info!("Starting AgentDeck server");

        let content = agentdeck_content::global();

        // One-time content load; lookups answer "Loading..." until it lands
        let source = ContentSource::parse(&self.config.content.source);
        tokio::spawn(async move {
            load_into(agentdeck_content::global(), &source).await;
        });

        let app = router(AppState { content });

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Listening on http://{}", addr);

        // Setup signal handler for graceful shutdown
        let shutdown = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to install Ctrl+C handler: {}", e);
            }
            info!("Received shutdown signal");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")?;

        info!("AgentDeck server stopped");
        Ok(())
    }
}
