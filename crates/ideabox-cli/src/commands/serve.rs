//! `ideabox serve` command.
//!
//! Opens the idea database and serves the JSON API until Ctrl-C.

use clap::Args;

use ideabox_config::schema::ServerConfig;
use ideabox_config::IdeaboxConfig;
use ideabox_transport_http::HttpServer;

use crate::shared;

/// Start the HTTP API server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// TCP port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
    /// Database path (overrides `storage.path`).
    #[arg(long)]
    pub db: Option<String>,
}

/// Merges command-line overrides into the configured server section.
fn server_config(args: &ServeArgs, config: &IdeaboxConfig) -> ServerConfig {
    let mut server = config.server.clone();
    if let Some(ref host) = args.host {
        server.host = host.clone();
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    server
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &IdeaboxConfig) -> anyhow::Result<()> {
    let server_cfg = server_config(args, config);
    let addr = server_cfg
        .socket_addr()
        .map_err(|e| anyhow::anyhow!("invalid listen address {}: {e}", server_cfg.host))?;
    let repo = shared::open_repository(&args.db, config)?;
    tracing::info!(db = %shared::db_path(&args.db, config), "idea store ready");

    let server = HttpServer::new(repo, addr);
    tracing::info!(addr = %server.addr(), "starting HTTP server");
    tokio::select! {
        result = server.run() => {
            result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
