//! `ideabox status` command.
//!
//! Displays idea statistics and per-day activity for the last week.

use clap::Args;

use ideabox_config::IdeaboxConfig;
use ideabox_types::timestamp;

use crate::output;
use crate::shared;

/// Show idea statistics.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Database path (overrides `storage.path`).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the status command.
pub async fn execute(args: &StatusArgs, config: &IdeaboxConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(&args.db, config)?;
    let stats = repo
        .stats(&timestamp::today())
        .await
        .map_err(|e| anyhow::anyhow!("stats query: {e}"))?;
    let week = repo
        .daily_counts(&timestamp::last_days(7))
        .await
        .map_err(|e| anyhow::anyhow!("weekly counts: {e}"))?;

    println!("ideabox status");
    println!("{}", "─".repeat(40));
    println!("  Version    : {}", env!("CARGO_PKG_VERSION"));
    println!("  Database   : {}", shared::db_path(&args.db, config));
    println!();
    println!("Ideas");
    println!("{}", output::format_stats(&stats));
    println!();
    println!("Last 7 days");
    println!("{}", output::format_week(&week));

    Ok(())
}
