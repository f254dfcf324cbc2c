//! `ideabox list` command.

use clap::Args;

use ideabox_config::IdeaboxConfig;

use crate::output;
use crate::shared;

/// List stored ideas, newest first.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Database path (overrides `storage.path`).
    #[arg(long)]
    pub db: Option<String>,
    /// Print the raw JSON array instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the list command.
pub async fn execute(args: &ListArgs, config: &IdeaboxConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(&args.db, config)?;
    let ideas = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("list ideas: {e}"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ideas)?);
        return Ok(());
    }
    if ideas.is_empty() {
        println!("No ideas yet.");
        return Ok(());
    }
    for idea in &ideas {
        println!("{}", output::format_idea(idea));
    }
    Ok(())
}
