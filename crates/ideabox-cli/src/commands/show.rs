//! `ideabox show` command.

use clap::Args;

use ideabox_config::IdeaboxConfig;
use ideabox_types::IdeaId;

use crate::output;
use crate::shared;

/// Print one idea with its full content.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Idea id.
    pub id: IdeaId,
    /// Database path (overrides `storage.path`).
    #[arg(long)]
    pub db: Option<String>,
    /// Print the idea as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the show command.
pub async fn execute(args: &ShowArgs, config: &IdeaboxConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(&args.db, config)?;
    let idea = repo
        .find_by_id(args.id)
        .await
        .map_err(|e| anyhow::anyhow!("find idea: {e}"))?
        .ok_or_else(|| anyhow::anyhow!("idea not found: {}", args.id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&idea)?);
    } else {
        println!("{}", output::format_detail(&idea));
    }
    Ok(())
}
