//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use draft_board::{
    cli::{Commands, DraftBoardCli},
    commands::{
        board::handle_board, draft::handle_draft, find_ids::handle_find_ids,
        project::handle_project, stats::handle_stats, CommandContext,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = DraftBoardCli::parse();

    let filter = EnvFilter::from_default_env().add_directive(app.global.log.parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = CommandContext::from_options(&app.global);

    match app.command {
        Commands::Project {
            rank,
            position,
            tier,
            json,
        } => handle_project(rank, position, tier, json)?,

        Commands::Board {
            source,
            output,
            json,
        } => handle_board(&ctx, &source, output.as_deref(), json)?,

        Commands::Stats {
            source,
            output,
            stats_season,
        } => handle_stats(&ctx, &source, output.as_deref(), stats_season).await?,

        Commands::FindIds {
            names,
            output,
            refresh,
        } => handle_find_ids(&ctx, &names, output.as_deref(), refresh).await?,

        Commands::Draft { cmd } => handle_draft(&ctx, &cmd)?,
    }

    Ok(())
}
