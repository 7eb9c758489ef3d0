//! Pauta CLI Application
//!
//! Command-line interface for the pauta content-planning tool: a kanban
//! board of idea cards, a publication calendar and a week-suggestion
//! scheduler over the planning store.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pauta_core::{params::ListCards, Hydration, StoreBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planning store")?;

    let renderer = TerminalRenderer::new(!no_color);

    // One-shot load before any command runs
    if store.hydrate().await == Hydration::Degraded {
        renderer.render(
            "**Warning:** could not load saved data; starting from an empty working set. \
             Saving now may overwrite previously saved content.\n",
        )?;
    }

    info!("Pauta started");

    match command {
        Some(Card { command }) => Cli::new(store, renderer).handle_card_command(command).await,
        Some(Post { command }) => Cli::new(store, renderer).handle_post_command(command).await,
        Some(Week { command }) => Cli::new(store, renderer).handle_week_command(command).await,
        Some(Trash { command }) => {
            Cli::new(store, renderer)
                .handle_trash_command(command)
                .await
        }
        None => {
            Cli::new(store, renderer)
                .list_cards(ListCards::default())
                .await
        }
    }
}
