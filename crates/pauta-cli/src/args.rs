use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CardCommands, PostCommands, TrashCommands, WeekCommands};

/// Main command-line interface for the pauta content planner
///
/// Pauta organizes content ideas as cards on a pillar-grouped board,
/// schedules them onto a publication calendar and can propose a balanced
/// week of content (one card per pillar). State is kept locally and synced
/// as whole snapshots, so the tool stays responsive even when persistence
/// is slow or down.
#[derive(Parser)]
#[command(version, about, name = "pauta")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pauta/pauta.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the pauta CLI
///
/// The CLI is organized into four command categories:
/// - `card`: Operations on idea cards (create, board listing, status, ...)
/// - `post`: Operations on calendar posts
/// - `week`: Week-suggestion heuristic and batch scheduling
/// - `trash`: Soft-deleted cards awaiting expiry
#[derive(Subcommand)]
pub enum Commands {
    /// Manage idea cards
    #[command(alias = "c")]
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
    /// Manage calendar posts
    #[command(alias = "p")]
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Suggest and schedule a week of content
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Manage trashed cards
    #[command(alias = "t")]
    Trash {
        #[command(subcommand)]
        command: TrashCommands,
    },
}
