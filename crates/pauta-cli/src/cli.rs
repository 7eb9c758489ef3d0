//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API and the
//! parameter wrapper pattern: each command gets a clap-specific argument
//! struct that converts into the framework-agnostic core parameter types.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planning Store
//! ```
//!
//! Frontend-side validation lives here, not in the store: trimmed titles
//! must be non-empty, tags are deduplicated case-insensitively at input
//! time, and date arguments are parsed before they reach the core. The
//! store accepts whatever it is handed.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use jiff::{civil, tz::TimeZone, Timestamp};
use uuid::Uuid;

use pauta_core::{
    display::{Agenda, Board, CreateResult, DeleteResult, OperationStatus, Suggestions, TrashEntries, UpdateResult},
    models::{CardFilter, CardStatus, UpdateCardRequest, UpdatePostRequest},
    params::{CreateCard, CreatePost, ListCards, UpdateCard, UpdatePost},
    PlanningStore,
};

use crate::renderer::TerminalRenderer;

/// Parse a date argument: RFC 3339, or a civil date at local midnight.
fn parse_when(value: &str) -> Result<Timestamp> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let date = value
        .parse::<civil::Date>()
        .with_context(|| format!("'{value}' is neither an RFC 3339 timestamp nor a date"))?;
    let zoned = date
        .to_zoned(TimeZone::system())
        .with_context(|| format!("'{value}' has no valid local midnight"))?;
    Ok(zoned.timestamp())
}

/// Deduplicate tags case-insensitively, preserving first-seen order.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();
    for tag in tags {
        let key = tag.trim().to_lowercase();
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        result.push(tag.trim().to_string());
    }
    result
}

/// Reject empty or whitespace-only titles at the frontend boundary.
fn validated_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        bail!("title must not be empty");
    }
    Ok(trimmed.to_string())
}

/// Commands operating on idea cards
#[derive(Subcommand)]
pub enum CardCommands {
    /// Create a new idea card
    #[command(alias = "c")]
    Create(CreateCardArgs),
    /// Show the board, grouped by pillar
    #[command(alias = "ls")]
    List(ListCardsArgs),
    /// Show a single card and mark it as the open selection
    Show {
        /// Id of the card to show
        id: Uuid,
    },
    /// Update fields of a card
    Update(UpdateCardArgs),
    /// Duplicate a card as a fresh Ideia
    Duplicate {
        /// Id of the card to duplicate
        id: Uuid,
    },
    /// Move a card to the trash (restorable for 7 days)
    Delete {
        /// Id of the card to delete
        id: Uuid,
    },
    /// Move a card to another pillar column
    Move {
        /// Id of the card to move
        id: Uuid,
        /// Target pillar label; omit to clear the pillar
        pillar: Option<String>,
    },
    /// Set a card's pipeline status
    Status {
        /// Id of the card
        id: Uuid,
        /// New status (Ideia, Roteirizado, Criado, Agendado, Publicado)
        status: String,
    },
    /// Restore a card from the trash
    Restore {
        /// Id of the trashed card
        id: Uuid,
    },
}

/// Commands operating on calendar posts
#[derive(Subcommand)]
pub enum PostCommands {
    /// Create a calendar post
    #[command(alias = "c")]
    Create(CreatePostArgs),
    /// List the agenda in chronological order
    #[command(alias = "ls")]
    List,
    /// Update fields of a calendar post
    Update(UpdatePostArgs),
    /// Delete a calendar post (the card, if any, is untouched)
    Delete {
        /// Id of the post to delete
        id: Uuid,
    },
}

/// Commands for planning a week of content
#[derive(Subcommand)]
pub enum WeekCommands {
    /// Propose up to one card per pillar without changing any state
    Suggest(WeekArgs),
    /// Turn the current proposal into calendar posts
    Schedule(WeekArgs),
}

/// Commands operating on the trash
#[derive(Subcommand)]
pub enum TrashCommands {
    /// List trashed cards and their expiry dates
    #[command(alias = "ls")]
    List,
    /// Drop trash entries past their retention window
    Purge,
}

/// Create a new idea card
#[derive(Args)]
pub struct CreateCardArgs {
    /// Title of the card
    pub title: String,
    /// Optional free-text description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Pillar label for board grouping (any text)
    #[arg(short, long)]
    pub pillar: Option<String>,
    /// Tag, repeatable; duplicates are dropped case-insensitively
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Macro theme (camadas)
    #[arg(long)]
    pub theme: Option<String>,
    /// Format: Carrossel, Reels, Print, Imagem Unica or Story
    #[arg(long)]
    pub format: Option<String>,
    /// Objective (camadas, any text)
    #[arg(long)]
    pub objective: Option<String>,
    /// Opening hook text (camadas)
    #[arg(long)]
    pub hook: Option<String>,
    /// Call-to-action text (camadas)
    #[arg(long)]
    pub cta: Option<String>,
}

impl CreateCardArgs {
    fn into_params(self) -> Result<CreateCard> {
        Ok(CreateCard {
            title: validated_title(&self.title)?,
            description: self.description,
            pillar: self.pillar,
            tags: dedup_tags(self.tags),
            theme: self.theme,
            format: self.format,
            objective: self.objective,
            hook: self.hook,
            cta: self.cta,
        })
    }
}

/// Show the board, with optional filters
#[derive(Args)]
pub struct ListCardsArgs {
    /// Only cards whose title contains this text
    #[arg(long)]
    pub title: Option<String>,
    /// Only cards in this pillar
    #[arg(short, long)]
    pub pillar: Option<String>,
    /// Only cards with this status
    #[arg(short, long)]
    pub status: Option<String>,
    /// Only cards carrying this tag
    #[arg(long)]
    pub tag: Option<String>,
    /// Only cards not referenced by any calendar post
    #[arg(long)]
    pub unscheduled: bool,
}

impl From<ListCardsArgs> for ListCards {
    fn from(val: ListCardsArgs) -> Self {
        ListCards {
            title_contains: val.title,
            pillar: val.pillar,
            status: val.status,
            tag: val.tag,
            unscheduled: val.unscheduled,
        }
    }
}

/// Update fields of a card
#[derive(Args)]
pub struct UpdateCardArgs {
    /// Id of the card to update
    pub id: Uuid,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// New pillar label
    #[arg(short, long)]
    pub pillar: Option<String>,
    /// New status (Ideia, Roteirizado, Criado, Agendado, Publicado)
    #[arg(short, long)]
    pub status: Option<String>,
    /// Replacement tag, repeatable; omit to keep the current tags
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// New macro theme (camadas)
    #[arg(long)]
    pub theme: Option<String>,
    /// New format (camadas)
    #[arg(long)]
    pub format: Option<String>,
    /// New objective (camadas)
    #[arg(long)]
    pub objective: Option<String>,
    /// New hook text (camadas)
    #[arg(long)]
    pub hook: Option<String>,
    /// New call-to-action text (camadas)
    #[arg(long)]
    pub cta: Option<String>,
}

impl UpdateCardArgs {
    fn into_params(self) -> Result<UpdateCard> {
        let title = self.title.as_deref().map(validated_title).transpose()?;
        let tags = if self.tags.is_empty() {
            None
        } else {
            Some(dedup_tags(self.tags))
        };

        Ok(UpdateCard {
            id: self.id,
            title,
            description: self.description,
            pillar: self.pillar,
            status: self.status,
            tags,
            theme: self.theme,
            format: self.format,
            objective: self.objective,
            hook: self.hook,
            cta: self.cta,
        })
    }
}

/// Create a calendar post
#[derive(Args)]
pub struct CreatePostArgs {
    /// Title of the publication slot
    pub title: String,
    /// Publication start (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub start: String,
    /// Publication end; one day after the start when omitted
    #[arg(long)]
    pub end: Option<String>,
    /// Source card id; the card is marked Agendado
    #[arg(long = "card")]
    pub idea_card_id: Option<Uuid>,
    /// Channel: Feed, Reels or Story; inferred from the card when omitted
    #[arg(short, long)]
    pub channel: Option<String>,
    /// Free-text notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl CreatePostArgs {
    fn into_params(self) -> Result<CreatePost> {
        Ok(CreatePost {
            title: validated_title(&self.title)?,
            idea_card_id: self.idea_card_id,
            starts_at: parse_when(&self.start)?,
            ends_at: self.end.as_deref().map(parse_when).transpose()?,
            channel: self.channel,
            notes: self.notes,
        })
    }
}

/// Update fields of a calendar post
#[derive(Args)]
pub struct UpdatePostArgs {
    /// Id of the post to update
    pub id: Uuid,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New start (RFC 3339 or YYYY-MM-DD); regenerates the default end
    /// unless --end is also given
    #[arg(long)]
    pub start: Option<String>,
    /// New end (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
    /// New channel: Feed, Reels or Story
    #[arg(short, long)]
    pub channel: Option<String>,
    /// New notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl UpdatePostArgs {
    fn into_params(self) -> Result<UpdatePost> {
        let title = self.title.as_deref().map(validated_title).transpose()?;

        Ok(UpdatePost {
            id: self.id,
            title,
            starts_at: self.start.as_deref().map(parse_when).transpose()?,
            ends_at: self.end.as_deref().map(parse_when).transpose()?,
            channel: self.channel,
            notes: self.notes,
        })
    }
}

/// Options shared by the week suggestion and scheduling commands
#[derive(Args)]
pub struct WeekArgs {
    /// First publication date of the week (RFC 3339 or YYYY-MM-DD);
    /// now when omitted
    #[arg(long)]
    pub start: Option<String>,
    /// Also pick one Construcao-pillar card
    #[arg(long)]
    pub build: bool,
}

/// Command handler binding the planning store to the terminal renderer.
pub struct Cli {
    store: PlanningStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlanningStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Handle card subcommands, flushing pending saves before exit.
    pub async fn handle_card_command(self, command: CardCommands) -> Result<()> {
        let outcome = self.run_card_command(command).await;
        self.store.close().await;
        outcome
    }

    /// Handle post subcommands, flushing pending saves before exit.
    pub async fn handle_post_command(self, command: PostCommands) -> Result<()> {
        let outcome = self.run_post_command(command).await;
        self.store.close().await;
        outcome
    }

    /// Handle week subcommands, flushing pending saves before exit.
    pub async fn handle_week_command(self, command: WeekCommands) -> Result<()> {
        let outcome = self.run_week_command(command).await;
        self.store.close().await;
        outcome
    }

    /// Handle trash subcommands, flushing pending saves before exit.
    pub async fn handle_trash_command(self, command: TrashCommands) -> Result<()> {
        let outcome = self.run_trash_command(command).await;
        self.store.close().await;
        outcome
    }

    /// Default command: render the full board.
    pub async fn list_cards(self, params: ListCards) -> Result<()> {
        let outcome = self.render_board(params);
        self.store.close().await;
        outcome
    }

    async fn run_card_command(&self, command: CardCommands) -> Result<()> {
        match command {
            CardCommands::Create(args) => {
                let params = args.into_params()?;
                let card = self.store.add_card(&params)?;
                self.renderer.render(&CreateResult::new(card).to_string())
            }
            CardCommands::List(args) => self.render_board(args.into()),
            CardCommands::Show { id } => {
                self.store.select_card(id);
                let state = self.store.current();
                match state.find_card(id) {
                    Some(card) => self.renderer.render(&card.to_string()),
                    None => self
                        .renderer
                        .render(&OperationStatus::not_found("Card", id).to_string()),
                }
            }
            CardCommands::Update(args) => {
                let params = args.into_params()?;
                let id = params.id;
                let request = UpdateCardRequest::try_from(params)?;
                match self.store.update_card(id, &request) {
                    Some((card, changes)) => self
                        .renderer
                        .render(&UpdateResult::with_changes(card, changes).to_string()),
                    None => self
                        .renderer
                        .render(&OperationStatus::not_found("Card", id).to_string()),
                }
            }
            CardCommands::Duplicate { id } => match self.store.duplicate_card(id) {
                Some(copy) => self.renderer.render(&CreateResult::new(copy).to_string()),
                None => self
                    .renderer
                    .render(&OperationStatus::not_found("Card", id).to_string()),
            },
            CardCommands::Delete { id } => match self.store.delete_card(id) {
                Some(entry) => self.renderer.render(&DeleteResult::new(entry).to_string()),
                None => self
                    .renderer
                    .render(&OperationStatus::not_found("Card", id).to_string()),
            },
            CardCommands::Move { id, pillar } => {
                match self.store.move_card_pillar(id, pillar.clone()) {
                    Some(card) => {
                        let target = pillar.unwrap_or_else(|| "no pillar".to_string());
                        self.renderer.render(
                            &OperationStatus::success(format!(
                                "Moved '{}' to {target}",
                                card.title
                            ))
                            .to_string(),
                        )
                    }
                    None => self
                        .renderer
                        .render(&OperationStatus::not_found("Card", id).to_string()),
                }
            }
            CardCommands::Status { id, status } => {
                let status = status
                    .parse::<CardStatus>()
                    .map_err(|reason| anyhow::anyhow!(reason))?;
                match self.store.mark_card_status(id, status) {
                    Some(card) => self.renderer.render(
                        &OperationStatus::success(format!(
                            "Marked '{}' as {}",
                            card.title,
                            status.as_str()
                        ))
                        .to_string(),
                    ),
                    None => self
                        .renderer
                        .render(&OperationStatus::not_found("Card", id).to_string()),
                }
            }
            CardCommands::Restore { id } => match self.store.restore_card(id) {
                Some(card) => self.renderer.render(
                    &OperationStatus::success(format!("Restored '{}' from trash", card.title))
                        .to_string(),
                ),
                None => self
                    .renderer
                    .render(&OperationStatus::not_found("Trashed card", id).to_string()),
            },
        }
    }

    async fn run_post_command(&self, command: PostCommands) -> Result<()> {
        match command {
            PostCommands::Create(args) => {
                let params = args.into_params()?;
                let post = self.store.add_calendar_post(&params)?;
                self.renderer.render(&CreateResult::new(post).to_string())
            }
            PostCommands::List => {
                let agenda = Agenda(self.store.agenda());
                self.renderer
                    .render(&format!("# Agenda\n\n{agenda}"))
            }
            PostCommands::Update(args) => {
                let params = args.into_params()?;
                let id = params.id;
                let request = UpdatePostRequest::try_from(params)?;
                match self.store.update_calendar_post(id, &request) {
                    Some(post) => self.renderer.render(&UpdateResult::new(post).to_string()),
                    None => self
                        .renderer
                        .render(&OperationStatus::not_found("Calendar post", id).to_string()),
                }
            }
            PostCommands::Delete { id } => {
                // Get-before-delete so the confirmation can name the post
                let post = self.store.current().find_post(id).cloned();
                match post {
                    Some(post) if self.store.delete_calendar_post(id) => {
                        self.renderer.render(&DeleteResult::new(post).to_string())
                    }
                    _ => self
                        .renderer
                        .render(&OperationStatus::not_found("Calendar post", id).to_string()),
                }
            }
        }
    }

    async fn run_week_command(&self, command: WeekCommands) -> Result<()> {
        match command {
            WeekCommands::Suggest(args) => {
                let suggestions = Suggestions(self.store.generate_week_suggestions(args.build));
                self.renderer
                    .render(&format!("# Week Suggestions\n\n{suggestions}"))
            }
            WeekCommands::Schedule(args) => {
                let start = match args.start.as_deref() {
                    Some(value) => parse_when(value)?,
                    None => Timestamp::now(),
                };
                let posts = self.store.schedule_week_suggestions(start, args.build);
                if posts.is_empty() {
                    return self.renderer.render(
                        "No suggestions: every matching card is already scheduled.\n",
                    );
                }
                let agenda = Agenda(posts);
                self.renderer.render(&format!(
                    "Scheduled {} post(s):\n\n{agenda}",
                    agenda.len()
                ))
            }
        }
    }

    async fn run_trash_command(&self, command: TrashCommands) -> Result<()> {
        match command {
            TrashCommands::List => {
                let entries = TrashEntries(self.store.current().trashed);
                self.renderer.render(&format!("# Trash\n\n{entries}"))
            }
            TrashCommands::Purge => {
                let purged = self.store.purge_expired_trash(Timestamp::now());
                self.renderer.render(
                    &OperationStatus::success(format!("Purged {purged} expired trash entr{}",
                        if purged == 1 { "y" } else { "ies" }))
                    .to_string(),
                )
            }
        }
    }

    fn render_board(&self, params: ListCards) -> Result<()> {
        let filter = CardFilter::try_from(&params)?;
        let board = Board(self.store.cards_filtered(&filter));
        self.renderer.render(&format!("# Board\n\n{board}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_tags_is_case_insensitive() {
        let tags = vec![
            "Lancamento".to_string(),
            "lancamento".to_string(),
            "  LANCAMENTO ".to_string(),
            "bastidores".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            dedup_tags(tags),
            vec!["Lancamento".to_string(), "bastidores".to_string()]
        );
    }

    #[test]
    fn test_validated_title_rejects_blank() {
        assert!(validated_title("   ").is_err());
        assert_eq!(validated_title(" Pauta ").unwrap(), "Pauta");
    }

    #[test]
    fn test_parse_when_accepts_civil_date() {
        assert!(parse_when("2026-03-01").is_ok());
        assert!(parse_when("2026-03-01T12:30:00Z").is_ok());
        assert!(parse_when("not a date").is_err());
    }
}
