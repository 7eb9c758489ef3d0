//! Core library for the pauta content-planning application.
//!
//! This crate provides the planning store that holds idea cards and calendar
//! posts in memory, the week-suggestion heuristic that proposes one card per
//! content pillar, and the persistence boundary the store syncs through.
//!
//! # Design
//!
//! - **Observable state**: the store keeps its state in a watch channel;
//!   every mutation publishes exactly one complete state to subscribers.
//! - **Fire-and-forget persistence**: mutations queue a whole-working-set
//!   snapshot save; a background task coalesces bursts and never blocks or
//!   rolls back a local edit on sync failure.
//! - **Permissive core**: operations on missing ids are silent no-ops and
//!   input validation (empty titles, tag dedup) belongs to frontends; the
//!   store assumes it is handed valid data.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pauta_core::{backend::MemoryBackend, params::CreateCard, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a store instance over an injected backend
//! let store = StoreBuilder::new()
//!     .with_backend(Arc::new(MemoryBackend::new()))
//!     .build()
//!     .await?;
//!
//! // One-shot load of the persisted working set
//! store.hydrate().await;
//!
//! // Create a card and ask for a week of content
//! let card = store.add_card(&CreateCard {
//!     title: "Bastidores do estudio".to_string(),
//!     pillar: Some("Construcao".to_string()),
//!     ..Default::default()
//! })?;
//! println!("Created card: {}", card.title);
//!
//! let suggestions = store.generate_week_suggestions(true);
//! println!("{} suggestion(s)", suggestions.len());
//!
//! // Drain pending saves before dropping the store
//! store.close().await;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use backend::{MemoryBackend, SqliteBackend, StateBackend, StateSnapshot};
pub use display::{
    Agenda, Board, CreateResult, DeleteResult, LocalDate, LocalDateTime, OperationStatus,
    Suggestions, TrashEntries, UpdateResult,
};
pub use error::{Result, StoreError};
pub use models::{
    CalendarPost, CardFilter, CardStatus, Channel, Format, IdeaCard, Layers, LayersPatch,
    TrashedCard, UpdateCardRequest, UpdatePostRequest,
};
pub use store::week::suggest_week;
pub use store::{Hydration, PlanState, PlanningStore, Selection, StoreBuilder};
