//! Persistence boundary for the planning store.
//!
//! The store talks to exactly two collaborator operations, both async and
//! both whole-working-set: load everything, save everything. The trait keeps
//! that boundary opaque so the store never knows whether state lives in a
//! local SQLite file, a remote endpoint or a test double.
//!
//! Seeding a first-ever working set is a collaborator concern; the shipped
//! [`SqliteBackend`] returns an empty snapshot for a fresh database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{CalendarPost, IdeaCard, TrashedCard},
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// The full persisted working set of one user.
///
/// Saves always carry all three collections, trash included, even though the
/// store's mutations never edit trash directly except through card deletion
/// and restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StateSnapshot {
    #[serde(default)]
    pub cards: Vec<IdeaCard>,

    #[serde(rename = "calendarPosts", default)]
    pub posts: Vec<CalendarPost>,

    #[serde(rename = "trashedCards", default)]
    pub trashed: Vec<TrashedCard>,
}

/// Data persistence contract for the planning store.
#[async_trait]
pub trait StateBackend: Send + Sync {
    /// Fetches the full working set.
    async fn load_state(&self) -> Result<StateSnapshot>;

    /// Atomically replaces the persisted working set with `snapshot`.
    async fn save_state(&self, snapshot: &StateSnapshot) -> Result<()>;
}
