//! Parameter structures for pauta operations
//!
//! Shared parameter structures usable across different interfaces (CLI,
//! future HTTP surface, ...) without framework-specific derives. Interface
//! layers define wrapper structs with their own derives (clap args, ...) and
//! convert into these via `From`/`Into`; enum-valued fields travel as
//! strings here and are parsed by `validate()` into the typed models, so
//! each interface reports parse failures through the same
//! [`StoreError::InvalidInput`](crate::StoreError) path.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::Result,
    models::{CardStatus, Channel, Format},
    StoreError,
};

/// Parameters for creating a new idea card.
///
/// The store itself accepts any title, including an empty one; trimming and
/// non-empty validation belong to the frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCard {
    /// Display title of the card
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional pillar label (open string)
    pub pillar: Option<String>,
    /// Free-text tags, already deduplicated by the frontend
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional macro theme (camadas)
    pub theme: Option<String>,
    /// Optional format name, parsed through [`Format`]
    pub format: Option<String>,
    /// Optional objective (camadas, open string)
    pub objective: Option<String>,
    /// Optional hook text (camadas)
    pub hook: Option<String>,
    /// Optional call-to-action text (camadas)
    pub cta: Option<String>,
}

impl CreateCard {
    /// Parse the format string, if any.
    pub fn validate(&self) -> Result<Option<Format>> {
        self.format
            .as_deref()
            .map(str::parse::<Format>)
            .transpose()
            .map_err(|reason| StoreError::invalid_input("format").with_reason(reason))
    }
}

/// Parameters for updating an existing card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCard {
    /// Id of the card to update
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub pillar: Option<String>,
    /// Optional status name, parsed through [`CardStatus`]
    pub status: Option<String>,
    /// Replacement tag list
    pub tags: Option<Vec<String>>,
    pub theme: Option<String>,
    /// Optional format name, parsed through [`Format`]
    pub format: Option<String>,
    pub objective: Option<String>,
    pub hook: Option<String>,
    pub cta: Option<String>,
}

impl UpdateCard {
    /// Parse the status and format strings, if any.
    pub fn validate(&self) -> Result<(Option<CardStatus>, Option<Format>)> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<CardStatus>)
            .transpose()
            .map_err(|reason| StoreError::invalid_input("status").with_reason(reason))?;

        let format = self
            .format
            .as_deref()
            .map(str::parse::<Format>)
            .transpose()
            .map_err(|reason| StoreError::invalid_input("format").with_reason(reason))?;

        Ok((status, format))
    }
}

/// Parameters for listing cards on the board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCards {
    /// Filter by title substring
    pub title_contains: Option<String>,
    /// Filter by pillar label
    pub pillar: Option<String>,
    /// Filter by status name, parsed through [`CardStatus`]
    pub status: Option<String>,
    /// Filter by tag
    pub tag: Option<String>,
    /// Only cards without a calendar post
    #[serde(default)]
    pub unscheduled: bool,
}

/// Parameters for creating a calendar post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Display title of the slot
    pub title: String,
    /// Optional source card; when present the card is marked Agendado in
    /// the same state transition
    pub idea_card_id: Option<Uuid>,
    /// Publication start
    pub starts_at: Timestamp,
    /// Publication end; one day after the start when omitted
    pub ends_at: Option<Timestamp>,
    /// Optional channel name, parsed through [`Channel`]; when omitted the
    /// channel is inferred from the source card's format
    pub channel: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl CreatePost {
    /// Parse the channel string, if any.
    pub fn validate(&self) -> Result<Option<Channel>> {
        self.channel
            .as_deref()
            .map(str::parse::<Channel>)
            .transpose()
            .map_err(|reason| StoreError::invalid_input("channel").with_reason(reason))
    }
}

/// Parameters for updating a calendar post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    /// Id of the post to update
    pub id: Uuid,
    pub title: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    /// Optional channel name, parsed through [`Channel`]
    pub channel: Option<String>,
    pub notes: Option<String>,
}

impl UpdatePost {
    /// Parse the channel string, if any.
    pub fn validate(&self) -> Result<Option<Channel>> {
        self.channel
            .as_deref()
            .map(str::parse::<Channel>)
            .transpose()
            .map_err(|reason| StoreError::invalid_input("channel").with_reason(reason))
    }
}
