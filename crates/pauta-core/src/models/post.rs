//! Calendar-post model definition.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Channel;

/// A scheduled publication slot on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarPost {
    /// Unique identifier
    pub id: Uuid,

    /// Weak back-reference to the source card. A post can exist without a
    /// card (ad-hoc slot created directly on the calendar); when present,
    /// the store keeps it pointing at a live card via cascading deletes.
    #[serde(rename = "ideaCardId", skip_serializing_if = "Option::is_none")]
    pub idea_card_id: Option<Uuid>,

    /// Display title, copied from the card at scheduling time and not kept
    /// in sync afterward
    #[serde(rename = "titulo")]
    pub title: String,

    /// Publication start (UTC)
    #[serde(rename = "dataInicio")]
    pub starts_at: Timestamp,

    /// Publication end (UTC); defaults to one day after the start
    #[serde(rename = "dataFim")]
    pub ends_at: Timestamp,

    /// Publication surface
    #[serde(rename = "canal", default)]
    pub channel: Channel,

    /// Free-text notes, editable independently of the card
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The default end for a slot starting at `start`: one day later.
///
/// Saturates to `start` at the edge of the representable range.
pub fn default_end(start: Timestamp) -> Timestamp {
    start
        .checked_add(SignedDuration::from_hours(24))
        .unwrap_or(start)
}

impl CalendarPost {
    /// Creates a post with a random id. A missing end gets the one-day
    /// default relative to `starts_at`.
    pub fn new(
        title: impl Into<String>,
        starts_at: Timestamp,
        ends_at: Option<Timestamp>,
        channel: Channel,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            idea_card_id: None,
            title: title.into(),
            starts_at,
            ends_at: ends_at.unwrap_or_else(|| default_end(starts_at)),
            channel,
            notes: None,
        }
    }
}
