//! Soft-delete records for removed cards.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CalendarPost, IdeaCard};

/// Retention window for trashed cards.
const RETENTION_DAYS: i64 = 7;

/// A removed card together with the calendar posts that referenced it.
///
/// Deleting a card is soft from the user's perspective: the active
/// collections drop it immediately, but the trash keeps it restorable
/// until `expires_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrashedCard {
    /// The removed card
    pub card: IdeaCard,

    /// Calendar posts that referenced the card at deletion time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub posts: Vec<CalendarPost>,

    #[serde(rename = "deletedAt")]
    pub deleted_at: Timestamp,

    #[serde(rename = "expiresAt")]
    pub expires_at: Timestamp,
}

impl TrashedCard {
    /// Wrap a card and its dependent posts, stamping the fixed 7-day expiry.
    pub fn new(card: IdeaCard, posts: Vec<CalendarPost>, deleted_at: Timestamp) -> Self {
        let expires_at = deleted_at
            .checked_add(SignedDuration::from_hours(24 * RETENTION_DAYS))
            .unwrap_or(deleted_at);
        Self {
            card,
            posts,
            deleted_at,
            expires_at,
        }
    }

    /// Whether this entry is past its retention window at `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }

    /// Id of the wrapped card.
    pub fn card_id(&self) -> Uuid {
        self.card.id
    }
}
