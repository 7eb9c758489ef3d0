//! Filter types for board queries over cards.

use std::collections::HashSet;

use uuid::Uuid;

use super::{pillars, CardStatus, IdeaCard};

/// Filter options for listing cards.
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    /// Filter by card title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Filter by pillar label (trimmed, case-insensitive match)
    pub pillar: Option<String>,

    /// Filter by pipeline status
    pub status: Option<CardStatus>,

    /// Filter by tag (case-insensitive match)
    pub tag: Option<String>,

    /// Only cards not referenced by any calendar post
    pub unscheduled: bool,
}

impl CardFilter {
    /// Whether `card` passes this filter. `scheduled` is the set of card ids
    /// currently referenced by calendar posts.
    pub fn matches(&self, card: &IdeaCard, scheduled: &HashSet<Uuid>) -> bool {
        if let Some(ref needle) = self.title_contains {
            if !card
                .title
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
            {
                return false;
            }
        }

        if let Some(ref pillar) = self.pillar {
            if !pillars::field_matches(card.pillar.as_deref(), pillar) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if card.status != status {
                return false;
            }
        }

        if let Some(ref tag) = self.tag {
            if !card.tags.iter().any(|t| pillars::matches(t, tag)) {
                return false;
            }
        }

        if self.unscheduled && scheduled.contains(&card.id) {
            return false;
        }

        true
    }
}

impl TryFrom<&crate::params::ListCards> for CardFilter {
    type Error = crate::StoreError;

    /// Convert ListCards parameters to a CardFilter, parsing the status
    /// string through [`CardStatus::from_str`].
    fn try_from(params: &crate::params::ListCards) -> Result<Self, Self::Error> {
        let status = params
            .status
            .as_deref()
            .map(str::parse::<CardStatus>)
            .transpose()
            .map_err(|reason| crate::StoreError::invalid_input("status").with_reason(reason))?;

        Ok(Self {
            title_contains: params.title_contains.clone(),
            pillar: params.pillar.clone(),
            status,
            tag: params.tag.clone(),
            unscheduled: params.unscheduled,
        })
    }
}
