//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with
//! consistent structure and graceful empty-collection handling.

use std::fmt;

use super::datetime::LocalDate;
use crate::models::{pillars, CalendarPost, IdeaCard, TrashedCard};

/// Kanban view of a card collection, grouped into pillar columns.
///
/// Required pillars come first in their fixed order, then any other labels
/// users typed (first-seen order), then cards without a pillar.
pub struct Board(pub Vec<IdeaCard>);

impl Board {
    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Column labels in display order. `None` stands for the no-pillar
    /// column.
    fn columns(&self) -> Vec<Option<String>> {
        let mut columns: Vec<Option<String>> = pillars::default_suggestions()
            .into_iter()
            .filter(|label| {
                self.0
                    .iter()
                    .any(|c| pillars::field_matches(c.pillar.as_deref(), label))
            })
            .map(Some)
            .collect();

        for card in &self.0 {
            match &card.pillar {
                Some(pillar) => {
                    let seen = columns
                        .iter()
                        .flatten()
                        .any(|label| pillars::matches(label, pillar));
                    if !seen {
                        columns.push(Some(pillar.clone()));
                    }
                }
                None => {
                    if !columns.contains(&None) {
                        columns.push(None);
                    }
                }
            }
        }
        columns
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No cards found.");
        }

        for column in self.columns() {
            match &column {
                Some(label) => writeln!(f, "## {label}")?,
                None => writeln!(f, "## Sem pilar")?,
            }
            writeln!(f)?;
            for card in self.0.iter().filter(|c| match &column {
                Some(label) => pillars::field_matches(c.pillar.as_deref(), label),
                None => c.pillar.is_none(),
            }) {
                writeln!(f, "- {} {} ({})", card.status.with_icon(), card.title, card.id)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Calendar posts as a chronological agenda listing.
pub struct Agenda(pub Vec<CalendarPost>);

impl Agenda {
    /// Check if the agenda is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of posts on the agenda.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Agenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No calendar posts found.");
        }

        for post in &self.0 {
            writeln!(
                f,
                "- {} [{}] {} ({})",
                LocalDate(&post.starts_at),
                post.channel,
                post.title,
                post.id
            )?;
        }
        Ok(())
    }
}

/// A week-suggestion proposal, in pillar order.
pub struct Suggestions(pub Vec<IdeaCard>);

impl Suggestions {
    /// Check if the proposal is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of suggested cards.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No suggestions: every matching card is already scheduled.");
        }

        for (index, card) in self.0.iter().enumerate() {
            let pillar = card.pillar.as_deref().unwrap_or("-");
            writeln!(f, "{}. [{pillar}] {} ({})", index + 1, card.title, card.id)?;
        }
        Ok(())
    }
}

/// Trash entries awaiting expiry.
pub struct TrashEntries(pub Vec<TrashedCard>);

impl TrashEntries {
    /// Check if the trash is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of trash entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TrashEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Trash is empty.");
        }

        for entry in &self.0 {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
