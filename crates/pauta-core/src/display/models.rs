//! Display implementations for domain models.
//!
//! All Display implementations produce markdown for rich terminal display,
//! with status icons and structured sections. Kept separate from the model
//! definitions so data structures stay free of presentation logic.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{CalendarPost, CardStatus, Channel, Format, IdeaCard, Layers, TrashedCard};

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Layers {
    fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.format.is_none()
            && self.objective.is_none()
            && self.hook.is_none()
            && self.cta.is_none()
    }
}

impl fmt::Display for IdeaCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Id: {}", self.id)?;
        if let Some(pillar) = &self.pillar {
            writeln!(f, "- Pilar: {pillar}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.layers.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Camadas")?;
            writeln!(f)?;
            if let Some(theme) = &self.layers.theme {
                writeln!(f, "- Tema: {theme}")?;
            }
            if let Some(format) = self.layers.format {
                writeln!(f, "- Formato: {format}")?;
            }
            if let Some(objective) = &self.layers.objective {
                writeln!(f, "- Objetivo: {objective}")?;
            }
            if let Some(hook) = &self.layers.hook {
                writeln!(f, "- Gancho: {hook}")?;
            }
            if let Some(cta) = &self.layers.cta {
                writeln!(f, "- CTA: {cta}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for CalendarPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} [{}]", self.title, self.channel)?;
        writeln!(f)?;
        writeln!(f, "- Id: {}", self.id)?;
        if let Some(card_id) = self.idea_card_id {
            writeln!(f, "- Card: {card_id}")?;
        }
        writeln!(f, "- Start: {}", LocalDateTime(&self.starts_at))?;
        writeln!(f, "- End: {}", LocalDateTime(&self.ends_at))?;
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TrashedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({}) with {} post(s), expires {}",
            self.card.title,
            self.card.id,
            self.posts.len(),
            LocalDate(&self.expires_at)
        )
    }
}
