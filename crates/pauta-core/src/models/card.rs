//! Idea-card model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CardStatus, Format};

/// A unit of content being planned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdeaCard {
    /// Unique identifier, assigned at creation, immutable
    pub id: Uuid,

    /// Display title
    #[serde(rename = "titulo")]
    pub title: String,

    /// Optional free-text description
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Open-string classification label used for board grouping
    #[serde(rename = "pilar", skip_serializing_if = "Option::is_none")]
    pub pillar: Option<String>,

    /// Nested enrichment fields
    #[serde(rename = "camadas", default)]
    pub layers: Layers,

    /// Position in the production pipeline
    #[serde(default)]
    pub status: CardStatus,

    /// Free-text labels, insertion order preserved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Timestamp when the card was created (UTC)
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,

    /// Timestamp when the card was last modified (UTC), refreshed on every
    /// mutation
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// The all-optional enrichment block of a card (`camadas`).
///
/// Updates merge this block key-by-key: a patch touching only the hook must
/// leave the cta, format and the rest untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Layers {
    /// Macro theme the card belongs to
    #[serde(rename = "tema", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Production format
    #[serde(rename = "formato", skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Open-string objective (awareness, conversion, ...)
    #[serde(rename = "objetivo", skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,

    /// Opening hook text
    #[serde(rename = "gancho", skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,

    /// Call-to-action text
    #[serde(rename = "cta", skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

impl IdeaCard {
    /// Creates a fresh card with a random id and identical created/updated
    /// timestamps. The store does not reject an empty title; that validation
    /// belongs to the frontend.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            pillar: None,
            layers: Layers::default(),
            status: CardStatus::Idea,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Clone this card as a duplicate: new id, " (Copia)" title suffix,
    /// status reset to Ideia, fresh timestamps. The original is untouched.
    pub fn duplicate(&self) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            title: format!("{} (Copia)", self.title),
            status: CardStatus::Idea,
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}
