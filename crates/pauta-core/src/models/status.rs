//! Status, format and channel enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of idea-card statuses.
///
/// The order is the card's production pipeline. Advances are caller-driven;
/// the only automatic transition is that scheduling a card onto the calendar
/// forces it to [`CardStatus::Scheduled`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CardStatus {
    /// Raw idea, nothing produced yet
    #[default]
    #[serde(rename = "Ideia")]
    Idea,

    /// Script/copy written
    #[serde(rename = "Roteirizado")]
    Scripted,

    /// Asset produced, waiting for a slot
    #[serde(rename = "Criado")]
    Created,

    /// Placed on the calendar
    #[serde(rename = "Agendado")]
    Scheduled,

    /// Confirmed as published
    #[serde(rename = "Publicado")]
    Published,
}

impl FromStr for CardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ideia" | "idea" => Ok(CardStatus::Idea),
            "roteirizado" | "scripted" => Ok(CardStatus::Scripted),
            "criado" | "created" => Ok(CardStatus::Created),
            "agendado" | "scheduled" => Ok(CardStatus::Scheduled),
            "publicado" | "published" => Ok(CardStatus::Published),
            _ => Err(format!("Invalid card status: {s}")),
        }
    }
}

impl CardStatus {
    /// Contract string representation, as persisted and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Idea => "Ideia",
            CardStatus::Scripted => "Roteirizado",
            CardStatus::Created => "Criado",
            CardStatus::Scheduled => "Agendado",
            CardStatus::Published => "Publicado",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            CardStatus::Idea => "○ Ideia",
            CardStatus::Scripted => "✎ Roteirizado",
            CardStatus::Created => "◆ Criado",
            CardStatus::Scheduled => "➤ Agendado",
            CardStatus::Published => "✓ Publicado",
        }
    }

    /// Whether the card still counts as unproduced for the week heuristic's
    /// preferred candidate pool (Ideia or Roteirizado).
    pub fn is_backlog(&self) -> bool {
        matches!(self, CardStatus::Idea | CardStatus::Scripted)
    }
}

/// Type-safe enumeration of content formats (the `camadas.formato` layer).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Format {
    #[serde(rename = "Carrossel")]
    Carousel,

    #[serde(rename = "Reels")]
    Reels,

    #[serde(rename = "Print")]
    Print,

    #[serde(rename = "Imagem Unica")]
    SingleImage,

    #[serde(rename = "Story")]
    Story,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carrossel" | "carousel" => Ok(Format::Carousel),
            "reels" => Ok(Format::Reels),
            "print" => Ok(Format::Print),
            "imagem unica" | "imagem-unica" | "single-image" | "image" => Ok(Format::SingleImage),
            "story" => Ok(Format::Story),
            _ => Err(format!("Invalid format: {s}")),
        }
    }
}

impl Format {
    /// Contract string representation, as persisted and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Carousel => "Carrossel",
            Format::Reels => "Reels",
            Format::Print => "Print",
            Format::SingleImage => "Imagem Unica",
            Format::Story => "Story",
        }
    }
}

/// Type-safe enumeration of publication channels for calendar posts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    #[serde(rename = "Feed")]
    Feed,

    #[serde(rename = "Reels")]
    Reels,

    #[serde(rename = "Story")]
    Story,
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feed" => Ok(Channel::Feed),
            "reels" => Ok(Channel::Reels),
            "story" => Ok(Channel::Story),
            _ => Err(format!("Invalid channel: {s}")),
        }
    }
}

impl Channel {
    /// Contract string representation, as persisted and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Feed => "Feed",
            Channel::Reels => "Reels",
            Channel::Story => "Story",
        }
    }

    /// Infer the channel for a post auto-scheduled from a card.
    ///
    /// Reels-format cards go to Reels, Story-format cards to Story,
    /// everything else (including cards with no format) to Feed.
    pub fn infer(format: Option<Format>) -> Self {
        match format {
            Some(Format::Reels) => Channel::Reels,
            Some(Format::Story) => Channel::Story,
            _ => Channel::Feed,
        }
    }
}
