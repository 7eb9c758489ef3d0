//! Data models for idea cards, calendar posts and the trash bin.
//!
//! This module contains the core domain models of the pauta content planner.
//! Display implementations for these models live in [`crate::display::models`]
//! to keep data structures separate from presentation logic.
//!
//! Serialized field names follow the original product's wire contract
//! (Portuguese names such as `titulo`, `pilar`, `camadas`, `dataInicio`);
//! Rust field names stay idiomatic English via serde renames. Status, format
//! and channel values round-trip through the same contract strings (see
//! [`CardStatus::as_str`], [`Format::as_str`], [`Channel::as_str`]).

pub mod card;
pub mod filters;
pub mod pillars;
pub mod post;
pub mod requests;
pub mod status;
pub mod trash;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use card::{IdeaCard, Layers};
pub use filters::CardFilter;
pub use post::CalendarPost;
pub use requests::{LayersPatch, UpdateCardRequest, UpdatePostRequest};
pub use status::{CardStatus, Channel, Format};
pub use trash::TrashedCard;
