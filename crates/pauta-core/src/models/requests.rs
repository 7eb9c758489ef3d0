//! Request types for merging partial updates into models.

use jiff::Timestamp;

use super::{post, CalendarPost, CardStatus, Channel, Format, IdeaCard, Layers};

/// Parameters for updating a card.
///
/// `None` fields are left untouched; the layers patch merges key-by-key so a
/// partial camadas update never erases sibling layer fields.
#[derive(Debug, Default)]
pub struct UpdateCardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pillar: Option<String>,
    pub status: Option<CardStatus>,
    pub tags: Option<Vec<String>>,
    pub layers: Option<LayersPatch>,
}

/// Key-by-key patch for the camadas block.
#[derive(Debug, Default, Clone)]
pub struct LayersPatch {
    pub theme: Option<String>,
    pub format: Option<Format>,
    pub objective: Option<String>,
    pub hook: Option<String>,
    pub cta: Option<String>,
}

impl LayersPatch {
    /// True when no layer field is set.
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.format.is_none()
            && self.objective.is_none()
            && self.hook.is_none()
            && self.cta.is_none()
    }

    /// Merge the set fields into `layers`, leaving the rest alone.
    pub fn apply(&self, layers: &mut Layers) {
        if let Some(theme) = &self.theme {
            layers.theme = Some(theme.clone());
        }
        if let Some(format) = self.format {
            layers.format = Some(format);
        }
        if let Some(objective) = &self.objective {
            layers.objective = Some(objective.clone());
        }
        if let Some(hook) = &self.hook {
            layers.hook = Some(hook.clone());
        }
        if let Some(cta) = &self.cta {
            layers.cta = Some(cta.clone());
        }
    }
}

impl UpdateCardRequest {
    /// Merge this request into `card`, refreshing `updated_at`.
    /// Returns human-readable change descriptions for result display.
    pub fn apply(&self, card: &mut IdeaCard) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(title) = &self.title {
            card.title = title.clone();
            changes.push("Updated title".to_string());
        }
        if let Some(description) = &self.description {
            card.description = Some(description.clone());
            changes.push("Updated description".to_string());
        }
        if let Some(pillar) = &self.pillar {
            card.pillar = Some(pillar.clone());
            changes.push(format!("Moved to pillar '{pillar}'"));
        }
        if let Some(status) = self.status {
            card.status = status;
            changes.push(format!("Changed status to {}", status.as_str()));
        }
        if let Some(tags) = &self.tags {
            card.tags = tags.clone();
            changes.push("Replaced tags".to_string());
        }
        if let Some(patch) = &self.layers {
            patch.apply(&mut card.layers);
            changes.push("Updated layers".to_string());
        }

        card.updated_at = Timestamp::now();
        changes
    }
}

impl TryFrom<crate::params::UpdateCard> for UpdateCardRequest {
    type Error = crate::StoreError;

    /// Convert UpdateCard parameters into a validated request, parsing the
    /// status and format strings through their `FromStr` impls.
    fn try_from(params: crate::params::UpdateCard) -> Result<Self, Self::Error> {
        let (status, format) = params.validate()?;

        let patch = LayersPatch {
            theme: params.theme,
            format,
            objective: params.objective,
            hook: params.hook,
            cta: params.cta,
        };

        Ok(Self {
            title: params.title,
            description: params.description,
            pillar: params.pillar,
            status,
            tags: params.tags,
            layers: (!patch.is_empty()).then_some(patch),
        })
    }
}

/// Parameters for updating a calendar post.
#[derive(Debug, Default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub channel: Option<Channel>,
    pub notes: Option<String>,
}

impl UpdatePostRequest {
    /// Merge this request into `post`.
    ///
    /// Moving the start without supplying an explicit end regenerates the
    /// one-day-later default end.
    pub fn apply(&self, post: &mut CalendarPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(starts_at) = self.starts_at {
            post.starts_at = starts_at;
            post.ends_at = self.ends_at.unwrap_or_else(|| post::default_end(starts_at));
        } else if let Some(ends_at) = self.ends_at {
            post.ends_at = ends_at;
        }
        if let Some(channel) = self.channel {
            post.channel = channel;
        }
        if let Some(notes) = &self.notes {
            post.notes = Some(notes.clone());
        }
    }
}

impl TryFrom<crate::params::UpdatePost> for UpdatePostRequest {
    type Error = crate::StoreError;

    fn try_from(params: crate::params::UpdatePost) -> Result<Self, Self::Error> {
        let channel = params.validate()?;

        Ok(Self {
            title: params.title,
            starts_at: params.starts_at,
            ends_at: params.ends_at,
            channel,
            notes: params.notes,
        })
    }
}
