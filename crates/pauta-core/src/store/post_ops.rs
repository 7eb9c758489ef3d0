//! Calendar-post operations for the PlanningStore.

use jiff::Timestamp;
use log::debug;
use uuid::Uuid;

use super::PlanningStore;
use crate::{
    error::Result,
    models::{CalendarPost, CardStatus, Channel, UpdatePostRequest},
    params::CreatePost,
};

impl PlanningStore {
    /// Creates a calendar post and queues a persist. Returns the created
    /// post synchronously.
    ///
    /// The end defaults to one day after the start. An explicit channel
    /// wins; otherwise the channel is inferred from the source card's
    /// format (Feed when there is no card). When the post references a
    /// card, that card is marked Agendado in the same state transition. A
    /// reference to an id no longer on the board is dropped rather than
    /// stored, keeping every persisted reference live.
    pub fn add_calendar_post(&self, params: &CreatePost) -> Result<CalendarPost> {
        let explicit_channel = params.validate()?;

        // Resolve the source card before mutating; the borrow must not
        // overlap the send_modify below.
        let (card_id, card_format) = {
            let state = self.state.borrow();
            match params.idea_card_id.and_then(|id| state.find_card(id)) {
                Some(card) => (Some(card.id), card.layers.format),
                None => {
                    if let Some(id) = params.idea_card_id {
                        debug!("add_calendar_post: dropping reference to unknown card {id}");
                    }
                    (None, None)
                }
            }
        };

        let channel = explicit_channel.unwrap_or_else(|| Channel::infer(card_format));
        let mut post = CalendarPost::new(
            params.title.clone(),
            params.starts_at,
            params.ends_at,
            channel,
        );
        post.idea_card_id = card_id;
        post.notes = params.notes.clone();

        let created = post.clone();
        self.state.send_modify(|state| {
            state.posts.push(post);
            if let Some(id) = card_id {
                if let Some(card) = state.cards.iter_mut().find(|c| c.id == id) {
                    card.status = CardStatus::Scheduled;
                    card.updated_at = Timestamp::now();
                }
            }
        });
        self.queue_save();
        Ok(created)
    }

    /// Merges a partial update into the post with the given id. Moving the
    /// start without an explicit end regenerates the one-day-later default.
    /// Silent no-op when the id matches nothing.
    pub fn update_calendar_post(
        &self,
        id: Uuid,
        request: &UpdatePostRequest,
    ) -> Option<CalendarPost> {
        let mut updated = None;
        self.state.send_if_modified(|state| {
            let Some(post) = state.posts.iter_mut().find(|p| p.id == id) else {
                return false;
            };
            request.apply(post);
            updated = Some(post.clone());
            true
        });

        if updated.is_some() {
            self.queue_save();
        } else {
            debug!("update_calendar_post: no post with id {id}");
        }
        updated
    }

    /// Removes the post with the given id. No cascade: the referenced card,
    /// if any, keeps its status. Returns whether a post was removed.
    pub fn delete_calendar_post(&self, id: Uuid) -> bool {
        let removed = self.state.send_if_modified(|state| {
            let before = state.posts.len();
            state.posts.retain(|p| p.id != id);
            state.posts.len() != before
        });

        if removed {
            self.queue_save();
        } else {
            debug!("delete_calendar_post: no post with id {id}");
        }
        removed
    }

    /// Calendar posts ordered by start.
    pub fn agenda(&self) -> Vec<CalendarPost> {
        let mut posts = self.state.borrow().posts.clone();
        posts.sort_by_key(|p| p.starts_at);
        posts
    }
}
