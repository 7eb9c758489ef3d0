//! Card operations for the PlanningStore.

use jiff::Timestamp;
use log::debug;
use uuid::Uuid;

use super::{PlanningStore, Selection};
use crate::{
    error::Result,
    models::{CardFilter, CardStatus, IdeaCard, Layers, TrashedCard, UpdateCardRequest},
    params::CreateCard,
};

impl PlanningStore {
    /// Creates a new card from the given input, prepends it to the board and
    /// queues a persist. Returns the created card synchronously.
    ///
    /// The store accepts whatever title it is given, empty included;
    /// trimming and non-empty checks are frontend responsibilities.
    pub fn add_card(&self, params: &CreateCard) -> Result<IdeaCard> {
        let format = params.validate()?;

        let mut card = IdeaCard::new(params.title.clone());
        card.description = params.description.clone();
        card.pillar = params.pillar.clone();
        card.tags = params.tags.clone();
        card.layers = Layers {
            theme: params.theme.clone(),
            format,
            objective: params.objective.clone(),
            hook: params.hook.clone(),
            cta: params.cta.clone(),
        };

        let created = card.clone();
        self.state.send_modify(|state| state.cards.insert(0, card));
        self.queue_save();
        Ok(created)
    }

    /// Merges a partial update into the card with the given id.
    ///
    /// Returns the updated card and human-readable change descriptions, or
    /// None (a silent no-op) when the id matches nothing.
    pub fn update_card(
        &self,
        id: Uuid,
        request: &UpdateCardRequest,
    ) -> Option<(IdeaCard, Vec<String>)> {
        let mut outcome = None;
        self.state.send_if_modified(|state| {
            let Some(card) = state.cards.iter_mut().find(|c| c.id == id) else {
                return false;
            };
            let changes = request.apply(card);
            outcome = Some((card.clone(), changes));
            true
        });

        if outcome.is_some() {
            self.queue_save();
        } else {
            debug!("update_card: no card with id {id}");
        }
        outcome
    }

    /// Clones the card with the given id: new id, " (Copia)" title suffix,
    /// status reset to Ideia, fresh timestamps. The copy is prepended like a
    /// newly created card; the source stays untouched. No-op when the id
    /// matches nothing.
    pub fn duplicate_card(&self, id: Uuid) -> Option<IdeaCard> {
        let mut duplicated = None;
        self.state.send_if_modified(|state| {
            let Some(source) = state.cards.iter().find(|c| c.id == id) else {
                return false;
            };
            let copy = source.duplicate();
            duplicated = Some(copy.clone());
            state.cards.insert(0, copy);
            true
        });

        if duplicated.is_some() {
            self.queue_save();
        } else {
            debug!("duplicate_card: no card with id {id}");
        }
        duplicated
    }

    /// Removes the card and every calendar post referencing it in a single
    /// state transition, recording a trash entry with a 7-day expiry.
    ///
    /// Observers never see a post pointing at a missing card: both removals
    /// land in the same published state.
    pub fn delete_card(&self, id: Uuid) -> Option<TrashedCard> {
        let mut trashed = None;
        self.state.send_if_modified(|state| {
            let Some(position) = state.cards.iter().position(|c| c.id == id) else {
                return false;
            };
            let card = state.cards.remove(position);

            let (detached, kept): (Vec<_>, Vec<_>) = state
                .posts
                .drain(..)
                .partition(|p| p.idea_card_id == Some(id));
            state.posts = kept;

            if state.selection.active_card_id == Some(id) {
                state.selection = Selection::default();
            }

            let entry = TrashedCard::new(card, detached, Timestamp::now());
            state.trashed.push(entry.clone());
            trashed = Some(entry);
            true
        });

        if trashed.is_some() {
            self.queue_save();
        } else {
            debug!("delete_card: no card with id {id}");
        }
        trashed
    }

    /// Moves a trashed card back onto the board, re-attaching the posts that
    /// were removed with it, in a single state transition. No-op when the
    /// trash holds no entry for the id.
    pub fn restore_card(&self, id: Uuid) -> Option<IdeaCard> {
        let mut restored = None;
        self.state.send_if_modified(|state| {
            let Some(position) = state.trashed.iter().position(|t| t.card_id() == id) else {
                return false;
            };
            let entry = state.trashed.remove(position);
            restored = Some(entry.card.clone());
            state.cards.insert(0, entry.card);
            state.posts.extend(entry.posts);
            true
        });

        if restored.is_some() {
            self.queue_save();
        } else {
            debug!("restore_card: no trash entry for id {id}");
        }
        restored
    }

    /// Drops trash entries whose retention window has passed at `now`.
    /// Returns how many entries were purged.
    pub fn purge_expired_trash(&self, now: Timestamp) -> usize {
        let mut purged = 0;
        self.state.send_if_modified(|state| {
            let before = state.trashed.len();
            state.trashed.retain(|entry| !entry.is_expired(now));
            purged = before - state.trashed.len();
            purged > 0
        });

        if purged > 0 {
            self.queue_save();
        }
        purged
    }

    /// Narrow update: sets (or clears) the card's pillar label.
    pub fn move_card_pillar(&self, id: Uuid, pillar: Option<String>) -> Option<IdeaCard> {
        self.narrow_update(id, move |card| card.pillar = pillar.clone())
    }

    /// Narrow update: sets the card's pipeline status.
    pub fn mark_card_status(&self, id: Uuid, status: CardStatus) -> Option<IdeaCard> {
        self.narrow_update(id, move |card| card.status = status)
    }

    /// Opens the selection on the given card. Publishes to observers but
    /// never queues a persist; selection is session-local. Returns false
    /// (a silent no-op) when the id matches nothing.
    pub fn select_card(&self, id: Uuid) -> bool {
        self.state.send_if_modified(|state| {
            if state.find_card(id).is_none() {
                return false;
            }
            state.selection = Selection {
                open: true,
                active_card_id: Some(id),
            };
            true
        })
    }

    /// Closes the selection. Never queues a persist.
    pub fn close_selection(&self) {
        self.state.send_if_modified(|state| {
            if state.selection == Selection::default() {
                return false;
            }
            state.selection = Selection::default();
            true
        });
    }

    /// Cards passing the filter, in board order.
    pub fn cards_filtered(&self, filter: &CardFilter) -> Vec<IdeaCard> {
        let state = self.state.borrow();
        let scheduled = state
            .posts
            .iter()
            .filter_map(|p| p.idea_card_id)
            .collect::<std::collections::HashSet<_>>();
        state
            .cards
            .iter()
            .filter(|card| filter.matches(card, &scheduled))
            .cloned()
            .collect()
    }

    /// Shared shape of the field-level card updates: apply `mutate`, refresh
    /// `updated_at`, queue a persist; silent no-op on a missing id.
    fn narrow_update(&self, id: Uuid, mutate: impl Fn(&mut IdeaCard)) -> Option<IdeaCard> {
        let mut updated = None;
        self.state.send_if_modified(|state| {
            let Some(card) = state.cards.iter_mut().find(|c| c.id == id) else {
                return false;
            };
            mutate(card);
            card.updated_at = Timestamp::now();
            updated = Some(card.clone());
            true
        });

        if updated.is_some() {
            self.queue_save();
        } else {
            debug!("card update: no card with id {id}");
        }
        updated
    }
}
