//! Week-suggestion heuristic and batch scheduling.
//!
//! The heuristic is a pure function over card/post slices: it proposes at
//! most one card per required pillar for a week of content, preferring
//! backlog cards (Ideia/Roteirizado) that are not yet on the calendar and
//! surfacing the least-recently-touched candidates first. Scheduling turns
//! a proposal into concrete calendar posts spaced across the week in one
//! atomic state transition.

use std::collections::HashSet;

use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use super::PlanningStore;
use crate::models::{pillars, CalendarPost, CardStatus, Channel, IdeaCard};

/// Publication-day offsets across the week, by suggestion index.
const WEEK_OFFSETS: [i64; 4] = [0, 2, 4, 6];

/// Day offset for suggestion `index`. The selection logic never yields more
/// than four cards, but indexes past the table still get a sane spacing.
fn offset_days(index: usize) -> i64 {
    WEEK_OFFSETS.get(index).copied().unwrap_or(index as i64)
}

/// Select at most one card per required pillar for a week of content.
///
/// Candidates are cards not referenced by any post: backlog-status cards
/// when any exist, otherwise any unscheduled card. Within a pillar the
/// least-recently-updated candidate wins (stable sort on `updated_at`
/// ascending), and a card picked for one pillar is not considered again. A
/// pillar with no match is skipped; the result preserves pillar order
/// [Dor, Educacao, Solucao, Construcao?] and holds 0 to 4 cards.
pub fn suggest_week(
    cards: &[IdeaCard],
    posts: &[CalendarPost],
    include_build: bool,
) -> Vec<IdeaCard> {
    let scheduled: HashSet<Uuid> = posts.iter().filter_map(|p| p.idea_card_id).collect();

    let mut pool: Vec<&IdeaCard> = cards
        .iter()
        .filter(|c| !scheduled.contains(&c.id) && c.status.is_backlog())
        .collect();
    if pool.is_empty() {
        pool = cards.iter().filter(|c| !scheduled.contains(&c.id)).collect();
    }
    pool.sort_by_key(|c| c.updated_at);

    let mut wanted: Vec<&str> = pillars::REQUIRED.to_vec();
    if include_build {
        wanted.push(pillars::BUILD);
    }

    let mut used: HashSet<Uuid> = HashSet::new();
    let mut picks = Vec::new();
    for pillar in wanted {
        let candidate = pool
            .iter()
            .find(|c| !used.contains(&c.id) && pillars::field_matches(c.pillar.as_deref(), pillar));
        if let Some(card) = candidate {
            used.insert(card.id);
            picks.push((*card).clone());
        }
    }
    picks
}

impl PlanningStore {
    /// Run the week heuristic over the current state. Read-only: no state
    /// change, no persist.
    pub fn generate_week_suggestions(&self, include_build: bool) -> Vec<IdeaCard> {
        let state = self.state.borrow();
        suggest_week(&state.cards, &state.posts, include_build)
    }

    /// Turn the current week suggestions into calendar posts.
    ///
    /// Suggestion `i` publishes at `start + [0, 2, 4, 6][i]` days with a
    /// one-day slot, the channel inferred from the card's format and the
    /// title copied from the card. All posts are inserted and all source
    /// cards marked Agendado in one state transition, with one queued save
    /// for the whole batch. An empty suggestion set changes nothing and
    /// returns an empty list; a partial week (fewer than three pillar
    /// matches) schedules whatever was found.
    pub fn schedule_week_suggestions(
        &self,
        start: Timestamp,
        include_build: bool,
    ) -> Vec<CalendarPost> {
        let suggestions = self.generate_week_suggestions(include_build);
        if suggestions.is_empty() {
            return Vec::new();
        }

        let mut new_posts = Vec::with_capacity(suggestions.len());
        for (index, card) in suggestions.iter().enumerate() {
            let starts_at = start
                .checked_add(SignedDuration::from_hours(24 * offset_days(index)))
                .unwrap_or(start);
            let mut post = CalendarPost::new(
                card.title.clone(),
                starts_at,
                None,
                Channel::infer(card.layers.format),
            );
            post.idea_card_id = Some(card.id);
            new_posts.push(post);
        }

        let scheduled_ids: HashSet<Uuid> = suggestions.iter().map(|c| c.id).collect();
        let inserted = new_posts.clone();
        self.state.send_modify(|state| {
            state.posts.extend(new_posts);
            let now = Timestamp::now();
            for card in state
                .cards
                .iter_mut()
                .filter(|c| scheduled_ids.contains(&c.id))
            {
                card.status = CardStatus::Scheduled;
                card.updated_at = now;
            }
        });
        self.queue_save();
        inserted
    }
}
