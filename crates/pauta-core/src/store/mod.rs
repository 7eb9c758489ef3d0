//! High-level planning store for cards and calendar posts.
//!
//! This module provides the main [`PlanningStore`] interface: an in-memory,
//! observable state container fed by a one-shot [`hydrate`](PlanningStore::hydrate)
//! and persisted through fire-and-forget snapshot saves.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │    Frontend     │    │  PlanningStore   │    │  StateBackend   │
//! │  (CLI, tests)   │───▶│ (watch channel + │───▶│ (SQLite, memory,│
//! │                 │    │   saver task)    │    │   remote, ...)  │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//!      Mutations          Atomic transitions       Snapshot saves
//! ```
//!
//! State lives in a `tokio::sync::watch` channel. Every mutation is a single
//! `send_modify`/`send_if_modified` call, so subscribers only ever observe
//! complete states: the cascading card delete removes the card and its posts
//! in one published transition, with no intermediate dangling reference.
//!
//! Persistence is decoupled from mutation: each mutating
//! operation bumps a save generation and wakes a background saver task that
//! snapshots the whole working set and hands it to the backend. The task
//! runs at most one save at a time and re-saves only once more when
//! mutations arrived mid-save, coalescing rapid bursts into a single
//! trailing write. Save failures are logged and never retried, rolled back
//! or surfaced as blocking errors; local editing always wins over network
//! flakiness.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`PlanningStore`] instances
//! - [`card_ops`]: Card mutations (create, update, duplicate, delete, ...)
//! - [`post_ops`]: Calendar-post mutations
//! - [`week`]: Week-suggestion heuristic and batch scheduling

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use log::warn;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    backend::{StateBackend, StateSnapshot},
    models::{CalendarPost, IdeaCard, TrashedCard},
};

// Module declarations
pub mod builder;
pub mod card_ops;
pub mod post_ops;
pub mod week;


// Re-export the main types
pub use builder::StoreBuilder;

/// The complete observable state of a planning session.
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    /// Active idea cards, newest first
    pub cards: Vec<IdeaCard>,

    /// Scheduled calendar posts, in insertion order
    pub posts: Vec<CalendarPost>,

    /// Soft-deleted cards awaiting expiry
    pub trashed: Vec<TrashedCard>,

    /// Whether the one-shot remote load already ran
    pub hydrated: bool,

    /// UI-selection state; published to observers, never persisted
    pub selection: Selection,
}

/// Which card the user currently has open, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub open: bool,
    pub active_card_id: Option<Uuid>,
}

impl PlanState {
    /// Copy of the persistable collections (selection and hydration flag
    /// are session-local and excluded).
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            cards: self.cards.clone(),
            posts: self.posts.clone(),
            trashed: self.trashed.clone(),
        }
    }

    /// Find an active card by id.
    pub fn find_card(&self, id: Uuid) -> Option<&IdeaCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Find a calendar post by id.
    pub fn find_post(&self, id: Uuid) -> Option<&CalendarPost> {
        self.posts.iter().find(|p| p.id == id)
    }
}

/// Outcome of a [`PlanningStore::hydrate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Remote state fetched and installed
    Loaded,
    /// A previous call already hydrated this store; nothing was fetched
    AlreadyHydrated,
    /// The fetch failed; the store proceeds with empty collections.
    ///
    /// Frontends should warn the user: a save from a degraded session can
    /// overwrite previously persisted data with the empty working set.
    Degraded,
}

/// Save-queue bookkeeping shared between the store and its saver task.
struct SaveQueue {
    /// Bumped once per mutating operation
    generation: AtomicU64,
    /// Wakes the saver; a pending permit absorbs bursts
    notify: Notify,
    /// Last generation the saver has fully written
    saved: watch::Sender<u64>,
}

/// Main store interface for managing cards and calendar posts.
///
/// Explicitly constructed via [`StoreBuilder`] with an injected backend;
/// one instance per session, droppable per test. Not a process-wide
/// singleton.
pub struct PlanningStore {
    pub(crate) state: Arc<watch::Sender<PlanState>>,
    pub(crate) backend: Arc<dyn StateBackend>,
    queue: Arc<SaveQueue>,
    hydrate_started: AtomicBool,
    saver: JoinHandle<()>,
}

impl PlanningStore {
    /// Creates a store over `backend` and spawns its saver task.
    /// Must run inside a tokio runtime.
    pub(crate) fn spawn(backend: Arc<dyn StateBackend>) -> Self {
        let (state_tx, _) = watch::channel(PlanState::default());
        let state = Arc::new(state_tx);
        let (saved_tx, _) = watch::channel(0u64);
        let queue = Arc::new(SaveQueue {
            generation: AtomicU64::new(0),
            notify: Notify::new(),
            saved: saved_tx,
        });

        let saver = tokio::spawn(run_saver(
            Arc::clone(&state),
            Arc::clone(&backend),
            Arc::clone(&queue),
        ));

        Self {
            state,
            backend,
            queue,
            hydrate_started: AtomicBool::new(false),
            saver,
        }
    }

    /// Subscribe to state transitions. Each received value is a complete,
    /// consistent state; intermediate steps of a compound mutation are
    /// never published.
    pub fn subscribe(&self) -> watch::Receiver<PlanState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn current(&self) -> PlanState {
        self.state.borrow().clone()
    }

    /// One-shot load of the persisted working set.
    ///
    /// Idempotent: at most one backend fetch per store; later calls return
    /// [`Hydration::AlreadyHydrated`]. On fetch failure the store logs,
    /// keeps empty collections and still flips the hydrated flag so local
    /// editing is never blocked; the [`Hydration::Degraded`] result lets a
    /// frontend decide whether that risk is acceptable.
    pub async fn hydrate(&self) -> Hydration {
        if self
            .hydrate_started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Hydration::AlreadyHydrated;
        }

        match self.backend.load_state().await {
            Ok(snapshot) => {
                let StateSnapshot {
                    cards,
                    posts,
                    trashed,
                } = snapshot;
                self.state.send_modify(|state| {
                    state.cards = cards;
                    state.posts = posts;
                    state.trashed = trashed;
                    state.hydrated = true;
                });
                Hydration::Loaded
            }
            Err(err) => {
                warn!("Failed to hydrate planning state, continuing with an empty working set: {err}");
                self.state.send_modify(|state| state.hydrated = true);
                Hydration::Degraded
            }
        }
    }

    /// Queue an asynchronous snapshot save of the whole working set.
    /// Never blocks the calling mutation.
    pub(crate) fn queue_save(&self) {
        self.queue.generation.fetch_add(1, Ordering::AcqRel);
        self.queue.notify.notify_one();
    }

    /// Wait until every save queued so far has been handed to the backend.
    ///
    /// Save *failures* still count as handled (they are logged, not
    /// retried), so this resolves even when the backend is down.
    pub async fn flush(&self) {
        let target = self.queue.generation.load(Ordering::Acquire);
        let mut saved = self.queue.saved.subscribe();
        if *saved.borrow_and_update() >= target {
            return;
        }
        while saved.changed().await.is_ok() {
            if *saved.borrow_and_update() >= target {
                return;
            }
        }
    }

    /// Flush pending saves and stop the saver task.
    pub async fn close(self) {
        self.flush().await;
        self.saver.abort();
    }
}

/// Background save loop: one save in flight at a time, bursts coalesced
/// into a single trailing save.
async fn run_saver(
    state: Arc<watch::Sender<PlanState>>,
    backend: Arc<dyn StateBackend>,
    queue: Arc<SaveQueue>,
) {
    loop {
        queue.notify.notified().await;
        loop {
            let target = queue.generation.load(Ordering::Acquire);
            let snapshot = state.borrow().snapshot();
            if let Err(err) = backend.save_state(&snapshot).await {
                warn!("Failed to persist planning snapshot: {err}");
            }
            // send_replace: the saved marker must advance even while nobody
            // is flushing (a plain send drops the value without receivers)
            queue.saved.send_replace(target);
            // Mutations that landed mid-save get exactly one more write
            if queue.generation.load(Ordering::Acquire) == target {
                break;
            }
        }
    }
}
