//! In-memory backend for tests and offline use.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{StateBackend, StateSnapshot};
use crate::error::Result;

/// A backend holding the snapshot behind a mutex.
///
/// Useful as a null collaborator and as the substrate for test doubles.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<StateSnapshot>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with `snapshot`, e.g. to model a
    /// server-seeded working set.
    pub fn with_snapshot(snapshot: StateSnapshot) -> Self {
        Self {
            state: Mutex::new(snapshot),
        }
    }

    /// Returns a copy of the currently persisted snapshot.
    pub fn snapshot(&self) -> StateSnapshot {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl StateBackend for MemoryBackend {
    async fn load_state(&self) -> Result<StateSnapshot> {
        Ok(self.snapshot())
    }

    async fn save_state(&self, snapshot: &StateSnapshot) -> Result<()> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = snapshot.clone();
        Ok(())
    }
}
