//! Match registry abstraction.
//!
//! The service is shared-nothing per match: the store hands out one
//! `Arc<Mutex<MatchState>>` per match id, so a whole
//! validate-mutate-win-check sequence runs under a single exclusive lock
//! while distinct matches proceed fully in parallel.

use std::sync::{Arc, Mutex, RwLock};

use rustc_hash::FxHashMap;

use crate::core::{MatchId, MatchState};

/// Keyed storage of live matches with per-key mutual exclusion.
///
/// Implementations must be safe to share across request handlers. The
/// default [`InMemoryStore`] keeps everything in a process-local map;
/// deletion policy for finished matches is the caller's concern.
pub trait MatchStore: Send + Sync {
    /// Register a new match under its own id.
    fn insert(&self, state: MatchState);

    /// Look up the lock slot for a match id.
    fn get(&self, id: &MatchId) -> Option<Arc<Mutex<MatchState>>>;
}

/// Process-local match registry.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    matches: RwLock<FxHashMap<MatchId, Arc<Mutex<MatchState>>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether no matches are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MatchStore for InMemoryStore {
    fn insert(&self, state: MatchState) {
        let id = state.id().clone();
        self.matches
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id, Arc::new(Mutex::new(state)));
    }

    fn get(&self, id: &MatchId) -> Option<Arc<Mutex<MatchState>>> {
        self.matches
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(id)
            .cloned()
    }
}
