//! The boundary adapter.
//!
//! `MatchService` translates external calls into resolution-engine
//! operations and returns the updated match snapshot. The transport layer
//! (HTTP endpoints, push channel) sits outside this crate: it forwards
//! requests here and broadcasts the returned snapshot to both
//! participants after every successful mutating call.
//!
//! Each call locks exactly one match for its full
//! validate-mutate-win-check sequence; distinct matches never contend.

mod snapshot;
mod store;

pub use snapshot::{BoardCardView, MatchSnapshot, PlayerView};
pub use store::{InMemoryStore, MatchStore};

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{MatchId, MatchRng, MatchState};
use crate::engine::{self, PlayRequest};
use crate::error::GameError;

/// Entry point for all match operations.
#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn MatchStore>,
}

impl MatchService {
    /// Service over a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Service over an injected store.
    #[must_use]
    pub fn with_store(store: Arc<dyn MatchStore>) -> Self {
        Self { store }
    }

    /// Create a match hosted by `host_name` and register it.
    pub fn create_match(&self, host_name: &str) -> MatchSnapshot {
        let id = MatchId::generate();
        let state = MatchState::new(id.clone(), host_name, MatchRng::from_entropy());
        let snapshot = MatchSnapshot::of(&state);
        self.store.insert(state);
        info!(match_id = %id, host = host_name, "match created");
        snapshot
    }

    /// Join a waiting match as the second player and start it.
    pub fn join_match(&self, id: &MatchId, guest_name: &str) -> Result<MatchSnapshot, GameError> {
        let snapshot = self.mutate(id, |state| engine::join(state, guest_name))?;
        info!(match_id = %id, guest = guest_name, "player joined");
        Ok(snapshot)
    }

    /// Snapshot a match without mutating it.
    pub fn get_match(&self, id: &MatchId) -> Result<MatchSnapshot, GameError> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| GameError::MatchNotFound(id.clone()))?;
        let state = entry.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(MatchSnapshot::of(&state))
    }

    /// Draw the turn's card.
    pub fn draw(&self, id: &MatchId, player_name: &str) -> Result<MatchSnapshot, GameError> {
        self.mutate(id, |state| engine::draw(state, player_name))
    }

    /// Skip the main phase (draw one, end the turn).
    pub fn skip_turn(&self, id: &MatchId, player_name: &str) -> Result<MatchSnapshot, GameError> {
        self.mutate(id, |state| engine::skip_turn(state, player_name))
    }

    /// Play a hand card, possibly suspending on an interrupt.
    pub fn play_card(&self, id: &MatchId, request: &PlayRequest) -> Result<MatchSnapshot, GameError> {
        self.mutate(id, |state| engine::play_card(state, request))
    }

    /// Discard during a forced-discard step.
    pub fn discard_card(
        &self,
        id: &MatchId,
        player_name: &str,
        card_index: usize,
    ) -> Result<MatchSnapshot, GameError> {
        self.mutate(id, |state| engine::discard_card(state, player_name, card_index))
    }

    /// Settle a pending interrupt (accept = counter the play).
    pub fn resolve_interrupt(&self, id: &MatchId, accept: bool) -> Result<MatchSnapshot, GameError> {
        self.mutate(id, |state| engine::resolve_interrupt(state, accept))
    }

    /// Run one engine operation under the match's exclusive lock and
    /// snapshot the result.
    fn mutate<F>(&self, id: &MatchId, operation: F) -> Result<MatchSnapshot, GameError>
    where
        F: FnOnce(&mut MatchState) -> Result<(), GameError>,
    {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| GameError::MatchNotFound(id.clone()))?;
        let mut state = entry.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(err) = operation(&mut state) {
            debug!(match_id = %id, error = %err, "action rejected");
            return Err(err);
        }
        Ok(MatchSnapshot::of(&state))
    }
}

impl Default for MatchService {
    fn default() -> Self {
        Self::new()
    }
}
