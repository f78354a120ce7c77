//! Per-match mutable state.
//!
//! `MatchState` owns everything a single match needs: both players' zones,
//! the turn owner, the orthogonal status/phase pair, the optional pending
//! interrupt, the winner once decided, a bounded event log, and the match
//! RNG. The resolution engine mutates it; the boundary service wraps it in
//! a per-match lock and serializes snapshots of it.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::cards::CardIdentity;

use super::player::Player;
use super::rng::MatchRng;

/// Most-recent-first event log entries kept per match.
pub const LOG_CAPACITY: usize = 50;

/// Externally visible match identifier: a short shareable code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(String);

impl MatchId {
    /// Wrap an existing code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generate a fresh 4-character join code.
    #[must_use]
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..4].to_uppercase())
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Match-wide status, orthogonal to the turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    WaitingForPlayer,
    Playing,
    WaitingForDiscard,
    WaitingForInterrupt,
    Finished,
}

/// Sub-state of the active player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnPhase {
    Draw,
    Main,
}

/// A played card held in suspense while the opposing player decides
/// whether to counter it.
///
/// Stores the played identity and the original action's target selection
/// so a declined interrupt can resolve the effect exactly as requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInterrupt {
    /// The identity that was played (the literal card, not a morph result).
    pub played: CardIdentity,
    /// Single-target selection of the original action.
    pub target_index: Option<usize>,
    /// Multi-target selection of the original action.
    pub target_indices: SmallVec<[usize; 3]>,
}

/// The complete state of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub(crate) id: MatchId,
    pub(crate) host: Player,
    pub(crate) guest: Option<Player>,
    /// Turn owner: 0 = host, 1 = guest.
    pub(crate) current: usize,
    pub(crate) status: MatchStatus,
    pub(crate) phase: TurnPhase,
    pub(crate) winner: Option<String>,
    pub(crate) pending: Option<PendingInterrupt>,
    pub(crate) log: Vector<String>,
    pub(crate) rng: MatchRng,
}

impl MatchState {
    /// Create a match with a lone host, waiting for an opponent.
    #[must_use]
    pub fn new(id: MatchId, host_name: impl Into<String>, mut rng: MatchRng) -> Self {
        let host = Player::new(host_name, &mut rng);
        Self {
            id,
            host,
            guest: None,
            current: 0,
            status: MatchStatus::WaitingForPlayer,
            phase: TurnPhase::Draw,
            winner: None,
            pending: None,
            log: Vector::new(),
            rng,
        }
    }

    /// Match identifier.
    #[must_use]
    pub fn id(&self) -> &MatchId {
        &self.id
    }

    /// Current match status.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Winner's name once the match is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// The pending interrupt, if one is awaiting a decision.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingInterrupt> {
        self.pending.as_ref()
    }

    /// Turn owner index: 0 = host, 1 = guest.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The match creator.
    #[must_use]
    pub fn host(&self) -> &Player {
        &self.host
    }

    /// The second player, once joined.
    #[must_use]
    pub fn guest(&self) -> Option<&Player> {
        self.guest.as_ref()
    }

    /// Mutable access to the host (test setup).
    pub fn host_mut(&mut self) -> &mut Player {
        &mut self.host
    }

    /// Mutable access to the guest (test setup).
    pub fn guest_mut(&mut self) -> Option<&mut Player> {
        self.guest.as_mut()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        match (self.current, self.guest.as_ref()) {
            (1, Some(guest)) => guest,
            _ => &self.host,
        }
    }

    /// Mutable access to the turn owner.
    pub fn current_player_mut(&mut self) -> &mut Player {
        match (self.current, self.guest.as_mut()) {
            (1, Some(guest)) => guest,
            _ => &mut self.host,
        }
    }

    /// The non-acting player. `None` while waiting for a second player.
    #[must_use]
    pub fn opponent(&self) -> Option<&Player> {
        if self.current == 0 {
            self.guest.as_ref()
        } else {
            Some(&self.host)
        }
    }

    /// Mutable access to the non-acting player.
    pub fn opponent_mut(&mut self) -> Option<&mut Player> {
        if self.current == 0 {
            self.guest.as_mut()
        } else {
            Some(&mut self.host)
        }
    }

    /// Match event log, most recent first.
    #[must_use]
    pub fn log(&self) -> &Vector<String> {
        &self.log
    }

    /// Push an event log entry, dropping the oldest past capacity.
    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.push_front(message.into());
        if self.log.len() > LOG_CAPACITY {
            self.log.truncate(LOG_CAPACITY);
        }
    }

    /// Split-borrow the turn owner together with the match RNG.
    pub(crate) fn active_mut(&mut self) -> (&mut Player, &mut MatchRng) {
        match (self.current, self.guest.as_mut()) {
            (1, Some(guest)) => (guest, &mut self.rng),
            _ => (&mut self.host, &mut self.rng),
        }
    }

    /// Split-borrow (active, opponent, rng). `None` before the guest joins.
    pub(crate) fn duel_mut(&mut self) -> Option<(&mut Player, &mut Player, &mut MatchRng)> {
        let guest = self.guest.as_mut()?;
        if self.current == 0 {
            Some((&mut self.host, guest, &mut self.rng))
        } else {
            Some((guest, &mut self.host, &mut self.rng))
        }
    }

    /// Attach the second player and move to `Playing`.
    pub(crate) fn attach_guest(&mut self, name: &str) -> Result<(), crate::error::GameError> {
        if self.guest.is_some() {
            return Err(crate::error::GameError::MatchFull(self.id.clone()));
        }
        let MatchState { guest, rng, .. } = self;
        *guest = Some(Player::new(name, rng));
        self.status = MatchStatus::Playing;
        Ok(())
    }

    /// Hand the turn to the other player and reset the phase.
    pub(crate) fn switch_turn(&mut self) {
        self.current ^= 1;
        self.phase = TurnPhase::Draw;
    }

    /// Record the winner and finish the match.
    pub(crate) fn set_winner(&mut self, name: impl Into<String>) {
        self.winner = Some(name.into());
        self.status = MatchStatus::Finished;
    }
}
