//! # brightcast
//!
//! A two-player, turn-based card duel engine. Each turn a player draws,
//! then plays a card whose effect mutates the four zones (deck, hand,
//! board, discard pile) - unless the opposing player counters it through
//! the interrupt protocol. First to five Spellcasters in play wins.
//!
//! ## Architecture
//!
//! - **Card catalog**: static identities with category, copy count, and
//!   rules text; effect behavior is *not* attached to the data.
//! - **Zones**: draw/shuffle/recycle semantics; cards are only ever moved,
//!   never created or destroyed mid-match.
//! - **Match state**: both players' zones, turn owner, status/phase pair,
//!   pending interrupt, bounded event log.
//! - **Resolution engine**: validates actions against turn/phase/status,
//!   applies effects, runs the interrupt protocol, evaluates the win
//!   condition. Pure over `&mut MatchState`.
//! - **Boundary service**: per-match locking over an injected store;
//!   every successful call returns a serializable full snapshot for the
//!   transport layer to broadcast.
//!
//! ## Modules
//!
//! - `cards`: card catalog and board card instances
//! - `zones`: the deck
//! - `core`: players, match state, randomness
//! - `engine`: the turn/interrupt state machine and effect resolution
//! - `service`: boundary adapter, match store, client snapshots
//! - `error`: rejected-action error kinds

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod service;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{BoardCard, CardIdentity, Category};
pub use crate::core::{
    MatchId, MatchRng, MatchState, MatchStatus, PendingInterrupt, Player, TurnPhase, LOG_CAPACITY,
};
pub use crate::engine::{
    board_wins, can_interrupt, PlayRequest, HAND_LIMIT, OPENING_HAND, WIN_THRESHOLD,
};
pub use crate::error::GameError;
pub use crate::service::{
    BoardCardView, InMemoryStore, MatchService, MatchSnapshot, MatchStore, PlayerView,
};
pub use crate::zones::Deck;
