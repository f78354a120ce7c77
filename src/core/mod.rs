//! Match state, players, and randomness.

mod player;
mod rng;
mod state;

pub use player::Player;
pub use rng::MatchRng;
pub use state::{MatchId, MatchState, MatchStatus, PendingInterrupt, TurnPhase, LOG_CAPACITY};
