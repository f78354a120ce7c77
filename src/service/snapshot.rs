//! Serializable match views returned to clients.
//!
//! A snapshot is a full, immutable-at-return-time copy of the match as
//! both participants may see it. The engine does not redact hidden
//! information; a transport that wants partial visibility filters these
//! views itself. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::cards::{BoardCard, CardIdentity};
use crate::core::{MatchState, MatchStatus, Player, TurnPhase};

/// A card in play as shown to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCardView {
    pub current_card: CardIdentity,
    pub original_card: CardIdentity,
}

impl From<BoardCard> for BoardCardView {
    fn from(card: BoardCard) -> Self {
        Self {
            current_card: card.current(),
            original_card: card.original(),
        }
    }
}

/// One player's zones as shown to clients. Deck contents stay hidden;
/// only the count is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub name: String,
    pub hand: Vec<CardIdentity>,
    pub hand_size: usize,
    pub deck_size: usize,
    pub board: Vec<BoardCardView>,
    pub discard_pile: Vec<CardIdentity>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            hand: player.hand().to_vec(),
            hand_size: player.hand_size(),
            deck_size: player.deck_size(),
            board: player.board().iter().copied().map(Into::into).collect(),
            discard_pile: player.discard_pile().to_vec(),
        }
    }
}

/// Full view of a match, pushed to both participants after every
/// successful mutating call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub game_id: String,
    pub status: MatchStatus,
    pub turn_phase: TurnPhase,
    pub current_player_index: usize,
    pub player1: PlayerView,
    pub player2: Option<PlayerView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_card: Option<CardIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_target_index: Option<usize>,
    /// Event log, most recent first, capped at the match's log capacity.
    pub logs: Vec<String>,
}

impl MatchSnapshot {
    /// Capture the current state of a match.
    #[must_use]
    pub fn of(state: &MatchState) -> Self {
        Self {
            game_id: state.id().as_str().to_string(),
            status: state.status(),
            turn_phase: state.phase(),
            current_player_index: state.current_index(),
            player1: state.host().into(),
            player2: state.guest().map(Into::into),
            winner_name: state.winner().map(str::to_string),
            pending_card: state.pending().map(|p| p.played),
            pending_target_index: state.pending().and_then(|p| p.target_index),
            logs: state.log().iter().cloned().collect(),
        }
    }
}
