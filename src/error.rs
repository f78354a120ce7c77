//! Error types for rejected actions.
//!
//! Every variant is a local validation failure surfaced directly to the
//! caller. A rejected action never mutates match state, and none of these
//! are fatal to the process hosting the service.
//!
//! Soft-fail effect targets (a Sorcerer aimed past the end of the board, a
//! Warlock pointed at a Monster) are *not* errors: the play still resolves
//! as a wasted action and the turn advances. Only pre-placement validation
//! produces a `GameError`.

use thiserror::Error;

use crate::cards::CardIdentity;
use crate::core::MatchId;

/// A rejected boundary or engine action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// No match registered under the given code.
    #[error("no match with code {0}")]
    MatchNotFound(MatchId),

    /// A second player already joined.
    #[error("match {0} already has two players")]
    MatchFull(MatchId),

    /// The acting player is not the turn owner.
    #[error("it is not {player}'s turn")]
    OutOfTurn { player: String },

    /// The action is invalid in the current turn phase or match status.
    #[error("action not allowed right now: {reason}")]
    WrongPhase { reason: &'static str },

    /// A hand index past the end of the hand.
    #[error("card index {index} out of range (hand size {size})")]
    InvalidCardIndex { index: usize, size: usize },

    /// A mandatory target index past the end of its zone.
    #[error("target index {index} out of range")]
    InvalidTargetIndex { index: usize },

    /// The card demands a target and none was supplied.
    #[error("{0} requires a target")]
    TargetRequired(CardIdentity),

    /// The identity is not present in the player's hand.
    #[error("{0} is not in hand")]
    NotInHand(CardIdentity),

    /// The match already finished; no further actions are accepted.
    #[error("match {0} is already finished")]
    TerminalState(MatchId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::OutOfTurn {
            player: "Alice".to_string(),
        };
        assert_eq!(err.to_string(), "it is not Alice's turn");

        let err = GameError::InvalidCardIndex { index: 9, size: 4 };
        assert_eq!(err.to_string(), "card index 9 out of range (hand size 4)");

        let err = GameError::TargetRequired(CardIdentity::Alchemist);
        assert_eq!(err.to_string(), "Alchemist requires a target");
    }

    #[test]
    fn test_errors_compare() {
        assert_eq!(
            GameError::MatchFull(MatchId::new("AB12")),
            GameError::MatchFull(MatchId::new("AB12")),
        );
        assert_ne!(
            GameError::MatchFull(MatchId::new("AB12")),
            GameError::MatchNotFound(MatchId::new("AB12")),
        );
    }
}
