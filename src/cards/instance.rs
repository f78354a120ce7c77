//! Board cards - placed copies of an identity.
//!
//! A `BoardCard` tracks two identities: the `original` it was played as,
//! which never changes and is what returns to the discard pile, and the
//! `current` identity used for effect resolution and win evaluation. The
//! two differ only for an Alchemist that has copied another board card.

use serde::{Deserialize, Serialize};

use super::catalog::CardIdentity;

/// A card in play on a player's board.
///
/// Owned exclusively by the board slot holding it. Discard bookkeeping
/// always uses the original identity, so deck composition is preserved
/// even after identity-changing effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCard {
    original: CardIdentity,
    current: CardIdentity,
}

impl BoardCard {
    /// Place a card as itself.
    #[must_use]
    pub const fn new(identity: CardIdentity) -> Self {
        Self {
            original: identity,
            current: identity,
        }
    }

    /// Change the effective identity, keeping the original for bookkeeping.
    pub fn morph(&mut self, into: CardIdentity) {
        self.current = into;
    }

    /// The identity used for effects, interrupts, and the win condition.
    #[must_use]
    pub const fn current(self) -> CardIdentity {
        self.current
    }

    /// The identity this card was played as.
    #[must_use]
    pub const fn original(self) -> CardIdentity {
        self.original
    }
}

impl std::fmt::Display for BoardCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.current)
    }
}
