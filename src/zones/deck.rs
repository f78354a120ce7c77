//! The deck: an ordered, shuffled stack of card identities.
//!
//! The top of the deck is the end of the vec, so drawing is a pop.

use serde::{Deserialize, Serialize};

use crate::cards::CardIdentity;
use crate::core::MatchRng;

/// An ordered stack of card identities.
///
/// Freshly built decks contain every catalog identity at its copy count,
/// uniformly shuffled. A deck never refuses a draw: an empty deck simply
/// yields `None` and the caller decides whether to recycle a discard pile
/// first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Top of the deck is the last element.
    cards: Vec<CardIdentity>,
}

impl Deck {
    /// Build a full, shuffled deck from the catalog.
    #[must_use]
    pub fn fresh(rng: &mut MatchRng) -> Self {
        let mut cards = Vec::with_capacity(CardIdentity::deck_total());
        for identity in CardIdentity::ALL {
            for _ in 0..identity.copy_count() {
                cards.push(identity);
            }
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Draw the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<CardIdentity> {
        self.cards.pop()
    }

    /// Move an entire discard pile into the deck and reshuffle.
    ///
    /// The discard pile is left empty.
    pub fn refill_from(&mut self, discard: &mut Vec<CardIdentity>, rng: &mut MatchRng) {
        self.cards.append(discard);
        rng.shuffle(&mut self.cards);
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
