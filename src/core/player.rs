//! A player and their four zones.
//!
//! Zone movement never creates or destroys cards: for a given player, the
//! identities across deck + hand + board + discard always sum to the
//! catalog's copy counts. Board discards push the card's *original*
//! identity so that invariant survives Alchemist morphs.

use serde::{Deserialize, Serialize};

use crate::cards::{BoardCard, CardIdentity};
use crate::error::GameError;
use crate::zones::Deck;

use super::rng::MatchRng;

/// One side of a match: name plus deck, hand, board, and discard pile.
///
/// Hand order is client-visible and stays stable between a snapshot and
/// the next action referencing an index; removals shift later cards left.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    deck: Deck,
    hand: Vec<CardIdentity>,
    board: Vec<BoardCard>,
    discard: Vec<CardIdentity>,
}

impl Player {
    /// Create a player with a fresh shuffled deck and empty other zones.
    #[must_use]
    pub fn new(name: impl Into<String>, rng: &mut MatchRng) -> Self {
        Self {
            name: name.into(),
            deck: Deck::fresh(rng),
            hand: Vec::new(),
            board: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// Player name (unique within a match).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in hand, in stable client-visible order.
    #[must_use]
    pub fn hand(&self) -> &[CardIdentity] {
        &self.hand
    }

    /// Cards in play.
    #[must_use]
    pub fn board(&self) -> &[BoardCard] {
        &self.board
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardIdentity] {
        &self.discard
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Whether the deck is out of cards (before any recycling).
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Whether the hand holds at least one copy of `identity`.
    #[must_use]
    pub fn holds(&self, identity: CardIdentity) -> bool {
        self.hand.contains(&identity)
    }

    /// Copies of `identity` currently in hand.
    #[must_use]
    pub fn count_in_hand(&self, identity: CardIdentity) -> usize {
        self.hand.iter().filter(|&&c| c == identity).count()
    }

    /// Draw one card into hand.
    ///
    /// An empty deck first recycles the discard pile (reshuffled); if both
    /// are empty the draw is a silent no-op - the hand is left unchanged.
    pub fn draw(&mut self, rng: &mut MatchRng) {
        if self.deck.is_empty() {
            self.deck.refill_from(&mut self.discard, rng);
        }
        if let Some(card) = self.deck.draw() {
            self.hand.push(card);
        }
    }

    /// Move one copy of `identity` from hand onto the board.
    pub fn play_to_board(&mut self, identity: CardIdentity) -> Result<(), GameError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == identity)
            .ok_or(GameError::NotInHand(identity))?;
        self.hand.remove(pos);
        self.board.push(BoardCard::new(identity));
        Ok(())
    }

    /// Play an Alchemist from hand, morphed into `copied`.
    ///
    /// The placed card resolves as `copied` but returns to the discard
    /// pile as an Alchemist.
    pub fn play_morphed(&mut self, copied: CardIdentity) -> Result<(), GameError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == CardIdentity::Alchemist)
            .ok_or(GameError::NotInHand(CardIdentity::Alchemist))?;
        self.hand.remove(pos);
        let mut card = BoardCard::new(CardIdentity::Alchemist);
        card.morph(copied);
        self.board.push(card);
        Ok(())
    }

    /// Discard the first held copy of `identity`.
    ///
    /// Returns false (and changes nothing) if the identity is not in hand.
    pub fn discard_from_hand(&mut self, identity: CardIdentity) -> bool {
        match self.hand.iter().position(|&c| c == identity) {
            Some(pos) => {
                self.hand.remove(pos);
                self.discard.push(identity);
                true
            }
            None => false,
        }
    }

    /// Discard the hand card at `index`, returning it.
    ///
    /// `None` if the index is out of range; the hand is left unchanged.
    pub fn discard_hand_at(&mut self, index: usize) -> Option<CardIdentity> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.discard.push(card);
        Some(card)
    }

    /// Discard the board card at `index`, returning the removed card.
    ///
    /// The *original* identity goes to the discard pile, never the morphed
    /// one. `None` if the index is out of range.
    pub fn discard_from_board(&mut self, index: usize) -> Option<BoardCard> {
        if index >= self.board.len() {
            return None;
        }
        let card = self.board.remove(index);
        self.discard.push(card.original());
        Some(card)
    }

    /// Remove and return the discard-pile card at `index`.
    pub fn take_from_discard(&mut self, index: usize) -> Option<CardIdentity> {
        if index >= self.discard.len() {
            return None;
        }
        Some(self.discard.remove(index))
    }

    /// Add a card directly to hand (Warlock reclaim, tests).
    pub fn add_to_hand(&mut self, identity: CardIdentity) {
        self.hand.push(identity);
    }

    /// Move the top deck card straight to the discard pile.
    ///
    /// Seeds the recycle pool when the match starts. No-op on an empty deck.
    pub fn burn_top_card(&mut self) {
        if let Some(card) = self.deck.draw() {
            self.discard.push(card);
        }
    }

    /// Total cards across all four zones.
    #[must_use]
    pub fn zone_total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.board.len() + self.discard.len()
    }
}
