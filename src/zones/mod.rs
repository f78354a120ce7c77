//! Zone containers with draw/shuffle/recycle semantics.
//!
//! The deck is the only zone with behavior of its own; hands, boards, and
//! discard piles are plain collections owned by [`crate::core::Player`].

mod deck;

pub use deck::Deck;
