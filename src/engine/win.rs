//! Win-condition evaluation.
//!
//! Checked over the active player's board after every resolved effect and
//! completed discard. Morphed cards count as their *current* identity, so
//! a copied Alchemist contributes to the Spellcaster tally.

use rustc_hash::FxHashMap;

use crate::cards::{BoardCard, CardIdentity, Category};

/// Spellcasters needed on board to win.
pub const WIN_THRESHOLD: usize = 5;

/// Whether this board satisfies the win condition.
///
/// Win if at least [`WIN_THRESHOLD`] Spellcasters are in play and either
/// that many distinct identities appear among them, or one identity alone
/// reaches the threshold. Monsters and unmorphed Wildcards never count.
#[must_use]
pub fn board_wins(board: &[BoardCard]) -> bool {
    let spellcasters: Vec<CardIdentity> = board
        .iter()
        .map(|card| card.current())
        .filter(|identity| identity.category() == Category::Spellcaster)
        .collect();

    if spellcasters.len() < WIN_THRESHOLD {
        return false;
    }

    let mut counts: FxHashMap<CardIdentity, usize> = FxHashMap::default();
    for identity in &spellcasters {
        *counts.entry(*identity).or_default() += 1;
    }

    counts.len() >= WIN_THRESHOLD || counts.values().any(|&n| n >= WIN_THRESHOLD)
}
