//! Interrupt eligibility.
//!
//! The Wizard is the counter card: stopping an opponent's play costs one
//! Wizard plus a matching copy of the played card, with the Alchemist
//! usable as a stand-in match. Stopping a Wizard therefore takes two
//! Wizards (the stopper plus the matching pair).

use crate::cards::CardIdentity;
use crate::core::Player;

/// Whether `opponent` can counter a just-played `played` card.
///
/// The cost is only checked here; the discards happen when the interrupt
/// is accepted. Ordering of the rules matters:
/// - no Wizard in hand: never eligible
/// - an Alchemist play is matched only by another Alchemist
/// - a Wizard play needs two Wizards in hand
/// - otherwise: a literal copy of the played card, or an Alchemist
#[must_use]
pub fn can_interrupt(opponent: &Player, played: CardIdentity) -> bool {
    if !opponent.holds(CardIdentity::Wizard) {
        return false;
    }
    if played == CardIdentity::Alchemist {
        return opponent.holds(CardIdentity::Alchemist);
    }
    let required_wizards = if played == CardIdentity::Wizard { 2 } else { 1 };
    if opponent.count_in_hand(CardIdentity::Wizard) < required_wizards {
        return false;
    }
    opponent.holds(played) || opponent.holds(CardIdentity::Alchemist)
}
