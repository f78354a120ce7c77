//! Card effect resolution.
//!
//! Dispatch is on the *effective* identity: for a morphed Alchemist that
//! is the copied card, applied as if the copy had been played. Missing or
//! out-of-range effect targets are wasted actions, not errors - the play
//! stands, the effect fizzles, the turn still advances.

use crate::cards::{CardIdentity, Category};
use crate::core::{MatchState, MatchStatus};

/// Resolve the effect of `effective` for the active player.
///
/// `target_index`/`target_indices` come from the original play request
/// (or from the stored selection of a declined interrupt). Ends with the
/// shared win-check/end-turn step, except for the Sage whose forced
/// discard leaves the turn open.
pub(crate) fn execute(
    state: &mut MatchState,
    effective: CardIdentity,
    target_index: Option<usize>,
    target_indices: &[usize],
) {
    let actor = state.current_player().name().to_string();

    match effective {
        CardIdentity::Wizard => {
            let drew = {
                let (active, rng) = state.active_mut();
                if active.deck_is_empty() {
                    false
                } else {
                    active.draw(rng);
                    true
                }
            };
            if drew {
                state.add_log(format!("{actor} drew 1 card (Wizard)."));
            }
        }

        CardIdentity::Sage => {
            let (active, rng) = state.active_mut();
            active.draw(rng);
            active.draw(rng);
            state.add_log(format!("{actor} drew 2 cards (Sage)."));
            // Forced discard, even at 8 cards or fewer. No win check here:
            // the turn continues through the discard step.
            state.status = MatchStatus::WaitingForDiscard;
            return;
        }

        CardIdentity::Sorcerer => {
            let destroyed = match (state.duel_mut(), target_index) {
                (Some((_, opponent, _)), Some(index)) => {
                    opponent.discard_from_board(index).map(|card| card.current())
                }
                _ => None,
            };
            if let Some(card) = destroyed {
                state.add_log(format!("{actor} destroyed {card}!"));
            }
        }

        CardIdentity::Dragon => {
            // The Dragon sacrifices itself: the just-played card is the
            // last one on the active player's board.
            {
                let (active, _) = state.active_mut();
                if let Some(last) = active.board().len().checked_sub(1) {
                    active.discard_from_board(last);
                }
            }
            if !target_indices.is_empty() {
                let burned = match state.duel_mut() {
                    Some((_, opponent, _)) => {
                        // Descending order so earlier removals don't shift
                        // the later indices.
                        let mut indices = target_indices.to_vec();
                        indices.sort_unstable_by(|a, b| b.cmp(a));
                        indices
                            .into_iter()
                            .filter(|&index| opponent.discard_from_board(index).is_some())
                            .count()
                    }
                    None => 0,
                };
                state.add_log(format!("{actor}'s Dragon burned {burned} cards!"));
            }
        }

        CardIdentity::Druid => {
            let discarded = match (state.duel_mut(), target_index) {
                (Some((_, opponent, _)), Some(index)) => opponent.discard_hand_at(index),
                _ => None,
            };
            if discarded.is_some() {
                state.add_log(format!("{actor} forced opponent to discard a card."));
            }
        }

        CardIdentity::Warlock => {
            enum Outcome {
                Reclaimed(CardIdentity),
                NotASpellcaster,
                NoTarget,
            }
            let outcome = {
                let (active, _) = state.active_mut();
                match target_index {
                    Some(index) if index < active.discard_pile().len() => {
                        if active.discard_pile()[index].category() == Category::Spellcaster {
                            match active.take_from_discard(index) {
                                Some(card) => {
                                    active.add_to_hand(card);
                                    Outcome::Reclaimed(card)
                                }
                                None => Outcome::NoTarget,
                            }
                        } else {
                            Outcome::NotASpellcaster
                        }
                    }
                    _ => Outcome::NoTarget,
                }
            };
            match outcome {
                Outcome::Reclaimed(card) => {
                    state.add_log(format!("{actor} returned {card} from the discard pile."));
                }
                Outcome::NotASpellcaster => {
                    state.add_log("Invalid Warlock target! Must be a Spellcaster.");
                }
                Outcome::NoTarget => {}
            }
        }

        // An unmorphed Alchemist has no effect of its own.
        CardIdentity::Alchemist => {}
    }

    super::finish_action(state);
}
