//! The resolution engine: the match state machine.
//!
//! Every public function validates the action against the current status,
//! turn owner, and phase, then mutates the state and runs the shared
//! win-check/end-turn step. All work is synchronous and in-memory; the
//! functions are pure over a `&mut MatchState`, so callers decide how to
//! serialize access (the boundary service uses one lock per match).
//!
//! ## Turn shape
//!
//! `Draw` -> `Main` per turn, reset on turn switch. Orthogonally the match
//! status moves between `Playing`, `WaitingForDiscard` (hand over the
//! limit or a Sage resolution), and `WaitingForInterrupt` (a play is
//! suspended while the opposing player decides whether to counter it).

mod action;
mod effect;
mod interrupt;
mod win;

pub use action::PlayRequest;
pub use interrupt::can_interrupt;
pub use win::{board_wins, WIN_THRESHOLD};

use crate::cards::CardIdentity;
use crate::core::{MatchState, MatchStatus, PendingInterrupt, TurnPhase};
use crate::error::GameError;

/// Cards a player may keep in hand at end of turn.
pub const HAND_LIMIT: usize = 8;

/// Cards dealt to each player when the match starts.
pub const OPENING_HAND: usize = 4;

fn ensure_live(state: &MatchState) -> Result<(), GameError> {
    if state.status == MatchStatus::Finished {
        return Err(GameError::TerminalState(state.id.clone()));
    }
    Ok(())
}

fn ensure_turn(state: &MatchState, player_name: &str) -> Result<(), GameError> {
    if state.current_player().name() != player_name {
        return Err(GameError::OutOfTurn {
            player: player_name.to_string(),
        });
    }
    Ok(())
}

/// Attach the second player and start the match.
///
/// Randomizes the starting player with a coin flip, deals the opening
/// hands, then burns one card from each deck into its owner's discard
/// pile to seed the recycle pool.
pub fn join(state: &mut MatchState, guest_name: &str) -> Result<(), GameError> {
    ensure_live(state)?;
    state.attach_guest(guest_name)?;
    state.add_log(format!("{guest_name} joined the game!"));

    if state.rng.coin_flip() {
        state.switch_turn();
    }
    let first = state.current_player().name().to_string();
    state.add_log(format!("{first} goes first!"));

    let MatchState { host, guest, rng, .. } = state;
    for _ in 0..OPENING_HAND {
        host.draw(rng);
        if let Some(guest) = guest.as_mut() {
            guest.draw(rng);
        }
    }
    host.burn_top_card();
    if let Some(guest) = guest.as_mut() {
        guest.burn_top_card();
    }
    Ok(())
}

/// Draw the turn's card and move to the main phase.
///
/// Valid for the turn owner in the `Draw` phase while the match is
/// `Playing` (or still `WaitingForPlayer` - the host may pre-draw).
pub fn draw(state: &mut MatchState, player_name: &str) -> Result<(), GameError> {
    ensure_live(state)?;
    if !matches!(
        state.status,
        MatchStatus::Playing | MatchStatus::WaitingForPlayer
    ) {
        return Err(GameError::WrongPhase {
            reason: "finish the current discard or interrupt first",
        });
    }
    ensure_turn(state, player_name)?;
    if state.phase != TurnPhase::Draw {
        return Err(GameError::WrongPhase {
            reason: "already drew this turn",
        });
    }

    let (active, rng) = state.active_mut();
    active.draw(rng);
    state.add_log(format!("{player_name} drew a card."));
    state.phase = TurnPhase::Main;
    Ok(())
}

/// Skip the main phase: draw one compensatory card and end the turn.
pub fn skip_turn(state: &mut MatchState, player_name: &str) -> Result<(), GameError> {
    ensure_live(state)?;
    if state.status != MatchStatus::Playing {
        return Err(GameError::WrongPhase {
            reason: "finish the current discard or interrupt first",
        });
    }
    ensure_turn(state, player_name)?;
    if state.phase != TurnPhase::Main {
        return Err(GameError::WrongPhase {
            reason: "draw before skipping",
        });
    }

    let (active, rng) = state.active_mut();
    active.draw(rng);
    state.add_log(format!("{player_name} skipped and drew."));
    end_turn_or_force_discard(state);
    Ok(())
}

/// Play the hand card at `request.card_index`.
///
/// An Alchemist must target one of the active player's own board cards
/// and is placed morphed into the copied identity. After placement the
/// opponent's hand is checked for a counter: if eligible, the effect is
/// suspended in `WaitingForInterrupt` instead of resolving.
pub fn play_card(state: &mut MatchState, request: &PlayRequest) -> Result<(), GameError> {
    ensure_live(state)?;
    if state.status != MatchStatus::Playing {
        return Err(GameError::WrongPhase {
            reason: "the match is waiting on another action",
        });
    }
    if state.phase == TurnPhase::Draw {
        return Err(GameError::WrongPhase {
            reason: "draw before playing a card",
        });
    }
    ensure_turn(state, &request.player_name)?;

    let hand = state.current_player().hand();
    let card = *hand
        .get(request.card_index)
        .ok_or(GameError::InvalidCardIndex {
            index: request.card_index,
            size: hand.len(),
        })?;

    let effective = if card == CardIdentity::Alchemist {
        let target = request
            .target_index
            .ok_or(GameError::TargetRequired(CardIdentity::Alchemist))?;
        let copied = state
            .current_player()
            .board()
            .get(target)
            .ok_or(GameError::InvalidTargetIndex { index: target })?
            .current();
        state.add_log(format!(
            "{} played Alchemist (copying {copied}).",
            request.player_name
        ));
        state.current_player_mut().play_morphed(copied)?;
        copied
    } else {
        state.add_log(format!("{} played {card}.", request.player_name));
        state.current_player_mut().play_to_board(card)?;
        card
    };

    // Interrupt matching is against the literal played card, not the
    // identity it morphed into.
    let eligible = state
        .opponent()
        .map(|opponent| can_interrupt(opponent, card))
        .unwrap_or(false);
    if eligible {
        state.pending = Some(PendingInterrupt {
            played: card,
            target_index: request.target_index,
            target_indices: request.target_indices.clone(),
        });
        state.status = MatchStatus::WaitingForInterrupt;
        if let Some(opponent) = state.opponent() {
            let waiting_on = opponent.name().to_string();
            state.add_log(format!("Waiting for {waiting_on} to interrupt..."));
        }
        return Ok(());
    }

    effect::execute(state, effective, request.target_index, &request.target_indices);
    Ok(())
}

/// Discard the hand card at `card_index` during a forced-discard step.
pub fn discard_card(
    state: &mut MatchState,
    player_name: &str,
    card_index: usize,
) -> Result<(), GameError> {
    ensure_live(state)?;
    if state.status != MatchStatus::WaitingForDiscard {
        return Err(GameError::WrongPhase {
            reason: "no discard is required right now",
        });
    }
    ensure_turn(state, player_name)?;

    let size = state.current_player().hand_size();
    if card_index >= size {
        return Err(GameError::InvalidCardIndex {
            index: card_index,
            size,
        });
    }
    let discarded = state.current_player_mut().discard_hand_at(card_index);
    if let Some(card) = discarded {
        state.add_log(format!("{player_name} discarded {card}."));
    }

    finish_action(state);
    Ok(())
}

/// Settle a pending interrupt.
///
/// Declining resolves the suspended card's effect with its stored target
/// selection. Accepting pays the counter cost from the opponent's hand,
/// discards the just-played card from the board unresolved, and ends the
/// interrupted player's turn immediately - no hand-limit check.
pub fn resolve_interrupt(state: &mut MatchState, accept: bool) -> Result<(), GameError> {
    ensure_live(state)?;
    if state.status != MatchStatus::WaitingForInterrupt {
        return Err(GameError::WrongPhase {
            reason: "no interrupt is pending",
        });
    }
    let Some(pending) = state.pending.take() else {
        return Err(GameError::WrongPhase {
            reason: "no interrupt is pending",
        });
    };
    state.status = MatchStatus::Playing;

    if !accept {
        if let Some(opponent) = state.opponent() {
            let decliner = opponent.name().to_string();
            state.add_log(format!("{decliner} did not interrupt."));
        }
        // The suspended card is the last one placed on the active board;
        // resolve its current (possibly morphed) identity.
        let effective = state.current_player().board().last().map(|card| card.current());
        if let Some(effective) = effective {
            effect::execute(state, effective, pending.target_index, &pending.target_indices);
        }
        return Ok(());
    }

    let played = pending.played;
    let stopper = {
        let Some((active, opponent, _)) = state.duel_mut() else {
            return Err(GameError::WrongPhase {
                reason: "match has no second player",
            });
        };

        // Pay the cost: the Wizard stopper plus a matching copy. A held
        // Alchemist stands in when the literal copy is missing.
        opponent.discard_from_hand(CardIdentity::Wizard);
        if played == CardIdentity::Alchemist {
            opponent.discard_from_hand(CardIdentity::Alchemist);
        } else if opponent.holds(played) {
            opponent.discard_from_hand(played);
        } else {
            opponent.discard_from_hand(CardIdentity::Alchemist);
        }

        // The countered card leaves the board without resolving.
        if let Some(last) = active.board().len().checked_sub(1) {
            active.discard_from_board(last);
        }
        opponent.name().to_string()
    };

    state.add_log(format!("{stopper} interrupted {played}!"));
    state.switch_turn();
    Ok(())
}

/// Shared post-action step: check the win condition, otherwise end the
/// turn (or force a discard when the hand is over the limit).
pub(crate) fn finish_action(state: &mut MatchState) {
    if board_wins(state.current_player().board()) {
        let name = state.current_player().name().to_string();
        state.add_log(format!("GAME OVER! {name} wins!"));
        state.set_winner(name);
    } else {
        end_turn_or_force_discard(state);
    }
}

/// End the turn unless the active player must first discard down to the
/// hand limit.
pub(crate) fn end_turn_or_force_discard(state: &mut MatchState) {
    if state.current_player().hand_size() > HAND_LIMIT {
        state.status = MatchStatus::WaitingForDiscard;
        let name = state.current_player().name().to_string();
        state.add_log(format!("{name} must discard down to {HAND_LIMIT}."));
    } else {
        state.status = MatchStatus::Playing;
        state.switch_turn();
    }
}
