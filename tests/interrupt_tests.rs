//! Interrupt protocol integration tests.
//!
//! Covers counter eligibility through the play path, the accept path
//! (pay the cost, void the play, steal the turn) and the decline path
//! (resolve the suspended effect with its stored targets).

use brightcast::engine;
use brightcast::{
    CardIdentity, GameError, MatchId, MatchRng, MatchState, MatchStatus, PlayRequest, TurnPhase,
};

fn joined_match(seed: u64) -> MatchState {
    let mut state = MatchState::new(MatchId::new("TEST"), "Alice", MatchRng::seeded(seed));
    engine::join(&mut state, "Bob").unwrap();
    state
}

fn active_name(state: &MatchState) -> String {
    state.current_player().name().to_string()
}

fn clear_hand(player: &mut brightcast::Player) {
    while player.hand_size() > 0 {
        player.discard_hand_at(0);
    }
}

/// Joined match where the active player has drawn and both hands have
/// been replaced with the given cards. The played card ends up at the
/// returned index.
fn duel_setup(
    active_extra: CardIdentity,
    opponent_hand: &[CardIdentity],
) -> (MatchState, String, usize) {
    let mut state = joined_match(42);
    let active = active_name(&state);

    {
        let opponent = state.opponent_mut().unwrap();
        clear_hand(opponent);
        for &card in opponent_hand {
            opponent.add_to_hand(card);
        }
    }
    engine::draw(&mut state, &active).unwrap();
    state.current_player_mut().add_to_hand(active_extra);
    let index = state.current_player().hand_size() - 1;
    (state, active, index)
}

// =============================================================================
// Eligibility through the play path
// =============================================================================

#[test]
fn test_wizard_plus_copy_suspends_the_play() {
    let (mut state, active, index) = duel_setup(
        CardIdentity::Sorcerer,
        &[CardIdentity::Wizard, CardIdentity::Sorcerer],
    );

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();

    assert_eq!(state.status(), MatchStatus::WaitingForInterrupt);
    let pending = state.pending().unwrap();
    assert_eq!(pending.played, CardIdentity::Sorcerer);
    assert_eq!(pending.target_index, Some(0));
    // Still the same player's turn while the decision is out.
    assert_eq!(active_name(&state), active);
    let waiting_on = state.opponent().unwrap().name();
    assert_eq!(state.log()[0], format!("Waiting for {waiting_on} to interrupt..."));
}

#[test]
fn test_no_wizard_means_no_interrupt() {
    let (mut state, active, index) =
        duel_setup(CardIdentity::Sorcerer, &[CardIdentity::Sorcerer]);

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();

    assert_eq!(state.status(), MatchStatus::Playing);
    assert!(state.pending().is_none());
    assert_ne!(active_name(&state), active);
}

#[test]
fn test_countering_a_wizard_takes_two_wizards() {
    // One Wizard plus a stand-in is not enough against a Wizard.
    let (mut state, active, index) = duel_setup(
        CardIdentity::Wizard,
        &[CardIdentity::Wizard, CardIdentity::Alchemist],
    );
    engine::play_card(&mut state, &PlayRequest::new(&active, index)).unwrap();
    assert_eq!(state.status(), MatchStatus::Playing);

    // Two Wizards are.
    let (mut state, active, index) = duel_setup(
        CardIdentity::Wizard,
        &[CardIdentity::Wizard, CardIdentity::Wizard],
    );
    engine::play_card(&mut state, &PlayRequest::new(&active, index)).unwrap();
    assert_eq!(state.status(), MatchStatus::WaitingForInterrupt);
}

#[test]
fn test_alchemist_stands_in_for_the_copy() {
    let (mut state, active, index) = duel_setup(
        CardIdentity::Druid,
        &[CardIdentity::Wizard, CardIdentity::Alchemist],
    );

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();

    assert_eq!(state.status(), MatchStatus::WaitingForInterrupt);
}

// =============================================================================
// Accepting
// =============================================================================

#[test]
fn test_accept_pays_cost_voids_play_and_steals_turn() {
    let (mut state, active, index) = duel_setup(
        CardIdentity::Sorcerer,
        &[CardIdentity::Wizard, CardIdentity::Sorcerer],
    );
    {
        let opponent = state.opponent_mut().unwrap();
        opponent.add_to_hand(CardIdentity::Druid);
        opponent.play_to_board(CardIdentity::Druid).unwrap();
    }
    let stopper = state.opponent().unwrap().name().to_string();

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();
    engine::resolve_interrupt(&mut state, true).unwrap();

    assert_eq!(state.status(), MatchStatus::Playing);
    assert_eq!(state.phase(), TurnPhase::Draw);
    assert!(state.pending().is_none());
    // The stopper takes over immediately, no hand-limit step.
    assert_eq!(active_name(&state), stopper);

    // Counter cost paid: both cards left the stopper's hand.
    let stopper_player = state.current_player();
    assert!(!stopper_player.holds(CardIdentity::Wizard));
    assert!(!stopper_player.holds(CardIdentity::Sorcerer));
    // The target survived.
    assert_eq!(stopper_player.board().len(), 1);

    // The countered Sorcerer went to its owner's discard pile unresolved.
    let interrupted = state.opponent().unwrap();
    assert!(interrupted.board().is_empty());
    assert_eq!(interrupted.discard_pile().last(), Some(&CardIdentity::Sorcerer));
    assert_eq!(state.log()[0], format!("{stopper} interrupted Sorcerer!"));
}

#[test]
fn test_accept_falls_back_to_alchemist_for_the_copy() {
    let (mut state, active, index) = duel_setup(
        CardIdentity::Druid,
        &[CardIdentity::Wizard, CardIdentity::Alchemist],
    );

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();
    let alchemists_before = state
        .opponent()
        .unwrap()
        .discard_pile()
        .iter()
        .filter(|&&c| c == CardIdentity::Alchemist)
        .count();
    engine::resolve_interrupt(&mut state, true).unwrap();

    let stopper = state.current_player();
    assert_eq!(stopper.hand_size(), 0);
    let alchemists_after = stopper
        .discard_pile()
        .iter()
        .filter(|&&c| c == CardIdentity::Alchemist)
        .count();
    assert_eq!(alchemists_after, alchemists_before + 1);
}

#[test]
fn test_accepted_morph_discards_as_alchemist() {
    let mut state = joined_match(42);
    let active = active_name(&state);

    {
        let opponent = state.opponent_mut().unwrap();
        clear_hand(opponent);
        opponent.add_to_hand(CardIdentity::Wizard);
        opponent.add_to_hand(CardIdentity::Alchemist);
    }
    engine::draw(&mut state, &active).unwrap();
    {
        let player = state.current_player_mut();
        player.add_to_hand(CardIdentity::Druid);
        player.play_to_board(CardIdentity::Druid).unwrap();
        player.add_to_hand(CardIdentity::Alchemist);
    }
    let index = state.current_player().hand_size() - 1;

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();
    assert_eq!(state.status(), MatchStatus::WaitingForInterrupt);
    engine::resolve_interrupt(&mut state, true).unwrap();

    // The morphed card leaves the board under its original identity.
    let interrupted = state.opponent().unwrap();
    assert_eq!(interrupted.board().len(), 1);
    assert_eq!(interrupted.board()[0].current(), CardIdentity::Druid);
    assert_eq!(interrupted.discard_pile().last(), Some(&CardIdentity::Alchemist));
}

// =============================================================================
// Declining
// =============================================================================

#[test]
fn test_decline_resolves_with_stored_targets() {
    let (mut state, active, index) = duel_setup(
        CardIdentity::Sorcerer,
        &[CardIdentity::Wizard, CardIdentity::Sorcerer],
    );
    {
        let opponent = state.opponent_mut().unwrap();
        opponent.add_to_hand(CardIdentity::Druid);
        opponent.play_to_board(CardIdentity::Druid).unwrap();
    }

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();
    engine::resolve_interrupt(&mut state, false).unwrap();

    // The Sorcerer resolved: the targeted board card is gone and the
    // turn passed normally.
    assert_eq!(state.status(), MatchStatus::Playing);
    assert!(state.pending().is_none());
    assert_ne!(active_name(&state), active);

    let stopper = state.current_player();
    assert!(stopper.board().is_empty());
    assert_eq!(stopper.discard_pile().last(), Some(&CardIdentity::Druid));
    // The counter cards were not paid.
    assert!(stopper.holds(CardIdentity::Wizard));
    assert!(stopper.holds(CardIdentity::Sorcerer));

    let played = state.opponent().unwrap();
    assert_eq!(played.board().len(), 1);
    assert_eq!(played.board()[0].current(), CardIdentity::Sorcerer);
}

#[test]
fn test_declined_morph_resolves_copied_effect() {
    let mut state = joined_match(42);
    let active = active_name(&state);

    {
        let opponent = state.opponent_mut().unwrap();
        clear_hand(opponent);
        opponent.add_to_hand(CardIdentity::Wizard);
        opponent.add_to_hand(CardIdentity::Alchemist);
    }
    engine::draw(&mut state, &active).unwrap();
    {
        let player = state.current_player_mut();
        player.add_to_hand(CardIdentity::Sage);
        player.play_to_board(CardIdentity::Sage).unwrap();
        player.add_to_hand(CardIdentity::Alchemist);
    }
    let index = state.current_player().hand_size() - 1;
    let hand_before = state.current_player().hand_size();

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();
    engine::resolve_interrupt(&mut state, false).unwrap();

    // The copy resolved as a Sage: two cards drawn, discard step opened,
    // the actor keeps the turn.
    assert_eq!(state.status(), MatchStatus::WaitingForDiscard);
    assert_eq!(active_name(&state), active);
    assert_eq!(state.current_player().hand_size(), hand_before - 1 + 2);
}

#[test]
fn test_decline_is_logged() {
    let (mut state, active, index) = duel_setup(
        CardIdentity::Druid,
        &[CardIdentity::Wizard, CardIdentity::Druid],
    );
    let decliner = state.opponent().unwrap().name().to_string();

    engine::play_card(&mut state, &PlayRequest::new(&active, index).with_target(0)).unwrap();
    engine::resolve_interrupt(&mut state, false).unwrap();

    assert!(state
        .log()
        .iter()
        .any(|entry| entry == &format!("{decliner} did not interrupt.")));
}

#[test]
fn test_resolve_without_pending_is_rejected() {
    let mut state = joined_match(42);
    for accept in [true, false] {
        let err = engine::resolve_interrupt(&mut state, accept).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase { .. }));
    }
}
