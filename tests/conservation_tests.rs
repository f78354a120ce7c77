//! Property tests for card conservation.
//!
//! Whatever sequence of actions a pair of clients throws at a match,
//! valid or not, each player's four zones must always sum to the full
//! 34-card deck. Rejected actions must also leave the totals alone.

use proptest::prelude::*;

use brightcast::engine;
use brightcast::{MatchId, MatchRng, MatchState, PlayRequest};

#[derive(Clone, Debug)]
enum Action {
    Draw,
    Skip,
    Play { card: usize, target: usize },
    PlayMulti { card: usize, targets: Vec<usize> },
    Discard { index: usize },
    Resolve { accept: bool },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Draw),
        Just(Action::Skip),
        (0usize..12, 0usize..6).prop_map(|(card, target)| Action::Play { card, target }),
        (0usize..12, prop::collection::vec(0usize..6, 0..3))
            .prop_map(|(card, targets)| Action::PlayMulti { card, targets }),
        (0usize..12).prop_map(|index| Action::Discard { index }),
        any::<bool>().prop_map(|accept| Action::Resolve { accept }),
    ]
}

fn apply(state: &mut MatchState, action: &Action) {
    let name = state.current_player().name().to_string();
    let _ = match action {
        Action::Draw => engine::draw(state, &name),
        Action::Skip => engine::skip_turn(state, &name),
        Action::Play { card, target } => {
            engine::play_card(state, &PlayRequest::new(&name, *card).with_target(*target))
        }
        Action::PlayMulti { card, targets } => {
            engine::play_card(state, &PlayRequest::new(&name, *card).with_targets(targets))
        }
        Action::Discard { index } => engine::discard_card(state, &name, *index),
        Action::Resolve { accept } => engine::resolve_interrupt(state, *accept),
    };
}

proptest! {
    #[test]
    fn test_any_action_sequence_conserves_cards(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..80),
    ) {
        let mut state = MatchState::new(MatchId::new("PROP"), "Alice", MatchRng::seeded(seed));
        engine::join(&mut state, "Bob").unwrap();

        for action in &actions {
            apply(&mut state, action);
            prop_assert_eq!(state.host().zone_total(), 34);
            prop_assert_eq!(state.guest().unwrap().zone_total(), 34);
        }
    }

    #[test]
    fn test_hands_never_exceed_limit_after_a_completed_turn(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..80),
    ) {
        let mut state = MatchState::new(MatchId::new("PROP"), "Alice", MatchRng::seeded(seed));
        engine::join(&mut state, "Bob").unwrap();

        for action in &actions {
            apply(&mut state, action);
            // At a clean turn boundary the player who just finished must
            // have been through the hand-limit check.
            if state.status() == brightcast::MatchStatus::Playing
                && state.phase() == brightcast::TurnPhase::Draw
            {
                if let Some(opponent) = state.opponent() {
                    prop_assert!(opponent.hand_size() <= engine::HAND_LIMIT);
                }
            }
        }
    }
}
