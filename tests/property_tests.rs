//! Property tests over random command sequences.
//!
//! Invariants checked after every command:
//! - a rejected command leaves the state unchanged
//! - the roster never exceeds its seat cap and holds no blank names
//! - once play starts, every score row has one cell per player
//! - the dealer is always a seated player
//! - the round never moves backwards except through reset
//! - a completed game accepts no further scores

use five_crowns::core::{Command, GameState, Phase, Round};
use five_crowns::rules::rankings;
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Ann".to_string()),
        Just("Bob".to_string()),
        Just("bob".to_string()),
        Just(" Cy ".to_string()),
        Just("".to_string()),
        "[A-Za-z ]{0,6}",
    ]
}

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|v| v.to_string()),
        Just("".to_string()),
        Just("-4".to_string()),
        Just("x".to_string()),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => arb_name().prop_map(Command::add_player),
        1 => (0usize..10).prop_map(|index| Command::RemovePlayer { index }),
        1 => (0usize..10, arb_name()).prop_map(|(i, n)| Command::rename_player(i, n)),
        2 => Just(Command::Start),
        8 => (0usize..9, arb_value()).prop_map(|(p, v)| Command::set_score(p, v)),
        1 => (0usize..9, arb_value(), 0u8..13).prop_map(|(player, value, round)| {
            Command::SetScore { player, value, round: Some(round) }
        }),
        4 => Just(Command::CompleteRound),
        1 => Just(Command::Reset),
    ]
}

fn check_invariants(state: &GameState) {
    let len = state.player_count();
    assert!(len <= state.config().seat_cap());
    assert!(state.players().iter().all(|(_, name)| !name.trim().is_empty()));

    if state.phase() == Phase::Setup {
        assert!(state.scores().is_empty());
    } else {
        assert_eq!(state.scores().rows().count(), 11);
        for (_, row) in state.scores().rows() {
            assert_eq!(row.player_count(), len);
        }
    }

    if len > 0 {
        assert!(state.current_dealer().index() < len);
    }
}

proptest! {
    /// Any command sequence keeps the invariants above.
    #[test]
    fn prop_commands_preserve_invariants(commands in prop::collection::vec(arb_command(), 0..200)) {
        let mut state = GameState::default();

        for command in &commands {
            let before = state.clone();
            let result = state.apply(command);

            check_invariants(&state);

            match result {
                Err(_) => prop_assert_eq!(&state, &before),
                Ok(_) if *command == Command::Reset => {
                    prop_assert_eq!(state.phase(), Phase::Setup);
                }
                Ok(_) => {
                    prop_assert!(state.current_round() >= before.current_round());
                    if before.phase() == Phase::Complete {
                        prop_assert!(false, "completed game accepted {:?}", command);
                    }
                }
            }
        }
    }

    /// Standings ascend by total and ties keep seat order.
    #[test]
    fn prop_rankings_sorted_and_stable(scores in prop::collection::vec(0u32..30, 2..=8)) {
        let mut state = GameState::default();
        for i in 0..scores.len() {
            state.add_player(&format!("P{i}")).unwrap();
        }
        state.start().unwrap();
        for (player, score) in scores.iter().enumerate() {
            state.set_score(player, &score.to_string()).unwrap();
        }

        let standings = rankings(&state);
        prop_assert_eq!(standings.len(), scores.len());
        for pair in standings.windows(2) {
            prop_assert!(pair[0].total <= pair[1].total);
            if pair[0].total == pair[1].total {
                prop_assert!(pair[0].player < pair[1].player);
            }
        }
        for (position, standing) in standings.iter().enumerate() {
            prop_assert_eq!(standing.position, position);
            prop_assert_eq!(standing.total, u64::from(scores[standing.player.index()]));
        }
    }

    /// A round closes only when every cell in it is set.
    #[test]
    fn prop_complete_round_needs_full_row(filled in prop::collection::vec(any::<bool>(), 2..=8)) {
        let mut state = GameState::default();
        for i in 0..filled.len() {
            state.add_player(&format!("P{i}")).unwrap();
        }
        state.start().unwrap();
        for (player, set) in filled.iter().enumerate() {
            if *set {
                state.set_score(player, "1").unwrap();
            }
        }

        let advanced = state.complete_round().is_ok();
        prop_assert_eq!(advanced, filled.iter().all(|s| *s));
        let expected = if advanced { Round::new(2).unwrap() } else { Round::FIRST };
        prop_assert_eq!(state.current_round(), expected);
    }
}
