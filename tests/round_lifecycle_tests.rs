//! Round lifecycle: start, score entry, round completion, end of game.

use five_crowns::core::{cards_dealt_for, wild_card_for, Command, GameState, Phase, PlayerId, Round};
use five_crowns::rules::{step, Transition};
use five_crowns::GameError;

fn started(names: &[&str]) -> GameState {
    let mut state = GameState::default();
    for name in names {
        state.add_player(name).unwrap();
    }
    state.start().unwrap();
    state
}

fn fill_round(state: &mut GameState, scores: &[u32]) {
    for (player, score) in scores.iter().enumerate() {
        state.set_score(player, &score.to_string()).unwrap();
    }
}

/// Start allocates an 11 x players grid of unset cells.
#[test]
fn test_start_allocates_grid() {
    let state = started(&["A", "B", "C"]);

    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.current_round(), Round::FIRST);
    assert_eq!(state.current_dealer(), PlayerId::new(0));
    assert_eq!(state.scores().rows().count(), 11);
    for (_, row) in state.scores().rows() {
        assert_eq!(row.player_count(), 3);
        assert!(row.values().all(Option::is_none));
    }
}

/// The deal size and wild rank follow the fixed schedule.
#[test]
fn test_schedule_lookups() {
    assert_eq!(cards_dealt_for(1), Ok(3));
    assert_eq!(cards_dealt_for(11), Ok(13));
    assert_eq!(wild_card_for(1).unwrap().label(), "3");
    assert_eq!(wild_card_for(8).unwrap().label(), "10");
    assert_eq!(wild_card_for(11).unwrap().label(), "K");

    assert_eq!(cards_dealt_for(0), Err(GameError::RoundOutOfRange(0)));
    assert_eq!(wild_card_for(12), Err(GameError::RoundOutOfRange(12)));
}

/// Repeated completes without scores never advance the round.
#[test]
fn test_complete_round_without_scores_is_noop() {
    let mut state = started(&["A", "B"]);
    let before = state.clone();

    for _ in 0..5 {
        assert!(state.complete_round().is_err());
    }
    assert_eq!(state, before);

    state.set_score(0, "4").unwrap();
    assert_eq!(
        state.complete_round(),
        Err(GameError::RoundIncomplete { round: 1, missing: 1 })
    );
    assert_eq!(state.current_round(), Round::FIRST);
}

/// Clearing a cell with malformed input reopens the round.
#[test]
fn test_clearing_cell_blocks_completion() {
    let mut state = started(&["A", "B"]);
    fill_round(&mut state, &[3, 4]);
    assert!(state.is_round_complete());

    state.set_score(1, "").unwrap();
    assert!(!state.is_round_complete());
    assert!(state.complete_round().is_err());
}

/// With four players the dealer cycles 0,1,2,3,0.
#[test]
fn test_dealer_rotation() {
    let mut state = started(&["A", "B", "C", "D"]);
    let mut dealers = vec![state.current_dealer().index()];

    for _ in 0..4 {
        fill_round(&mut state, &[1, 2, 3, 4]);
        state.complete_round().unwrap();
        dealers.push(state.current_dealer().index());
    }
    assert_eq!(dealers, vec![0, 1, 2, 3, 0]);
    assert_eq!(state.current_round().number(), 5);
    assert_eq!(state.cards_dealt(), 7);
    assert_eq!(state.wild_card().label(), "7");
}

/// Closed rounds keep their scores.
#[test]
fn test_history_is_immutable() {
    let mut state = started(&["A", "B"]);
    fill_round(&mut state, &[10, 20]);
    state.complete_round().unwrap();

    let closed = Command::SetScore {
        player: 0,
        value: "0".to_string(),
        round: Some(1),
    };
    assert!(state.apply(&closed).is_err());
    assert_eq!(state.scores().get(Round::FIRST, PlayerId::new(0)), Some(10));
}

/// Eleven full rounds end the game, and the game stays frozen.
#[test]
fn test_full_game_completes() {
    let mut state = started(&["A", "B", "C"]);

    for round in 1..=11u32 {
        fill_round(&mut state, &[round, 0, 2]);
        let transition = state.complete_round().unwrap();
        if round < 11 {
            assert!(matches!(transition, Transition::RoundAdvanced { .. }));
        } else {
            assert_eq!(transition, Transition::GameCompleted);
        }
    }

    assert_eq!(state.phase(), Phase::Complete);
    assert_eq!(state.total_for(0), Some(66));
    assert_eq!(state.total_for(1), Some(0));
    assert_eq!(state.total_for(2), Some(22));

    let frozen = state.clone();
    for command in [
        Command::set_score(0, "1"),
        Command::CompleteRound,
        Command::Start,
        Command::add_player("D"),
    ] {
        assert!(state.apply(&command).is_err());
    }
    assert_eq!(state, frozen);
}

/// Totals are computable mid-game with unset cells counting zero.
#[test]
fn test_mid_game_totals() {
    let mut state = started(&["A", "B"]);
    fill_round(&mut state, &[5, 9]);
    state.complete_round().unwrap();
    state.set_score(0, "7").unwrap();

    assert_eq!(state.total_for(0), Some(12));
    assert_eq!(state.total_for(1), Some(9));
    assert_eq!(state.total_for(2), None);
}

/// Values above the entry hint are stored as entered.
#[test]
fn test_scores_are_not_clamped() {
    let mut state = started(&["A", "B"]);
    state.set_score(0, "1500").unwrap();
    assert_eq!(state.current_score(PlayerId::new(0)), Some(1500));
}

/// step leaves the input state alone and returns the successor.
#[test]
fn test_step_is_pure() {
    let state = started(&["A", "B"]);
    let next = step(&state, &Command::set_score(0, "8")).unwrap();

    assert_eq!(state.current_score(PlayerId::new(0)), None);
    assert_eq!(next.current_score(PlayerId::new(0)), Some(8));
}
