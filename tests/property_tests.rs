//! Property tests over random games.
//!
//! Properties tested, after every accepted action:
//! - Every card of the deck is in exactly one place
//! - The player to act has not finished
//! - The threshold only drops through a fresh 2 or J
//! - A pending ≤7 constraint is gone after one action
//! - A burn or pickup keeps the turn (unless the actor just finished)
//! - An 8's skip, burned or not, lands on the actor's next advance
//! - A rejected action changes nothing, however often it is repeated

mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;

use common::{current, engine, seats};
use norwegian_war::{CardId, ClientAction, GameState, GameStatus, MoveResult, PlayerId, Rank};

/// Every action available to the current player: each legal play, plus
/// pickup when the table has cards.
fn options(state: &GameState) -> Vec<ClientAction> {
    let Some(actor) = state.current_player() else {
        return Vec::new();
    };
    let mut all: Vec<ClientAction> = norwegian_war::get_legal_moves(state, &actor.id)
        .iter()
        .map(|set| ClientAction::play(set))
        .collect();
    if !state.table_pile().is_empty() {
        all.push(ClientAction::Pickup);
    }
    all
}

fn assert_conserved(state: &GameState) -> Result<(), TestCaseError> {
    let ids: BTreeSet<u32> = state.all_cards().map(|c| c.id.raw()).collect();
    prop_assert_eq!(state.card_count(), 52);
    prop_assert_eq!(ids.len(), 52, "duplicate card ids");
    prop_assert_eq!(ids.iter().next().copied(), Some(1));
    prop_assert_eq!(ids.iter().next_back().copied(), Some(52));
    Ok(())
}

fn assert_turn_valid(state: &GameState) -> Result<(), TestCaseError> {
    if state.status() == GameStatus::Playing {
        let player = state.current_player().expect("current seat exists");
        prop_assert!(!player.is_finished(), "{} is to act but has finished", player.id);
        prop_assert!(!state.winners().contains(&player.id));
    }
    Ok(())
}

fn assert_move_rules(
    before: &GameState,
    after: &GameState,
    actor_seat: usize,
    result: &MoveResult,
) -> Result<(), TestCaseError> {
    // Threshold never drops except through a fresh 2 or J
    let fresh_reset = !result.specials_suppressed
        && result
            .played
            .first()
            .is_some_and(|c| matches!(c.rank, Rank::Two | Rank::Jack));
    if !fresh_reset {
        prop_assert!(after.threshold() >= before.threshold());
    }

    if before.le7_active() {
        prop_assert!(!after.le7_active(), "≤7 survived the move made under it");
        prop_assert!(result.specials_suppressed);
    }

    if after.status() != GameStatus::Playing {
        return Ok(());
    }
    let actor_finished = after.players()[actor_seat].is_finished();

    if result.replay && !actor_finished {
        prop_assert_eq!(after.current_seat(), actor_seat);
    }

    // A skip pending before the move or set by it lands on the next advance
    let skipping = before.skip_next() || result.skip_applied;
    if !result.replay || actor_finished {
        let once = after.next_active_after(actor_seat);
        let expected = if skipping {
            once.and_then(|s| after.next_active_after(s))
        } else {
            once
        };
        prop_assert_eq!(Some(after.current_seat()), expected);
        prop_assert!(!after.skip_next());
    } else {
        prop_assert_eq!(after.skip_next(), skipping);
    }
    Ok(())
}

/// Actions that must be rejected: someone else acting, and a card nobody
/// holds.
fn illegal_actions(state: &GameState) -> Vec<(PlayerId, ClientAction)> {
    let current = current(state);
    let mut bad = vec![(current.clone(), ClientAction::play(&[CardId::new(999)]))];
    if let Some(other) = state.players().iter().find(|p| p.id != current) {
        bad.push((other.id.clone(), ClientAction::Pickup));
    }
    bad
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_games_keep_invariants(
        seed in any::<u64>(),
        players in 2usize..=4,
        choices in prop::collection::vec(any::<u16>(), 1..200),
    ) {
        let engine = engine();
        let mut state = engine.create_game(&seats(players), Some(seed)).unwrap();
        assert_conserved(&state)?;

        for choice in choices {
            if state.is_finished() {
                break;
            }

            let available = options(&state);
            if available.is_empty() {
                // Parked: no legal play and nothing to pick up
                break;
            }
            let action = &available[choice as usize % available.len()];
            let actor = current(&state);
            let actor_seat = state.current_seat();
            let before = state.clone();

            let result = engine.apply_action(&mut state, &actor, action);
            prop_assert!(result.is_ok(), "offered action rejected: {:?}", result);
            let result = result.unwrap();

            assert_conserved(&state)?;
            assert_turn_valid(&state)?;
            assert_move_rules(&before, &state, actor_seat, &result)?;
            prop_assert_eq!(state.last_move(), Some(&result));
            prop_assert_eq!(state.history().len(), before.history().len() + 1);
        }
    }

    #[test]
    fn prop_rejections_are_idempotent(
        seed in any::<u64>(),
        players in 2usize..=4,
        choices in prop::collection::vec(any::<u16>(), 0..60),
    ) {
        let engine = engine();
        let mut state = engine.create_game(&seats(players), Some(seed)).unwrap();

        for choice in choices {
            if state.is_finished() {
                break;
            }

            for (actor, action) in illegal_actions(&state) {
                let before = state.clone();
                let first = engine.apply_action(&mut state, &actor, &action);
                prop_assert!(first.is_err());
                prop_assert_eq!(&state, &before);

                let second = engine.apply_action(&mut state, &actor, &action);
                prop_assert_eq!(first, second);
                prop_assert_eq!(&state, &before);
            }

            let available = options(&state);
            if available.is_empty() {
                break;
            }
            let action = &available[choice as usize % available.len()];
            let actor = current(&state);
            prop_assert!(engine.apply_action(&mut state, &actor, action).is_ok());
        }
    }

    #[test]
    fn prop_history_replays_to_same_state(
        seed in any::<u64>(),
        players in 2usize..=4,
        choices in prop::collection::vec(any::<u16>(), 0..80),
    ) {
        let engine = engine();
        let table = seats(players);
        let mut state = engine.create_game(&table, Some(seed)).unwrap();

        for choice in choices {
            let available = options(&state);
            if state.is_finished() || available.is_empty() {
                break;
            }
            let action = &available[choice as usize % available.len()];
            let actor = current(&state);
            engine.apply_action(&mut state, &actor, action).unwrap();
        }

        let rebuilt = engine.replay(&table, seed, state.history().iter()).unwrap();
        prop_assert_eq!(rebuilt, state);
    }

    #[test]
    fn prop_deal_is_a_function_of_seed(seed in any::<u64>(), players in 2usize..=4) {
        let engine = engine();
        let a = engine.create_game(&seats(players), Some(seed)).unwrap();
        let b = engine.create_game(&seats(players), Some(seed)).unwrap();

        prop_assert_eq!(&a, &b);
        assert_conserved(&a)?;
        for player in a.players() {
            prop_assert_eq!(player.hand_count(), 3);
        }
        prop_assert_eq!(a.draw_pile().len(), 52 - 3 * players);
    }
}
