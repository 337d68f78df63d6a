//! The transition function: state + actor + action -> next state.
//!
//! ## Order of a turn
//!
//! 1. Status and turn checks
//! 2. Top-up: draw until the hand holds `hand_size` cards (if the draw pile
//!    allows)
//! 3. Pickup, or play:
//!    - rank effect (7 sets ≤7, 8 sets skip, J resets threshold to J,
//!      2 resets it to 2), unless the play is under ≤7
//!    - burn on a 10 or four-of-a-kind on top, unless under ≤7
//!    - threshold bump from the table top
//!    - ≤7 consumed
//! 4. Finish mark for an emptied hand
//! 5. Turn advance (none on replay), with skip
//! 6. End of game when at most one player still holds cards
//!
//! The whole turn runs on a copy of the state which replaces the original
//! only on success, so a rejected action changes nothing, top-up included.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::legality::{check_play, four_of_a_kind_on_top};
use crate::cards::{Card, CardId, Rank};
use crate::core::{ClientAction, Clock, GameConfig, GameState, GameStatus, MoveResult, Player, PlayerId};
use crate::error::Rejection;

/// Apply `action` by `actor`. On rejection `state` is left untouched.
pub(crate) fn apply_action<C: Clock>(
    config: &GameConfig,
    clock: &C,
    state: &mut GameState,
    actor: &PlayerId,
    action: &ClientAction,
) -> Result<MoveResult, Rejection> {
    let mut next = state.clone();
    match step(config, clock, &mut next, actor, action) {
        Ok(result) => {
            *state = next;
            Ok(result)
        }
        Err(reason) => {
            debug!(player = %actor, %reason, "action rejected");
            Err(reason)
        }
    }
}

fn step<C: Clock>(
    config: &GameConfig,
    clock: &C,
    state: &mut GameState,
    actor: &PlayerId,
    action: &ClientAction,
) -> Result<MoveResult, Rejection> {
    if state.status != GameStatus::Playing {
        return Err(Rejection::NotPlaying {
            status: state.status,
        });
    }

    let seat = state
        .seat_of(actor)
        .ok_or_else(|| Rejection::UnknownPlayer(actor.clone()))?;
    if seat != state.current {
        return Err(Rejection::NotYourTurn {
            actor: actor.clone(),
            current: state.players[state.current].id.clone(),
        });
    }

    let drawn = state.top_up(seat, config.hand_size);
    if drawn > 0 {
        trace!(player = %actor, drawn, "topped up hand");
    }

    let result = match action {
        ClientAction::Pickup => pickup(state, seat)?,
        ClientAction::Play { card_ids } => play(clock, state, seat, card_ids)?,
    };

    state.record(actor.clone(), action.clone());
    debug!(
        player = %actor,
        played = result.played.len(),
        rank = ?result.played.first().map(|c| c.rank),
        burned = result.burned,
        replay = result.replay,
        picked_up = result.picked_up,
        threshold = %result.threshold,
        "move applied"
    );
    Ok(result)
}

fn pickup(state: &mut GameState, seat: usize) -> Result<MoveResult, Rejection> {
    if state.table_pile.is_empty() {
        return Err(Rejection::NothingToPickUp);
    }

    let run = state.table_pile.take_all();
    state.players[seat].hand.extend(run);

    // Picking up consumes a pending ≤7 constraint
    let specials_suppressed = std::mem::take(&mut state.le7_active);

    let result = MoveResult {
        player_id: state.players[seat].id.clone(),
        played: Vec::new(),
        burned: false,
        replay: true,
        skip_applied: false,
        le7_set: false,
        specials_suppressed,
        threshold: state.threshold,
        picked_up: true,
    };
    state.last_move = Some(result.clone());
    Ok(result)
}

fn play<C: Clock>(
    clock: &C,
    state: &mut GameState,
    seat: usize,
    card_ids: &[CardId],
) -> Result<MoveResult, Rejection> {
    let selected = select_cards(&state.players[seat], card_ids)?;
    let rank = check_play(state, &state.players[seat], &selected)?;

    for &id in card_ids {
        if let Some(card) = state.players[seat].take_card(id) {
            state.table_pile.push(card);
        }
    }

    let specials_suppressed = state.le7_active;
    let mut le7_set = false;
    let mut skip_applied = false;
    let mut burned = false;

    if !specials_suppressed {
        match rank {
            Rank::Seven => {
                state.le7_active = true;
                le7_set = true;
            }
            Rank::Eight => {
                state.skip_next = true;
                skip_applied = true;
            }
            Rank::Jack => state.threshold = Rank::Jack,
            Rank::Two => state.threshold = Rank::Two,
            _ => {}
        }

        if rank == Rank::Ten || four_of_a_kind_on_top(&state.table_pile) {
            let run = state.table_pile.take_all();
            state.discard_pile.extend(run);
            burned = true;
            // Clears ≤7 only; a pending skip fires on the next advance
            state.le7_active = false;
        }
    }
    let replay = burned;

    if !burned {
        let fresh_reset = !specials_suppressed && matches!(rank, Rank::Two | Rank::Jack);
        if let Some(top_rank) = state.table_pile.top().map(|c| c.rank) {
            if !fresh_reset {
                state.threshold = state.threshold.max(top_rank);
            }
        }
    }

    if specials_suppressed {
        state.le7_active = false;
    }

    let result = MoveResult {
        player_id: state.players[seat].id.clone(),
        played: selected,
        burned,
        replay,
        skip_applied,
        le7_set,
        specials_suppressed,
        threshold: state.threshold,
        picked_up: false,
    };
    state.last_move = Some(result.clone());

    let player = &mut state.players[seat];
    if player.hand.is_empty() && player.finished_at.is_none() {
        player.finished_at = Some(clock.now_ms());
        state.winners.push(player.id.clone());
        info!(player = %player.id, place = state.winners.len(), "player finished");
    }

    // A finished player cannot keep the turn, even on a replay
    if !replay || state.players[seat].is_finished() {
        advance_turn(state, seat);
    }

    check_end(clock, state);
    Ok(result)
}

/// Resolve ids against the hand, keeping the given order.
fn select_cards(player: &Player, card_ids: &[CardId]) -> Result<Vec<Card>, Rejection> {
    if card_ids.is_empty() {
        return Err(Rejection::EmptySelection);
    }

    let mut seen = FxHashSet::default();
    card_ids
        .iter()
        .map(|&id| {
            if !seen.insert(id) {
                return Err(Rejection::DuplicateCard(id));
            }
            player
                .hand()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or(Rejection::CardNotOwned(id))
        })
        .collect()
}

fn advance_turn(state: &mut GameState, seat: usize) {
    let mut next = state.next_active_after(seat);
    if state.skip_next {
        state.skip_next = false;
        next = next.and_then(|s| state.next_active_after(s));
    }
    if let Some(next) = next {
        state.current = next;
    }
}

/// Finish the game once at most one player still holds cards. That player
/// takes the last place.
fn check_end<C: Clock>(clock: &C, state: &mut GameState) {
    if state.status != GameStatus::Playing {
        return;
    }

    let remaining: SmallVec<[usize; 4]> = state.active_seats().collect();
    if remaining.len() > 1 {
        return;
    }

    if let Some(&last) = remaining.first() {
        let player = &mut state.players[last];
        player.finished_at = Some(clock.now_ms());
        state.winners.push(player.id.clone());
    }
    state.status = GameStatus::Finished;
    info!(winners = ?state.winners, "game finished");
}
