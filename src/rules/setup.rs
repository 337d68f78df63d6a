//! Game construction: shuffle, deal, initial state.

use rustc_hash::FxHashSet;
use tracing::info;

use crate::cards::{build_deck, shuffle};
use crate::core::{GameConfig, GameRng, GameState, Player, PlayerSeat, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::SetupError;
use crate::zones::Pile;

/// Build a game in progress for `seats`, player 0 to act.
///
/// Cards are dealt one at a time round-robin, `hand_size` rounds, each
/// taken from the top of the shuffled deck. What is left becomes the draw
/// pile in shuffled order. The seed used (drawn from entropy if `None`) is
/// kept on the state.
pub(crate) fn deal(
    config: &GameConfig,
    seats: &[PlayerSeat],
    seed: Option<u64>,
) -> Result<GameState, SetupError> {
    validate_seats(seats)?;

    let mut rng = GameRng::from_optional_seed(seed);
    let mut deck = shuffle(build_deck(), &mut rng);

    let mut players: Vec<Player> = seats.iter().cloned().map(Player::new).collect();
    for _ in 0..config.hand_size {
        for player in &mut players {
            if let Some(card) = deck.pop() {
                player.hand.push(card);
            }
        }
    }

    let state = GameState::new(players, Pile::from_cards(deck), config.starting_threshold, rng.seed());
    info!(
        players = state.player_count(),
        seed = state.seed(),
        draw = state.draw_pile().len(),
        "game created"
    );
    Ok(state)
}

fn validate_seats(seats: &[PlayerSeat]) -> Result<(), SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats.len()) {
        return Err(SetupError::InvalidPlayerCount { count: seats.len() });
    }

    let mut seen = FxHashSet::default();
    for seat in seats {
        if !seen.insert(&seat.id) {
            return Err(SetupError::DuplicatePlayer(seat.id.clone()));
        }
    }
    Ok(())
}
