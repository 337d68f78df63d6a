//! # norwegian-war
//!
//! Rules engine for Norwegian War, a shedding card game for 2 to 4 players.
//!
//! ## Design Principles
//!
//! 1. **State is a value**: A game is a `GameState` owned by the caller.
//!    The engine holds no per-game data, so any number of games run side by
//!    side without coordination.
//!
//! 2. **One transition**: Every change goes through `apply_action`, which
//!    either commits a whole turn or rejects it with the state untouched.
//!
//! 3. **Hands stay private**: The only sanctioned projection for a remote
//!    player is `PlayerView`, which carries counts for every hand but the
//!    viewer's own.
//!
//! ## Modules
//!
//! - `core`: Ids, players, actions, state, RNG, configuration, clock
//! - `cards`: Ranks, suits, cards, deck construction
//! - `zones`: Piles and card locations
//! - `rules`: Setup, legality, transition, and the `Engine`
//! - `view`: Per-viewer snapshots
//! - `shared`: A game behind a lock for multi-threaded hosts
//! - `error`: Setup errors and action rejections
//!
//! ## Example
//!
//! ```
//! use norwegian_war::{apply_action, create_game, get_legal_moves, get_view};
//! use norwegian_war::{ClientAction, PlayerSeat};
//!
//! let seats = vec![PlayerSeat::new("alice", "Alice"), PlayerSeat::new("bob", "Bob")];
//! let mut state = create_game(&seats, Some(42)).unwrap();
//!
//! let alice = &seats[0].id;
//! let action = match get_legal_moves(&state, alice).first() {
//!     Some(set) => ClientAction::play(set),
//!     None => ClientAction::Pickup,
//! };
//! apply_action(&mut state, alice, &action).unwrap();
//!
//! let view = get_view(&state, &seats[1].id);
//! assert_eq!(view.players.len(), 2);
//! assert!(view.you.is_some());
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod shared;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, CardSet, ClientAction, Clock, FixedClock, GameConfig, GameRng, GameState, GameStatus,
    MoveResult, Player, PlayerId, PlayerSeat, SystemClock, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::cards::{Card, CardId, Rank, Suit};

pub use crate::zones::{Pile, Zone};

pub use crate::rules::Engine;

pub use crate::view::{PlayerView, PrivatePlayer, PublicPlayer};

pub use crate::shared::SharedGame;

pub use crate::error::{Rejection, ReplayError, SetupError, SnapshotError};

// Free functions over a default engine (hand size 3, system clock).

/// Create a game with the default configuration.
pub fn create_game(seats: &[PlayerSeat], seed: Option<u64>) -> Result<GameState, SetupError> {
    Engine::new(GameConfig::default()).create_game(seats, seed)
}

/// Apply an action with the default configuration.
pub fn apply_action(state: &mut GameState, actor: &PlayerId, action: &ClientAction) -> Result<MoveResult, Rejection> {
    Engine::new(GameConfig::default()).apply_action(state, actor, action)
}

/// Check whether `player` may play `cards`, ignoring turn order.
pub fn can_play_set(state: &GameState, player: &PlayerId, cards: &[Card]) -> Result<Rank, Rejection> {
    Engine::new(GameConfig::default()).can_play_set(state, player, cards)
}

/// Project `state` for `viewer`.
#[must_use]
pub fn get_view(state: &GameState, viewer: &PlayerId) -> PlayerView {
    PlayerView::new(state, viewer)
}

/// Legal plays for `player`; empty unless it is their turn.
#[must_use]
pub fn get_legal_moves(state: &GameState, player: &PlayerId) -> Vec<CardSet> {
    rules::legal_moves(state, player)
}
