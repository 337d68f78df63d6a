//! Core engine types: players, actions, state, RNG, configuration, clock.

pub mod action;
pub mod clock;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, CardSet, ClientAction};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Player, PlayerId, PlayerSeat};
pub use rng::GameRng;
pub use state::{GameState, GameStatus, MoveResult};
