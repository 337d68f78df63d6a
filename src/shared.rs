//! A game instance shared between threads.
//!
//! Actions on one `SharedGame` are serialized by its mutex, so two
//! players acting at once can never interleave inside a transition.
//! Separate instances share nothing and run independently.
//!
//! ```
//! use norwegian_war::core::{ClientAction, GameConfig, PlayerSeat};
//! use norwegian_war::rules::Engine;
//! use norwegian_war::shared::SharedGame;
//!
//! let seats = [PlayerSeat::new("a", "A"), PlayerSeat::new("b", "B")];
//! let game = SharedGame::create(Engine::new(GameConfig::default()), &seats, Some(3)).unwrap();
//!
//! let handle = game.clone();
//! std::thread::spawn(move || {
//!     // Off turn: rejected, nothing changes
//!     assert!(handle.act(&"b".into(), &ClientAction::Pickup).is_err());
//! })
//! .join()
//! .unwrap();
//!
//! assert!(game.view(&"a".into()).is_your_turn());
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{CardSet, ClientAction, Clock, GameState, MoveResult, PlayerId, PlayerSeat, SystemClock};
use crate::error::{Rejection, SetupError, SnapshotError};
use crate::rules::Engine;
use crate::view::PlayerView;

/// Engine plus one game state behind a lock.
pub struct SharedGame<C: Clock = SystemClock> {
    engine: Arc<Engine<C>>,
    state: Arc<Mutex<GameState>>,
}

// Manual impl: cloning a handle must not require `C: Clone`.
impl<C: Clock> Clone for SharedGame<C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: Clock> SharedGame<C> {
    /// Wrap an existing state.
    pub fn new(engine: Engine<C>, state: GameState) -> Self {
        Self {
            engine: Arc::new(engine),
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Create a fresh game and wrap it.
    pub fn create(engine: Engine<C>, seats: &[PlayerSeat], seed: Option<u64>) -> Result<Self, SetupError> {
        let state = engine.create_game(seats, seed)?;
        Ok(Self::new(engine, state))
    }

    /// Apply an action under the lock.
    pub fn act(&self, actor: &PlayerId, action: &ClientAction) -> Result<MoveResult, Rejection> {
        let mut state = self.state.lock();
        self.engine.apply_action(&mut state, actor, action)
    }

    #[must_use]
    pub fn view(&self, viewer: &PlayerId) -> PlayerView {
        self.engine.view(&self.state.lock(), viewer)
    }

    #[must_use]
    pub fn legal_moves(&self, player: &PlayerId) -> Vec<CardSet> {
        self.engine.legal_moves(&self.state.lock(), player)
    }

    /// Copy of the full state. Private hands included; not for clients.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Encoded copy of the full state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        self.state.lock().to_bytes()
    }

    /// Run `f` with the state locked for reading.
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.state.lock())
    }
}
