//! The rules engine.
//!
//! `Engine` owns what every game it runs shares (configuration and the
//! clock that stamps finish marks) and exposes the four boundary
//! operations: create, act, view, legal moves. Game state is a separate
//! value the caller owns and hands in by reference.
//!
//! ```
//! use norwegian_war::core::{ClientAction, PlayerSeat};
//! use norwegian_war::rules::Engine;
//!
//! let engine: Engine = Engine::default();
//! let seats = [PlayerSeat::new("alice", "Alice"), PlayerSeat::new("bob", "Bob")];
//! let mut state = engine.create_game(&seats, Some(42)).unwrap();
//!
//! let alice = seats[0].id.clone();
//! let moves = engine.legal_moves(&state, &alice);
//! assert!(!moves.is_empty());
//!
//! engine.apply_action(&mut state, &alice, &ClientAction::play(&moves[0])).unwrap();
//! assert_eq!(state.history().len(), 1);
//! ```

use tracing::debug;

use super::legality::{check_play, legal_moves};
use super::{setup, transition};
use crate::cards::{Card, Rank};
use crate::core::{
    ActionRecord, CardSet, ClientAction, Clock, GameConfig, GameState, MoveResult, PlayerId, PlayerSeat,
    SystemClock,
};
use crate::error::{Rejection, ReplayError, SetupError};
use crate::view::PlayerView;

/// Rules engine for Norwegian War.
///
/// Stateless apart from configuration, so one engine can serve any number
/// of games.
#[derive(Clone, Debug, Default)]
pub struct Engine<C: Clock = SystemClock> {
    config: GameConfig,
    clock: C,
}

impl Engine<SystemClock> {
    /// Create an engine with the given configuration and the system clock.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Engine<C> {
    /// Create an engine with a custom clock.
    #[must_use]
    pub fn with_clock(config: GameConfig, clock: C) -> Self {
        Self { config, clock }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle, deal, and start a game.
    ///
    /// Fails only when the seats are unusable: fewer than 2, more than 4,
    /// or the same id twice.
    pub fn create_game(&self, seats: &[PlayerSeat], seed: Option<u64>) -> Result<GameState, SetupError> {
        setup::deal(&self.config, seats, seed)
    }

    /// Apply one action.
    ///
    /// On `Err` the state is exactly as it was before the call.
    pub fn apply_action(
        &self,
        state: &mut GameState,
        actor: &PlayerId,
        action: &ClientAction,
    ) -> Result<MoveResult, Rejection> {
        transition::apply_action(&self.config, &self.clock, state, actor, action)
    }

    /// Would `player` be allowed to play `cards` right now, turn order aside?
    ///
    /// Returns the rank that would be played.
    pub fn can_play_set(&self, state: &GameState, player: &PlayerId, cards: &[Card]) -> Result<Rank, Rejection> {
        let seat = state
            .seat_of(player)
            .ok_or_else(|| Rejection::UnknownPlayer(player.clone()))?;
        check_play(state, &state.players()[seat], cards)
    }

    /// Legal plays for `player`. Empty unless it is their turn.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState, player: &PlayerId) -> Vec<CardSet> {
        legal_moves(state, player)
    }

    /// Project the state for `viewer`.
    #[must_use]
    pub fn view(&self, state: &GameState, viewer: &PlayerId) -> PlayerView {
        PlayerView::new(state, viewer)
    }

    /// Rebuild a game from its seed and accepted actions.
    ///
    /// The records must be in order; the first one that is rejected stops
    /// the replay.
    pub fn replay<'a>(
        &self,
        seats: &[PlayerSeat],
        seed: u64,
        records: impl IntoIterator<Item = &'a ActionRecord>,
    ) -> Result<GameState, ReplayError> {
        let mut state = self.create_game(seats, Some(seed))?;
        for record in records {
            self.apply_action(&mut state, &record.player, &record.action)
                .map_err(|reason| ReplayError::Rejected {
                    sequence: record.sequence,
                    reason,
                })?;
        }
        debug!(actions = state.history().len(), "game replayed");
        Ok(state)
    }
}
