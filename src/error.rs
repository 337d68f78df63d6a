//! Error types.
//!
//! - `SetupError`: the only hard failure; the game cannot be built.
//! - `Rejection`: an in-turn action the rules refuse. State is untouched
//!   and the caller decides whether to tell anyone.
//! - `SnapshotError`, `ReplayError`: checkpoint and history tooling.

use thiserror::Error;

use crate::cards::{CardId, Rank};
use crate::core::{GameStatus, PlayerId, MAX_PLAYERS, MIN_PLAYERS};

/// Game construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(
        "player count must be between {min} and {max}, got {count}",
        min = MIN_PLAYERS,
        max = MAX_PLAYERS
    )]
    InvalidPlayerCount { count: usize },

    #[error("player {0} is seated more than once")]
    DuplicatePlayer(PlayerId),
}

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("game is not in progress (status: {status:?})")]
    NotPlaying { status: GameStatus },

    #[error("player {0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("it is {current}'s turn, not {actor}'s")]
    NotYourTurn { actor: PlayerId, current: PlayerId },

    #[error("no cards selected")]
    EmptySelection,

    #[error("card {0} selected more than once")]
    DuplicateCard(CardId),

    #[error("all cards played must share one rank")]
    MixedRanks,

    #[error("card {0} is not in hand")]
    CardNotOwned(CardId),

    #[error("must play {required} or higher, got {played}")]
    BelowThreshold { required: Rank, played: Rank },

    #[error("must play 7 or lower, got {played}")]
    AboveSevenLimit { played: Rank },

    #[error("nothing on the table to pick up")]
    NothingToPickUp,
}

/// Checkpoint encode/decode failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Failures rebuilding a game from its history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("history entry {sequence} was rejected: {reason}")]
    Rejected {
        sequence: u32,
        #[source]
        reason: Rejection,
    },
}
