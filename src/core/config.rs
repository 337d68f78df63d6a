//! Game configuration.
//!
//! The rules themselves are fixed; configuration covers the numbers a
//! table might want to vary: how many cards a hand is topped up to and
//! where the rank threshold starts.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 4;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player, and the size a hand is topped up to
    /// before every action while the draw pile lasts (default: 3).
    pub hand_size: usize,

    /// Minimum rank at the start of the game (default: 2).
    pub starting_threshold: Rank,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 3,
            starting_threshold: Rank::Two,
        }
    }
}

impl GameConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the starting threshold.
    #[must_use]
    pub fn with_starting_threshold(mut self, rank: Rank) -> Self {
        self.starting_threshold = rank;
        self
    }
}
