//! Player identification and per-seat data.
//!
//! ## PlayerId
//!
//! Stable external identity supplied by whoever seats the player (a socket
//! id, an account id). The engine only compares ids for equality.
//!
//! ## Player
//!
//! One seat at the table: identity, display name, private hand, and the
//! finish mark set once the hand is emptied.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Stable external player identifier.
///
/// ```
/// use norwegian_war::core::PlayerId;
///
/// let id = PlayerId::from("alice");
/// assert_eq!(id.as_str(), "alice");
/// assert_eq!(format!("{}", id), "alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Who sits down at game creation: an id plus a display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeat {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerSeat {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable external identity.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Private hand. Order is display grouping only.
    pub(crate) hand: Vec<Card>,

    /// Milliseconds since the UNIX epoch at which the hand was emptied.
    pub finished_at: Option<u64>,
}

impl Player {
    /// Seat a player with an empty hand.
    #[must_use]
    pub fn new(seat: PlayerSeat) -> Self {
        Self {
            id: seat.id,
            name: seat.name,
            hand: Vec::new(),
            finished_at: None,
        }
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards held.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hand.len()
    }

    /// Has this player emptied their hand?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Check whether a card is in hand.
    #[must_use]
    pub fn holds(&self, id: CardId) -> bool {
        self.hand.iter().any(|c| c.id == id)
    }

    /// Remove a card from hand by id.
    pub(crate) fn take_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }
}
