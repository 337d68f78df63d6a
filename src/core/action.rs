//! Player actions and the history record of accepted ones.
//!
//! There are exactly two things a player can do on their turn: play a set
//! of same-rank cards, or pick up the table. Any other wire shape a client
//! sends must be translated into one of these before it reaches the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::CardId;

/// An ordered selection of card ids.
///
/// SmallVec holds up to four ids inline, which covers every legal play
/// (four cards of one rank exist in a deck).
pub type CardSet = SmallVec<[CardId; 4]>;

/// A turn action.
///
/// Serializes as `{"play":{"cardIds":[..]}}` or `"pickup"`.
///
/// ```
/// use norwegian_war::cards::CardId;
/// use norwegian_war::core::ClientAction;
///
/// let play = ClientAction::play(&[CardId::new(3), CardId::new(16)]);
/// assert!(!play.is_pickup());
/// assert!(ClientAction::Pickup.is_pickup());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientAction {
    /// Play these cards, in this order, onto the table.
    Play {
        #[serde(rename = "cardIds")]
        card_ids: CardSet,
    },
    /// Take the whole table into hand and act again.
    Pickup,
}

impl ClientAction {
    /// Create a play action.
    #[must_use]
    pub fn play(card_ids: &[CardId]) -> Self {
        ClientAction::Play {
            card_ids: SmallVec::from_slice(card_ids),
        }
    }

    #[must_use]
    pub fn is_pickup(&self) -> bool {
        matches!(self, ClientAction::Pickup)
    }
}

/// An accepted action, kept for replay and audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the game's history, starting at 0.
    pub sequence: u32,

    /// The player who acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: ClientAction,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, player: PlayerId, action: ClientAction) -> Self {
        Self {
            sequence,
            player,
            action,
        }
    }
}
