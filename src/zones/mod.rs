//! Card locations.
//!
//! Every card is in exactly one place: a player's hand, the draw pile, the
//! table, or the discard pile. `Pile` is the ordered stack used for the
//! three shared places; `Zone` names a location for audits.

pub mod pile;

pub use pile::Pile;

use serde::{Deserialize, Serialize};

/// Where a card currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// In the hand of the player at this seat.
    Hand(usize),
    /// Face down, waiting to be drawn.
    Draw,
    /// In the current run on the table.
    Table,
    /// Burned. Cards never leave this zone.
    Discard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Hand(seat) => write!(f, "Hand({})", seat),
            Zone::Draw => f.write_str("Draw"),
            Zone::Table => f.write_str("Table"),
            Zone::Discard => f.write_str("Discard"),
        }
    }
}
