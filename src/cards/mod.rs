//! Cards and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Per-game unique identifier
//! - `Rank`, `Suit`: Card faces; only rank matters to the rules
//! - `Card`: An immutable card value
//! - `CardIdAllocator`: Scoped id source owned by one deck build

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{build_deck, build_deck_with, shuffle, CardIdAllocator, DECK_SIZE};
