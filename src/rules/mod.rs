//! Norwegian War rules.
//!
//! - `setup`: shuffle and deal
//! - `legality`: which sets may be played, and legal move enumeration
//! - `transition`: the single state transition for play and pickup
//! - `engine`: `Engine`, the entry point tying the three together
//!
//! Nothing here keeps state between calls; every game is a `GameState`
//! value owned by the caller.

pub mod engine;
pub mod legality;
mod setup;
mod transition;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::Engine;
pub use legality::{check_play, four_of_a_kind_on_top, legal_moves, required_rank, SEVEN_LIMIT};
