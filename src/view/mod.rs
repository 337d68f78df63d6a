//! Viewer-specific projections of the game state.
//!
//! [`PlayerView`] is built field by field, so a hand that is not the
//! viewer's can only ever appear as a count.

pub mod snapshot;

pub use snapshot::{PlayerView, PrivatePlayer, PublicPlayer};
