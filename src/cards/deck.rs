//! Deck construction and shuffling.

use super::card::{Card, CardId, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Hands out card ids from a range reserved for one deck build.
///
/// Each game owns its allocator, so ids are unique within a game without any
/// process-wide counter. Once `u32::MAX` has been handed out the allocator is
/// exhausted and returns `None`.
#[derive(Clone, Debug)]
pub struct CardIdAllocator {
    next: Option<u32>,
}

impl CardIdAllocator {
    /// Start allocating at `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    /// Allocate the next id, or `None` when the range is used up.
    pub fn alloc(&mut self) -> Option<CardId> {
        let raw = self.next?;
        self.next = raw.checked_add(1);
        Some(CardId::new(raw))
    }

    /// Ids still available.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.next.map_or(0, |next| u64::from(u32::MAX - next) + 1)
    }
}

impl Default for CardIdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Suit by suit, ranks ascending.
fn layout() -> impl Iterator<Item = (Suit, Rank)> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| (suit, rank)))
}

/// Build one 52-card deck, suit by suit, ranks ascending, ids 1..=52.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    layout()
        .zip(1u32..)
        .map(|((suit, rank), id)| Card::new(CardId::new(id), rank, suit))
        .collect()
}

/// Build one 52-card deck drawing ids from `ids`.
///
/// Returns `None`, leaving `ids` untouched, when fewer than 52 ids remain.
pub fn build_deck_with(ids: &mut CardIdAllocator) -> Option<Vec<Card>> {
    if ids.remaining() < DECK_SIZE as u64 {
        return None;
    }
    layout()
        .map(|(suit, rank)| ids.alloc().map(|id| Card::new(id, rank, suit)))
        .collect()
}

/// Return a shuffled permutation of `deck`.
///
/// The permutation is a pure function of `rng`'s seed.
#[must_use]
pub fn shuffle(mut deck: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
    rng.shuffle(&mut deck);
    deck
}
