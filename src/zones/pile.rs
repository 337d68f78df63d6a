//! Ordered card stacks.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// An ordered stack of cards. The top is the end of the sequence.
///
/// Backed by `im::Vector` so copying a game state (for a scratch transition
/// or a snapshot) shares structure instead of copying every card.
///
/// ```
/// use norwegian_war::cards::{Card, CardId, Rank, Suit};
/// use norwegian_war::zones::Pile;
///
/// let mut pile = Pile::new();
/// pile.push(Card::new(CardId::new(1), Rank::Four, Suit::Clubs));
/// pile.push(Card::new(CardId::new(2), Rank::Nine, Suit::Clubs));
///
/// assert_eq!(pile.top().map(|c| c.rank), Some(Rank::Nine));
/// assert_eq!(pile.pop_top().map(|c| c.id), Some(CardId::new(2)));
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards listed bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Place cards on top, first one lowest.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.cards.push_back(card);
        }
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Cards from the top down.
    pub fn iter_from_top(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }

    /// Cards from the bottom up.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Empty the pile, returning its cards bottom first.
    pub fn take_all(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
