//! Hand-built states for rule tests.

use crate::cards::{Card, CardId, Rank, Suit};
use crate::core::{GameState, Player, PlayerSeat};
use crate::zones::Pile;

pub(crate) fn card(id: u32, rank: Rank) -> Card {
    Card::new(CardId::new(id), rank, Suit::Clubs)
}

/// Builds a game in progress with players "p0".."pN" and chosen piles.
pub(crate) struct StateBuilder {
    hands: Vec<Vec<Card>>,
    finished: Vec<bool>,
    draw: Vec<Card>,
    table: Vec<Card>,
    discard: Vec<Card>,
    threshold: Rank,
    le7_active: bool,
    current: usize,
}

impl StateBuilder {
    pub(crate) fn new() -> Self {
        Self {
            hands: vec![Vec::new(); 2],
            finished: vec![false; 2],
            draw: Vec::new(),
            table: Vec::new(),
            discard: Vec::new(),
            threshold: Rank::Two,
            le7_active: false,
            current: 0,
        }
    }

    pub(crate) fn players(mut self, count: usize) -> Self {
        self.hands.resize(count, Vec::new());
        self.finished.resize(count, false);
        self
    }

    pub(crate) fn hand(mut self, seat: usize, cards: Vec<Card>) -> Self {
        self.hands[seat] = cards;
        self
    }

    /// Bottom first; the last card is drawn first.
    pub(crate) fn draw(mut self, cards: Vec<Card>) -> Self {
        self.draw = cards;
        self
    }

    /// Bottom first; the last card is the top.
    pub(crate) fn table(mut self, cards: Vec<Card>) -> Self {
        self.table = cards;
        self
    }

    pub(crate) fn discard(mut self, cards: Vec<Card>) -> Self {
        self.discard = cards;
        self
    }

    pub(crate) fn threshold(mut self, rank: Rank) -> Self {
        self.threshold = rank;
        self
    }

    pub(crate) fn le7_active(mut self) -> Self {
        self.le7_active = true;
        self
    }

    pub(crate) fn current(mut self, seat: usize) -> Self {
        self.current = seat;
        self
    }

    /// Mark a seat as already finished (and listed in winners).
    pub(crate) fn finished(mut self, seat: usize) -> Self {
        self.finished[seat] = true;
        self
    }

    pub(crate) fn build(self) -> GameState {
        let players = self
            .hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| {
                let mut player = Player::new(PlayerSeat::new(format!("p{i}"), format!("Player {i}")));
                player.hand = hand;
                player
            })
            .collect();

        let mut state = GameState::new(players, Pile::from_cards(self.draw), self.threshold, 0);
        state.table_pile = Pile::from_cards(self.table);
        state.discard_pile = Pile::from_cards(self.discard);
        state.le7_active = self.le7_active;
        state.current = self.current;
        for (seat, done) in self.finished.into_iter().enumerate() {
            if done {
                state.players[seat].finished_at = Some(0);
                state.winners.push(state.players[seat].id.clone());
            }
        }
        state
    }
}
