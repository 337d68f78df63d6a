//! Game state: the single aggregate a transition reads and writes.
//!
//! ## GameState
//!
//! - Status, seats, and whose turn it is
//! - Draw, table, and discard piles
//! - Finishing order
//! - Pending effects: skip, ≤7 constraint, rank threshold
//! - Last move summary and the history of accepted actions
//!
//! Fields are readable through accessors only. Hands are private data: the
//! sanctioned way to show state to a remote player is
//! [`PlayerView`](crate::view::PlayerView).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, ClientAction};
use super::player::{Player, PlayerId};
use crate::cards::{Card, CardId, Rank};
use crate::error::SnapshotError;
use crate::zones::{Pile, Zone};

/// Lifecycle of a game. Moves forward only; `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Waiting for players. Games built by the engine skip this.
    Lobby,
    Playing,
    Finished,
}

/// Everything that happened in one accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResult {
    pub player_id: PlayerId,

    /// Cards played, in table order. Empty for a pickup.
    pub played: Vec<Card>,

    /// The table was burned to the discard pile.
    pub burned: bool,

    /// The actor keeps the turn.
    pub replay: bool,

    /// An 8 fired its skip effect.
    pub skip_applied: bool,

    /// A 7 set the ≤7 constraint.
    pub le7_set: bool,

    /// This move was made under the ≤7 constraint, so effects were off.
    pub specials_suppressed: bool,

    /// Threshold after the move.
    pub threshold: Rank,

    pub picked_up: bool,
}

/// Full game state including private hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) status: GameStatus,

    /// Seats in turn order. Membership is fixed at creation.
    pub(crate) players: Vec<Player>,

    /// Seat index of the player to act.
    pub(crate) current: usize,

    /// Top = next card drawn.
    pub(crate) draw_pile: Pile,

    /// Top = most recently played card.
    pub(crate) table_pile: Pile,

    pub(crate) discard_pile: Pile,

    /// Player ids in finishing order.
    pub(crate) winners: Vec<PlayerId>,

    /// The next advance skips one extra player (set by an 8).
    pub(crate) skip_next: bool,

    /// The next move must be rank ≤7 and triggers no effects (set by a 7).
    pub(crate) le7_active: bool,

    /// Minimum rank in normal mode.
    pub(crate) threshold: Rank,

    pub(crate) last_move: Option<MoveResult>,

    /// Shuffle seed; rebuilding with it reproduces the deal.
    pub(crate) seed: u64,

    /// Accepted actions, oldest first.
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a game in progress: hands already dealt, player 0 to act.
    #[must_use]
    pub(crate) fn new(players: Vec<Player>, draw_pile: Pile, threshold: Rank, seed: u64) -> Self {
        Self {
            status: GameStatus::Playing,
            players,
            current: 0,
            draw_pile,
            table_pile: Pile::new(),
            discard_pile: Pile::new(),
            winners: Vec::new(),
            skip_next: false,
            le7_active: false,
            threshold,
            last_move: None,
            seed,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat index of a player.
    #[must_use]
    pub fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Seat index of the player to act.
    #[must_use]
    pub fn current_seat(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Pile {
        &self.draw_pile
    }

    #[must_use]
    pub fn table_pile(&self) -> &Pile {
        &self.table_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Pile {
        &self.discard_pile
    }

    /// Player ids in finishing order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    #[must_use]
    pub fn skip_next(&self) -> bool {
        self.skip_next
    }

    #[must_use]
    pub fn le7_active(&self) -> bool {
        self.le7_active
    }

    #[must_use]
    pub fn threshold(&self) -> Rank {
        self.threshold
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveResult> {
        self.last_move.as_ref()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Turn order ===

    /// Seats still holding cards, in seat order.
    pub fn active_seats(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_finished())
            .map(|(i, _)| i)
    }

    /// First unfinished seat after `seat`, wrapping around.
    ///
    /// Returns `seat` itself when it is the only unfinished one, and `None`
    /// when every seat has finished.
    #[must_use]
    pub fn next_active_after(&self, seat: usize) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|offset| (seat + offset) % n)
            .find(|&s| !self.players[s].is_finished())
    }

    // === Audits ===

    /// Find the zone holding a card.
    #[must_use]
    pub fn locate(&self, id: CardId) -> Option<Zone> {
        if let Some(seat) = self.players.iter().position(|p| p.holds(id)) {
            return Some(Zone::Hand(seat));
        }
        if self.draw_pile.contains(id) {
            Some(Zone::Draw)
        } else if self.table_pile.contains(id) {
            Some(Zone::Table)
        } else if self.discard_pile.contains(id) {
            Some(Zone::Discard)
        } else {
            None
        }
    }

    /// Every card in the game, across all zones.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.players
            .iter()
            .flat_map(|p| p.hand.iter())
            .chain(self.draw_pile.iter())
            .chain(self.table_pile.iter())
            .chain(self.discard_pile.iter())
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.players.iter().map(Player::hand_count).sum::<usize>()
            + self.draw_pile.len()
            + self.table_pile.len()
            + self.discard_pile.len()
    }

    // === Snapshots ===

    /// Encode the full state, private hands included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    // === Mutation helpers ===

    /// Draw from the top of the draw pile until the seat holds `hand_size`
    /// cards or the pile runs out. Returns how many were drawn.
    pub(crate) fn top_up(&mut self, seat: usize, hand_size: usize) -> usize {
        let mut drawn = 0;
        while self.players[seat].hand.len() < hand_size {
            let Some(card) = self.draw_pile.pop_top() else {
                break;
            };
            self.players[seat].hand.push(card);
            drawn += 1;
        }
        drawn
    }

    pub(crate) fn record(&mut self, player: PlayerId, action: ClientAction) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(sequence, player, action));
    }
}
