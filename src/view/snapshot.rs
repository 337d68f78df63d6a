//! The per-viewer snapshot.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::{GameState, GameStatus, MoveResult, Player, PlayerId};

/// Public information about a seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPlayer {
    pub id: PlayerId,
    pub name: String,
    pub hand_count: usize,
    pub is_you: bool,
    pub finished_at: Option<u64>,
}

/// The viewer's own seat, hand included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivatePlayer {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub finished_at: Option<u64>,
}

/// What one player is allowed to see.
///
/// Safe to send to the remote peer behind `viewer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub status: GameStatus,
    pub players: Vec<PublicPlayer>,
    pub current_player_id: Option<PlayerId>,

    /// `None` when the viewer is not seated (a spectator).
    pub you: Option<PrivatePlayer>,

    pub table_count: usize,
    pub top_card: Option<Card>,
    pub discard_count: usize,
    pub draw_count: usize,
    pub winners: Vec<PlayerId>,
    pub skip_next: bool,
    pub le7_active: bool,
    pub threshold: Rank,
    pub last_move: Option<MoveResult>,
}

impl PlayerView {
    /// Project `state` for `viewer`.
    #[must_use]
    pub fn new(state: &GameState, viewer: &PlayerId) -> Self {
        let players = state
            .players()
            .iter()
            .map(|p| PublicPlayer {
                id: p.id.clone(),
                name: p.name.clone(),
                hand_count: p.hand_count(),
                is_you: &p.id == viewer,
                finished_at: p.finished_at,
            })
            .collect();

        let you = state
            .players()
            .iter()
            .find(|p| &p.id == viewer)
            .map(PrivatePlayer::from);

        Self {
            status: state.status(),
            players,
            current_player_id: state.current_player().map(|p| p.id.clone()),
            you,
            table_count: state.table_pile().len(),
            top_card: state.table_pile().top().cloned(),
            discard_count: state.discard_pile().len(),
            draw_count: state.draw_pile().len(),
            winners: state.winners().to_vec(),
            skip_next: state.skip_next(),
            le7_active: state.le7_active(),
            threshold: state.threshold(),
            last_move: state.last_move().cloned(),
        }
    }

    /// Is it the viewer's turn?
    #[must_use]
    pub fn is_your_turn(&self) -> bool {
        match (&self.you, &self.current_player_id) {
            (Some(you), Some(current)) => self.status == GameStatus::Playing && &you.id == current,
            _ => false,
        }
    }
}

impl From<&Player> for PrivatePlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            hand: player.hand().to_vec(),
            finished_at: player.finished_at,
        }
    }
}
