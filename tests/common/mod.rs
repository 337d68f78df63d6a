//! Shared helpers for integration tests.
//!
//! Hand-built positions go through the snapshot format (serde), the same
//! path a host would use to restore a saved game.

#![allow(dead_code)]

use norwegian_war::{
    ClientAction, Engine, FixedClock, GameConfig, GameState, MoveResult, PlayerId, PlayerSeat, Rank, Rejection,
};
use serde_json::{json, Value};

pub const NOW: u64 = 1_700_000_000_000;

pub fn seats(n: usize) -> Vec<PlayerSeat> {
    (0..n)
        .map(|i| PlayerSeat::new(format!("p{i}"), format!("Player {i}")))
        .collect()
}

pub fn engine() -> Engine<FixedClock> {
    Engine::with_clock(GameConfig::default(), FixedClock(NOW))
}

pub fn pid(seat: usize) -> PlayerId {
    PlayerId::new(format!("p{seat}"))
}

pub fn current(state: &GameState) -> PlayerId {
    state.current_player().map(|p| p.id.clone()).expect("someone to act")
}

pub fn play(
    engine: &Engine<FixedClock>,
    state: &mut GameState,
    seat: usize,
    ids: &[u32],
) -> Result<MoveResult, Rejection> {
    let ids: Vec<_> = ids.iter().map(|&i| norwegian_war::CardId::new(i)).collect();
    engine.apply_action(state, &pid(seat), &ClientAction::play(&ids))
}

fn card(id: u32, rank: Rank) -> Value {
    json!({ "id": id, "rank": rank.value(), "suit": "♣" })
}

fn cards(list: &[(u32, Rank)]) -> Vec<Value> {
    list.iter().map(|&(id, rank)| card(id, rank)).collect()
}

/// A position in progress: players "p0".."pN", player 0 to act.
pub struct Fixture {
    hands: Vec<Vec<(u32, Rank)>>,
    draw: Vec<(u32, Rank)>,
    table: Vec<(u32, Rank)>,
    threshold: Rank,
    le7_active: bool,
}

impl Fixture {
    pub fn new(hands: Vec<Vec<(u32, Rank)>>) -> Self {
        Self {
            hands,
            draw: Vec::new(),
            table: Vec::new(),
            threshold: Rank::Two,
            le7_active: false,
        }
    }

    /// Bottom first.
    pub fn draw(mut self, cards: Vec<(u32, Rank)>) -> Self {
        self.draw = cards;
        self
    }

    /// Bottom first.
    pub fn table(mut self, cards: Vec<(u32, Rank)>) -> Self {
        self.table = cards;
        self
    }

    pub fn threshold(mut self, rank: Rank) -> Self {
        self.threshold = rank;
        self
    }

    pub fn le7_active(mut self) -> Self {
        self.le7_active = true;
        self
    }

    pub fn build(self) -> GameState {
        let players: Vec<Value> = self
            .hands
            .iter()
            .enumerate()
            .map(|(i, hand)| {
                json!({
                    "id": format!("p{i}"),
                    "name": format!("Player {i}"),
                    "hand": cards(hand),
                    "finished_at": null,
                })
            })
            .collect();

        let value = json!({
            "status": "playing",
            "players": players,
            "current": 0,
            "draw_pile": { "cards": cards(&self.draw) },
            "table_pile": { "cards": cards(&self.table) },
            "discard_pile": { "cards": [] },
            "winners": [],
            "skip_next": false,
            "le7_active": self.le7_active,
            "threshold": self.threshold.value(),
            "last_move": null,
            "seed": 0,
            "history": [],
        });
        serde_json::from_value(value).expect("fixture matches the snapshot format")
    }
}

/// First legal play, else pickup, else `None` (the position is parked).
pub fn auto_move(engine: &Engine<FixedClock>, state: &GameState) -> Option<ClientAction> {
    let actor = state.current_player()?;
    if let Some(set) = engine.legal_moves(state, &actor.id).first() {
        return Some(ClientAction::play(set));
    }
    (!state.table_pile().is_empty()).then_some(ClientAction::Pickup)
}

/// Drive a game with [`auto_move`] for up to `max_turns` actions.
pub fn play_out(engine: &Engine<FixedClock>, state: &mut GameState, max_turns: usize) {
    for _ in 0..max_turns {
        if state.is_finished() {
            return;
        }
        let Some(action) = auto_move(engine, state) else {
            return;
        };
        let actor = current(state);
        engine
            .apply_action(state, &actor, &action)
            .expect("auto moves are legal");
    }
}
