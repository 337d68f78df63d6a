//! Play legality and legal move enumeration.
//!
//! A set is legal when it is non-empty, single-rank, held by the player, and
//! either rank ≤7 under the ≤7 constraint or at least the required rank
//! (`max(threshold, table top)`) otherwise.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, Rank};
use crate::core::{CardSet, GameState, GameStatus, Player, PlayerId};
use crate::error::Rejection;
use crate::zones::Pile;

/// Highest rank allowed while the ≤7 constraint is active.
pub const SEVEN_LIMIT: Rank = Rank::Seven;

/// Minimum rank a normal-mode play must reach.
#[must_use]
pub fn required_rank(state: &GameState) -> Rank {
    match state.table_pile().top() {
        Some(top) => state.threshold().max(top.rank),
        None => state.threshold(),
    }
}

/// Check a candidate set for `player`, returning the rank it would play.
pub fn check_play(state: &GameState, player: &Player, cards: &[Card]) -> Result<Rank, Rejection> {
    let rank = cards.first().ok_or(Rejection::EmptySelection)?.rank;

    if cards.iter().any(|c| c.rank != rank) {
        return Err(Rejection::MixedRanks);
    }

    if let Some(card) = cards.iter().find(|c| !player.hand().contains(c)) {
        return Err(Rejection::CardNotOwned(card.id));
    }

    if state.le7_active() {
        // Threshold and table top do not apply under the constraint
        return if rank > SEVEN_LIMIT {
            Err(Rejection::AboveSevenLimit { played: rank })
        } else {
            Ok(rank)
        };
    }

    let required = required_rank(state);
    if rank < required {
        return Err(Rejection::BelowThreshold {
            required,
            played: rank,
        });
    }
    Ok(rank)
}

/// Legal plays for `player_id`: for each rank in hand (first-seen order),
/// one entry per prefix length 1..=count that passes [`check_play`].
///
/// Empty unless `player_id` is the player to act in a game in progress.
#[must_use]
pub fn legal_moves(state: &GameState, player_id: &PlayerId) -> Vec<CardSet> {
    if state.status() != GameStatus::Playing {
        return Vec::new();
    }
    let Some(player) = state.current_player() else {
        return Vec::new();
    };
    if &player.id != player_id {
        return Vec::new();
    }

    let mut groups: Vec<Vec<Card>> = Vec::new();
    let mut by_rank: FxHashMap<Rank, usize> = FxHashMap::default();
    for card in player.hand() {
        let slot = *by_rank.entry(card.rank).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(card.clone());
    }

    let mut legal = Vec::new();
    for group in &groups {
        for n in 1..=group.len() {
            let subset = &group[..n];
            if check_play(state, player, subset).is_ok() {
                legal.push(subset.iter().map(|c| c.id).collect::<SmallVec<_>>());
            }
        }
    }
    legal
}

/// Are the top four cards of the pile all one rank?
///
/// Looks at cards only, not at which plays put them there.
#[must_use]
pub fn four_of_a_kind_on_top(pile: &Pile) -> bool {
    let mut top = pile.iter_from_top().take(4);
    match top.next() {
        Some(first) => top.filter(|c| c.rank == first.rank).count() == 3,
        None => false,
    }
}
