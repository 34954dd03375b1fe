use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::*;

/// Score of a position the side has won or can no longer lose.
pub const WIN: i64 = 99_999_999_999;
pub const LOSE: i64 = -WIN;

/// Tunable weights for the positional score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub pawn: i64,
    pub free_pawn: i64,
    pub distance: i64,
    pub ball: i64,
    pub used_card_penalty: i64,
    pub exhausted_penalty: i64,
    /// Pick uniformly among equal-best moves instead of the first listed.
    pub random_tie_break: bool,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            pawn: 100,
            free_pawn: 400,
            distance: 60,
            ball: 150,
            used_card_penalty: 50,
            exhausted_penalty: 200,
            random_tie_break: true,
        }
    }
}

/// Score `board` for `side`; higher is better. `unused_own` and
/// `unused_opponent` count unspent cards, `allowed_cards` the playable slots
/// per side.
///
/// Pure function of its arguments. Won and provably-won positions collapse
/// to the `WIN`/`LOSE` sentinels, everything else is a weighted difference
/// of per-side sub-scores.
pub fn score(
    board: &Board,
    side: Side,
    unused_own: usize,
    unused_opponent: usize,
    allowed_cards: usize,
    weights: &ScoreWeights,
) -> i64 {
    let enemy = side.other();

    if board.is_win_for(side) {
        return WIN;
    }
    if board.is_win_for(enemy) {
        return LOSE;
    }

    let own_best = best_free_pawn(board, side);
    let enemy_best = best_free_pawn(board, enemy);

    // A side holding the ball with the leading free pawn cannot be caught:
    // the opponent has no card play to interfere with.
    if board.ball == BallHolder::held_by(side)
        && let Some(own) = own_best
        && own > enemy_best.unwrap_or(-1)
    {
        return WIN - (4 - own) as i64;
    }
    if board.ball == BallHolder::held_by(enemy)
        && let Some(en) = enemy_best
        && en >= own_best.unwrap_or(-1)
    {
        return LOSE + (4 - en) as i64;
    }

    sub_score(board, side, unused_own, allowed_cards, weights)
        - sub_score(board, enemy, unused_opponent, allowed_cards, weights)
}

fn sub_score(board: &Board, side: Side, unused: usize, allowed: usize, w: &ScoreWeights) -> i64 {
    let pawns = board.pawn_squares(side);
    let free = free_pawns(board, side);

    let mut s = pawns.len() as i64 * w.pawn;
    s += free.len() as i64 * w.free_pawn;
    for &f in &free {
        s += traveled(side, row_of(f)) as i64 * w.distance;
    }
    s += if board.ball == BallHolder::held_by(side) {
        w.ball
    } else if board.ball == BallHolder::Neutral {
        0
    } else {
        -w.ball
    };
    let used = allowed.saturating_sub(unused);
    s -= used as i64 * w.used_card_penalty;
    if allowed > 0 && unused == 0 {
        s -= w.exhausted_penalty;
    }
    s
}

/// Best traveled distance among the side's free pawns, if it has any.
fn best_free_pawn(board: &Board, side: Side) -> Option<i8> {
    free_pawns(board, side)
        .iter()
        .map(|&s| traveled(side, row_of(s)))
        .max()
}

/// Pawns whose every tile up to and including the far-row destination is
/// vacant.
fn free_pawns(board: &Board, side: Side) -> Vec<u8> {
    let dir = side.forward();
    board
        .pawn_squares(side)
        .into_iter()
        .filter(|&from| {
            let c = col_of(from);
            let mut r = row_of(from) + dir;
            while let Some(s) = sq(c, r) {
                if !board.is_vacant(s) {
                    return false;
                }
                if r == side.win_row() {
                    break;
                }
                r += dir;
            }
            true
        })
        .collect()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
