//! Heuristic Player
//!
//! One-move lookahead with positional scoring.
//! Every legal action is applied to a scratch board and the successor is
//! scored with `pawnball_core::score`; the best scorer is played. Exact ties
//! are broken uniformly at random so repeated games explore different lines,
//! unless `random_tie_break` is off, in which case the first listed move wins.

use pawnball_core::{
    Board, Hand, Move, Player, ScoreWeights, TurnContext, apply_push, available_moves, score,
};
use rand::RngCore;
use rand::seq::SliceRandom;


/// A player that greedily maximizes the positional score one move ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPlayer {
    weights: ScoreWeights,
}

impl HeuristicPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }
}

impl Player for HeuristicPlayer {
    fn find_move(
        &mut self,
        board: &Board,
        hand: &Hand,
        ctx: &TurnContext,
        rng: &mut dyn RngCore,
    ) -> Option<Move> {
        let moves = available_moves(board, ctx.side, hand, ctx.allowed_slots);

        let mut best: Vec<Move> = Vec::new();
        let mut best_score = i64::MIN;
        for m in moves {
            let (successor, unused_own) = match &m {
                Move::Push { to } => (apply_push(board, ctx.side, *to), ctx.unused_own),
                Move::CardMove { board: b, .. } => (b.clone(), ctx.unused_own.saturating_sub(1)),
            };
            let s = score(
                &successor,
                ctx.side,
                unused_own,
                ctx.unused_opponent,
                ctx.allowed_slots,
                &self.weights,
            );
            if s > best_score {
                best_score = s;
                best.clear();
            }
            if s == best_score {
                best.push(m);
            }
        }

        if self.weights.random_tie_break {
            best.choose(rng).cloned()
        } else {
            best.into_iter().next()
        }
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }
}
