//! Random Move Player
//!
//! A simple player that selects uniformly at random from all legal moves.
//! Useful for:
//! - Testing infrastructure before tuning real strategies
//! - Baseline comparisons (any real strategy should easily beat this)
//! - Stress testing move generation

use pawnball_core::{Board, Hand, Move, Player, TurnContext, available_moves};
use rand::RngCore;
use rand::seq::SliceRandom;

#[cfg(test)]
mod lib_tests;

/// A player that plays random legal moves.
///
/// This player provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible strategy
/// and serves as a baseline for testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn find_move(
        &mut self,
        board: &Board,
        hand: &Hand,
        ctx: &TurnContext,
        rng: &mut dyn RngCore,
    ) -> Option<Move> {
        let moves = available_moves(board, ctx.side, hand, ctx.allowed_slots);
        moves.choose(rng).cloned()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
