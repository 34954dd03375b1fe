//! End-of-game export.

use serde::{Deserialize, Serialize};

use crate::types::{GameStatus, Side};

/// A finished game reduced to its reportable facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    /// Full deal per side, names sorted, spent cards included.
    pub white_cards: Vec<String>,
    pub black_cards: Vec<String>,
    /// Whether the deal consisted of defensive cards only.
    pub is_white_defensive: bool,
    pub is_black_defensive: bool,
    /// "white", "black" or "draw"; defensive wins count for their winner.
    pub winner: String,
    pub num_white_moves: u32,
    /// "white", "middle" or "black".
    pub final_ball_position: String,
}

pub fn winner_label(status: GameStatus) -> &'static str {
    match status.winner() {
        Some(Side::White) => "white",
        Some(Side::Black) => "black",
        None => "draw",
    }
}
