pub mod board;
pub mod cards;
pub mod config;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod session;
pub mod summary;
pub mod types;

use rand::RngCore;

// Re-export core game logic (not strategy-specific)
pub use board::*;
pub use cards::*;
pub use config::*;
pub use error::*;
pub use eval::*;
pub use movegen::*;
pub use session::GameSession;
pub use summary::*;
pub use types::*;

// =============================================================================
// Player trait: implemented by all player strategies (random, heuristic, etc.)
// =============================================================================

/// What a strategy is told when asked to move.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext {
    /// The side the strategy is playing.
    pub side: Side,
    /// How many card slots either side may play from.
    pub allowed_slots: usize,
    /// Unspent cards in the strategy's own hand.
    pub unused_own: usize,
    /// Unspent cards in the opposing hand.
    pub unused_opponent: usize,
}

/// Trait that all player strategies must implement.
///
/// This allows swapping between scripted play, random baselines and
/// heuristic opponents behind one session loop.
pub trait Player: Send {
    /// Choose a move for `ctx.side` on `board`.
    ///
    /// # Arguments
    /// * `board` - The current position
    /// * `hand` - The strategy's own hand, spent cards included
    /// * `ctx` - Turn bookkeeping (side, slot count, card counts)
    /// * `rng` - Session RNG, so seeded games replay identically
    ///
    /// # Returns
    /// The chosen move, or None to pass when nothing is legal
    fn find_move(
        &mut self,
        board: &Board,
        hand: &Hand,
        ctx: &TurnContext,
        rng: &mut dyn RngCore,
    ) -> Option<Move>;

    /// Returns the player's name for reports and logs
    fn name(&self) -> &str;

    /// Human seats break the automated loop and act through the session API.
    fn is_human(&self) -> bool {
        false
    }
}

/// Seat filled by a person driving the session directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanPlayer;

impl Player for HumanPlayer {
    fn find_move(
        &mut self,
        _board: &Board,
        _hand: &Hand,
        _ctx: &TurnContext,
        _rng: &mut dyn RngCore,
    ) -> Option<Move> {
        unreachable!("human seats move through the session API")
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn is_human(&self) -> bool {
        true
    }
}
