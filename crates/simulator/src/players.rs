//! Strategy construction from configuration

use heuristic_player::HeuristicPlayer;
use pawnball_core::{HumanPlayer, Player, PlayerConfig, PlayerKind};
use random_player::RandomPlayer;

/// Build the strategy a configured seat asks for.
pub fn create_player(config: &PlayerConfig) -> Box<dyn Player> {
    match config.kind {
        PlayerKind::Human => Box::new(HumanPlayer),
        PlayerKind::Random => Box::new(RandomPlayer::new()),
        PlayerKind::Heuristic => match config.weights {
            Some(weights) => Box::new(HeuristicPlayer::with_weights(weights)),
            None => Box::new(HeuristicPlayer::new()),
        },
    }
}
