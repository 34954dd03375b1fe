//! Batch runner playing configured strategies against each other

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use pawnball_core::{ConfigError, GameConfig, GameSession, Side, draw_hands};

use crate::players::create_player;
use crate::results::SimulationSummary;

/// Runs seeded batches of games for one configuration. Both seats must be
/// automated strategies; a human seat cannot be simulated.
pub struct Simulator {
    config: GameConfig,
    base_seed: u64,
    /// Print progress during the batch
    pub verbose: bool,
}

impl Simulator {
    /// Validate the config up front so every deal in the batch succeeds.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        // Surface a short pool now rather than mid-batch.
        draw_hands(&config.cards, &mut StdRng::seed_from_u64(0))?;
        let base_seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            base_seed,
            verbose: false,
        })
    }

    /// Play game `index` of the batch and return the finished session.
    fn play_game(&self, index: u32) -> GameSession {
        let mut config = self.config.clone();
        config.seed = Some(self.base_seed.wrapping_add(index as u64));

        let white = create_player(&config.white_player);
        let black = create_player(&config.black_player);
        let session = GameSession::new(&config, white, black)
            .expect("simulation config was validated");
        assert!(
            session.status().is_over(),
            "automated seats play to a verdict; human seats cannot be simulated"
        );
        session
    }

    /// Run the batch, tallying outcomes.
    pub fn run(&self, num_games: u32) -> SimulationSummary {
        let start = Instant::now();
        let mut summary = SimulationSummary::new(self.config.clone());

        for index in 0..num_games {
            let session = self.play_game(index);
            summary.record(session.status());

            if self.verbose {
                println!(
                    "Game {}/{}: {} in {} move(s) - Score: {}-{}-{}",
                    index + 1,
                    num_games,
                    session.summary().winner,
                    session.log().len(),
                    summary.num_white_wins,
                    summary.num_black_wins,
                    summary.num_draws
                );
            }
        }

        summary.runtime_sec = start.elapsed().as_secs_f64();
        summary
    }

    /// Play up to `max_games`, returning the first game `side` wins.
    pub fn find_first(&self, side: Side, max_games: u32) -> Option<GameSession> {
        for index in 0..max_games {
            let session = self.play_game(index);
            if session.status().winner() == Some(side) {
                return Some(session);
            }
        }
        None
    }
}
