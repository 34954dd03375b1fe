//! Simulation results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use pawnball_core::{GameConfig, GameStatus};

/// Aggregated outcome of one simulation batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Configuration used
    pub config: GameConfig,
    /// Number of games played
    pub num_games: u32,
    /// Wins on the far row plus defensive wins, per side
    pub num_white_wins: u32,
    pub num_black_wins: u32,
    pub num_draws: u32,
    /// Wall-clock runtime of the batch in seconds
    pub runtime_sec: f64,
}

impl SimulationSummary {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            num_games: 0,
            num_white_wins: 0,
            num_black_wins: 0,
            num_draws: 0,
            runtime_sec: 0.0,
        }
    }

    /// Tally one finished game.
    pub fn record(&mut self, status: GameStatus) {
        self.num_games += 1;
        match status.winner() {
            Some(pawnball_core::Side::White) => self.num_white_wins += 1,
            Some(pawnball_core::Side::Black) => self.num_black_wins += 1,
            None => self.num_draws += 1,
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Simulation: {:?} vs {:?} ===\n\n",
            self.config.white_player.kind, self.config.black_player.kind
        ));
        report.push_str(&format!(
            "Games: {}, runtime: {:.2}s\n\n",
            self.num_games, self.runtime_sec
        ));

        report.push_str(&format!("{:<12} {:>6} {:>7}\n", "Outcome", "Count", "Share"));
        report.push_str(&"-".repeat(28));
        report.push('\n');
        for (label, count) in [
            ("White wins", self.num_white_wins),
            ("Black wins", self.num_black_wins),
            ("Draws", self.num_draws),
        ] {
            report.push_str(&format!(
                "{:<12} {:>6} {:>6.1}%\n",
                label,
                count,
                self.share(count) * 100.0
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }

    fn share(&self, count: u32) -> f64 {
        if self.num_games == 0 {
            0.0
        } else {
            count as f64 / self.num_games as f64
        }
    }
}
