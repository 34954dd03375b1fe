//! Batch Simulator for pawnball
//!
//! This crate provides infrastructure for:
//! - Running seeded batches of games between configured strategies
//! - Tallying outcomes and exporting them as JSON
//! - Hunting down an example game with a specific winner
//!
//! # Usage
//!
//! ```bash
//! # Run a batch from a config file
//! cargo run -p simulator -- run --config pawnball.toml --games 100
//!
//! # Find a game the black seat wins and print it move by move
//! cargo run -p simulator -- find-first black --max 500
//! ```

mod players;
mod results;
mod runner;

pub use players::*;
pub use results::*;
pub use runner::*;
