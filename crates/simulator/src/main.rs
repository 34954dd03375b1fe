//! Simulator CLI
//!
//! Run seeded batches between configured strategies and export the tallies.

use std::env;
use std::path::{Path, PathBuf};

use pawnball_core::{GameConfig, PlayerConfig, Side};
use simulator::Simulator;

fn print_usage() {
    println!("Pawnball Simulator");
    println!();
    println!("Usage:");
    println!("  simulator run [--config FILE] [--games N] [--seed S] [--out FILE]");
    println!("  simulator find-first <white|black> [--config FILE] [--max N]");
    println!();
    println!("The config file is TOML; a missing file is created with defaults");
    println!("(heuristic as white, random as black, three cards dealt to each).");
    println!();
    println!("Examples:");
    println!("  simulator run --config pawnball.toml --games 100 --out results.json");
    println!("  simulator find-first black --max 500");
}

/// Read the config, writing a default file first when none exists.
fn load_config(path: &Path) -> Result<GameConfig, String> {
    if !path.exists() {
        let config = GameConfig {
            white_player: PlayerConfig::heuristic(),
            black_player: PlayerConfig::random(),
            ..GameConfig::default()
        };
        let text = toml::to_string_pretty(&config)
            .map_err(|e| format!("Failed to serialize default config: {}", e))?;
        std::fs::write(path, text)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!("Wrote default config to {}", path.display());
        return Ok(config);
    }
    GameConfig::load(path).map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

fn run_batch(args: &[String]) {
    let mut config_path = PathBuf::from("pawnball.toml");
    let mut num_games: u32 = 10;
    let mut seed: Option<u64> = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let mut config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    if seed.is_some() {
        config.seed = seed;
    }

    println!(
        "=== Simulation: {:?} vs {:?} ===",
        config.white_player.kind, config.black_player.kind
    );
    println!("Games: {}", num_games);
    println!();

    let mut sim = match Simulator::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid config: {}", e);
            return;
        }
    };
    sim.verbose = true;
    let summary = sim.run(num_games);

    println!();
    summary.print_report();

    if let Some(path) = out {
        match summary.save(&path) {
            Ok(()) => println!("Results saved to {}", path.display()),
            Err(e) => eprintln!("Warning: Failed to save results: {}", e),
        }
    }
}

fn run_find_first(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: find-first requires a side (white or black)");
        print_usage();
        return;
    }

    let side = match args[0].to_lowercase().as_str() {
        "white" => Side::White,
        "black" => Side::Black,
        other => {
            eprintln!("Unknown side: {}", other);
            return;
        }
    };

    let mut config_path = PathBuf::from("pawnball.toml");
    let mut max_games: u32 = 100;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--max" | "-m" => {
                if i + 1 < args.len() {
                    max_games = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let sim = match Simulator::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid config: {}", e);
            return;
        }
    };

    let label = args[0].to_lowercase();
    match sim.find_first(side, max_games) {
        Some(session) => {
            println!("=== First {} win ===", label);
            for (idx, entry) in session.log().iter().enumerate() {
                let mover = if idx % 2 == 0 { "white" } else { "black" };
                println!("{:>3}. {:<5} {}", idx + 1, mover, entry);
            }
            println!();
            println!("{}", session.board());
        }
        None => println!("No {} win in {} game(s)", label, max_games),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => run_batch(&args[2..]),
        "find-first" => run_find_first(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
