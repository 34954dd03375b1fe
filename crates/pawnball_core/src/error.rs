//! Error types for session actions and configuration loading.

use thiserror::Error;

/// A rejected session action. The session is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("'{0}' is not a tile label")]
    BadTileLabel(String),
    #[error("illegal push to {0}: {1}")]
    IllegalPush(String, &'static str),
    #[error("card slot {slot} is out of range: {allowed} slot(s) may be played")]
    BadCardSlot { slot: usize, allowed: usize },
    #[error("move index {index} is out of range: the card has {available} move(s)")]
    BadMoveIndex { index: usize, available: usize },
    #[error("cannot pass while moves are available")]
    IllegalPass,
    #[error("the game is over")]
    GameOver,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown card name '{0}'")]
    UnknownCard(String),
    #[error("card name '{0}' must be lowercase")]
    CardNotLowercase(String),
    #[error("'{0}' appears in both hands")]
    OverlappingHands(String),
    #[error("cannot draw {wanted} card(s) from a pool of {available}")]
    NotEnoughCards { wanted: usize, available: usize },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
