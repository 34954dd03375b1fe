//! Game configuration: seats, hands and the random seed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::error::ConfigError;
use crate::eval::ScoreWeights;

/// Strategy selector for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
    Heuristic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub kind: PlayerKind,
    /// Heuristic weights; `None` falls back to the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<ScoreWeights>,
}

impl PlayerConfig {
    pub fn human() -> Self {
        Self {
            kind: PlayerKind::Human,
            weights: None,
        }
    }
    pub fn random() -> Self {
        Self {
            kind: PlayerKind::Random,
            weights: None,
        }
    }
    pub fn heuristic() -> Self {
        Self {
            kind: PlayerKind::Heuristic,
            weights: None,
        }
    }
}

/// Which cards each side holds, or how many to deal at random.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Explicit white hand; `None` deals at random.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_card_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_card_names: Option<Vec<String>>,
    pub num_white_cards: usize,
    pub num_black_cards: usize,
    /// Pool to deal from; `None` is the full compendium.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards_pull: Option<Vec<String>>,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            white_card_names: None,
            black_card_names: None,
            num_white_cards: 3,
            num_black_cards: 3,
            cards_pull: None,
        }
    }
}

impl CardsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for names in [
            &self.white_card_names,
            &self.black_card_names,
            &self.cards_pull,
        ]
        .into_iter()
        .flatten()
        {
            for name in names {
                if name.chars().any(|c| c.is_ascii_uppercase()) {
                    return Err(ConfigError::CardNotLowercase(name.clone()));
                }
                if CardKind::from_name(name).is_none() {
                    return Err(ConfigError::UnknownCard(name.clone()));
                }
            }
        }
        if let (Some(white), Some(black)) = (&self.white_card_names, &self.black_card_names)
            && let Some(shared) = white.iter().find(|n| black.contains(n))
        {
            return Err(ConfigError::OverlappingHands(shared.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub white_player: PlayerConfig,
    pub black_player: PlayerConfig,
    #[serde(default)]
    pub cards: CardsConfig,
    /// Seed for hand dealing and automated play; `None` seeds from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_player: PlayerConfig::random(),
            black_player: PlayerConfig::random(),
            cards: CardsConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check card names before a session is built from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cards.validate()
    }

    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
