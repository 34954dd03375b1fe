//! Card identities, hands and hand dealing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::CardsConfig;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Bishop,
    Charge,
    SideStep,
    Jump,
    Knight,
    Knife,
    Dagger,
    Kamikaze,
    Fire,
    Wall,
    Spawn,
    Scare,
    Tank,
    Peace,
    Pull,
}

/// The standard deal pool. Pull stays out of it: the card is only available
/// when a configuration names it explicitly.
pub const COMPENDIUM: [CardKind; 14] = [
    CardKind::Bishop,
    CardKind::Charge,
    CardKind::SideStep,
    CardKind::Jump,
    CardKind::Knight,
    CardKind::Knife,
    CardKind::Dagger,
    CardKind::Kamikaze,
    CardKind::Fire,
    CardKind::Wall,
    CardKind::Spawn,
    CardKind::Scare,
    CardKind::Tank,
    CardKind::Peace,
];

impl CardKind {
    pub fn name(self) -> &'static str {
        match self {
            CardKind::Bishop => "bishop",
            CardKind::Charge => "charge",
            CardKind::SideStep => "sidestep",
            CardKind::Jump => "jump",
            CardKind::Knight => "knight",
            CardKind::Knife => "knife",
            CardKind::Dagger => "dagger",
            CardKind::Kamikaze => "kamikaze",
            CardKind::Fire => "fire",
            CardKind::Wall => "wall",
            CardKind::Spawn => "spawn",
            CardKind::Scare => "scare",
            CardKind::Tank => "tank",
            CardKind::Peace => "peace",
            CardKind::Pull => "pull",
        }
    }

    pub fn from_name(name: &str) -> Option<CardKind> {
        match name {
            "bishop" => Some(CardKind::Bishop),
            "charge" => Some(CardKind::Charge),
            "sidestep" => Some(CardKind::SideStep),
            "jump" => Some(CardKind::Jump),
            "knight" => Some(CardKind::Knight),
            "knife" => Some(CardKind::Knife),
            "dagger" => Some(CardKind::Dagger),
            "kamikaze" => Some(CardKind::Kamikaze),
            "fire" => Some(CardKind::Fire),
            "wall" => Some(CardKind::Wall),
            "spawn" => Some(CardKind::Spawn),
            "scare" => Some(CardKind::Scare),
            "tank" => Some(CardKind::Tank),
            "peace" => Some(CardKind::Peace),
            "pull" => Some(CardKind::Pull),
            _ => None,
        }
    }

    /// Defensive cards cannot bring a pawn closer to the far row.
    pub fn is_defensive(self) -> bool {
        matches!(self, CardKind::Scare | CardKind::Pull)
    }

    /// One-line rule text shown next to a held card.
    pub fn blurb(self) -> &'static str {
        match self {
            CardKind::Bishop => "move a pawn diagonally, any distance",
            CardKind::Charge => "rush a pawn forward past the adjacent row",
            CardKind::SideStep => "slide a pawn along its row",
            CardKind::Jump => "leap a pawn two rows forward",
            CardKind::Knight => "move a pawn like a chess knight",
            CardKind::Knife => "eliminate an enemy pawn next to yours",
            CardKind::Dagger => "eliminate an enemy pawn diagonal to yours",
            CardKind::Kamikaze => "trade a pawn for the first enemy it sees",
            CardKind::Fire => "burn every pawn in a row of your half",
            CardKind::Wall => "raise a wall next to one of your pawns",
            CardKind::Spawn => "place a new pawn in your half",
            CardKind::Scare => "send an enemy pawn back to its start row",
            CardKind::Tank => "shove a blocking tile onward and advance",
            CardKind::Peace => "trade the most advanced pawn of each side",
            CardKind::Pull => "draw the ball back toward your side",
        }
    }
}

/// A dealt card. `used` is set exactly once and never reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub used: bool,
}

impl Card {
    pub fn new(kind: CardKind) -> Self {
        Self { kind, used: false }
    }

    pub fn mark_used(&mut self) {
        assert!(!self.used, "card played twice: {}", self.kind.name());
        self.used = true;
    }
}

/// One side's hand, dealt once and never replenished.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(kinds: &[CardKind]) -> Self {
        Self {
            cards: kinds.iter().map(|&k| Card::new(k)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn card(&self, slot: usize) -> &Card {
        &self.cards[slot]
    }

    pub fn num_unused(&self) -> usize {
        self.cards.iter().filter(|c| !c.used).count()
    }

    /// True when the whole deal consists of defensive cards.
    pub fn all_defensive(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.kind.is_defensive())
    }

    /// True when cards remain unspent and every one of them is defensive.
    pub fn remaining_defensive(&self) -> bool {
        let mut any = false;
        for c in self.cards.iter().filter(|c| !c.used) {
            if !c.kind.is_defensive() {
                return false;
            }
            any = true;
        }
        any
    }

    /// Card names of the full deal, spent cards included, sorted.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .cards
            .iter()
            .map(|c| c.kind.name().to_string())
            .collect();
        names.sort();
        names
    }
}

/// Deal both hands per the configuration. A randomized side never receives
/// a card the other side holds, whether that hand was named or drawn first.
pub fn draw_hands(config: &CardsConfig, rng: &mut StdRng) -> Result<(Hand, Hand), ConfigError> {
    // An explicitly empty pool plays the game without cards.
    if let Some(names) = &config.cards_pull
        && names.is_empty()
    {
        return Ok((Hand::default(), Hand::default()));
    }
    let pool = match &config.cards_pull {
        Some(names) => kinds_from_names(names)?,
        None => COMPENDIUM.to_vec(),
    };

    let white_named = match &config.white_card_names {
        Some(names) => Some(kinds_from_names(names)?),
        None => None,
    };
    let black_named = match &config.black_card_names {
        Some(names) => Some(kinds_from_names(names)?),
        None => None,
    };

    let white = match white_named {
        Some(kinds) => kinds,
        None => {
            let taken = black_named.clone().unwrap_or_default();
            draw_from_pool(&pool, &taken, config.num_white_cards, rng)?
        }
    };
    let black = match black_named {
        Some(kinds) => kinds,
        None => draw_from_pool(&pool, &white, config.num_black_cards, rng)?,
    };

    Ok((Hand::new(&white), Hand::new(&black)))
}

fn draw_from_pool(
    pool: &[CardKind],
    taken: &[CardKind],
    count: usize,
    rng: &mut StdRng,
) -> Result<Vec<CardKind>, ConfigError> {
    let avail: Vec<CardKind> = pool
        .iter()
        .copied()
        .filter(|k| !taken.contains(k))
        .collect();
    if avail.len() < count {
        return Err(ConfigError::NotEnoughCards {
            wanted: count,
            available: avail.len(),
        });
    }
    Ok(avail.choose_multiple(rng, count).copied().collect())
}

fn kinds_from_names(names: &[String]) -> Result<Vec<CardKind>, ConfigError> {
    names
        .iter()
        .map(|n| CardKind::from_name(n).ok_or_else(|| ConfigError::UnknownCard(n.clone())))
        .collect()
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod cards_tests;
