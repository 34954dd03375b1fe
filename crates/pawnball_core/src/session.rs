//! The turn state machine: one live game from deal to verdict.
//!
//! A session owns the board, both hands, both strategies and a seeded RNG.
//! Humans act through `push`/`play_card`/`pass`; automated seats act on
//! their own whenever the turn reaches them, so after every public call the
//! session is either waiting on a human or finished.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::cards::{Hand, draw_hands};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::movegen::{self, apply_push, available_moves};
use crate::summary::{GameSummary, winner_label};
use crate::types::*;
use crate::{Player, TurnContext};

pub struct GameSession {
    board: Board,
    side_to_move: Side,
    hands: [Hand; 2],
    players: [Box<dyn Player>; 2],
    /// Slots either side may play from: the shorter hand bounds both.
    allowed_slots: usize,
    status: GameStatus,
    log: Vec<String>,
    moves_made: [u32; 2],
    rng: StdRng,
}

impl GameSession {
    /// Deal hands and start from the standard position.
    pub fn new(
        config: &GameConfig,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (white_hand, black_hand) = draw_hands(&config.cards, &mut rng)?;
        Ok(Self::from_parts(
            Board::startpos(),
            Side::White,
            [white_hand, black_hand],
            [white, black],
            rng,
        ))
    }

    /// Start from an arbitrary position. Used by tests and scripted replays.
    pub fn with_position(
        board: Board,
        side_to_move: Side,
        hands: [Hand; 2],
        players: [Box<dyn Player>; 2],
        seed: u64,
    ) -> Self {
        Self::from_parts(
            board,
            side_to_move,
            hands,
            players,
            StdRng::seed_from_u64(seed),
        )
    }

    fn from_parts(
        board: Board,
        side_to_move: Side,
        hands: [Hand; 2],
        players: [Box<dyn Player>; 2],
        rng: StdRng,
    ) -> Self {
        let allowed_slots = hands[0].len().min(hands[1].len());
        let mut session = Self {
            board,
            side_to_move,
            hands,
            players,
            allowed_slots,
            status: GameStatus::Ongoing,
            log: Vec::new(),
            moves_made: [0, 0],
            rng,
        };
        session.refresh_status();
        session.run_automated();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn log(&self) -> &[String] {
        &self.log
    }
    pub fn allowed_slots(&self) -> usize {
        self.allowed_slots
    }

    /// Unspent cards in a side's hand, as (name, rule text) pairs.
    pub fn remaining_cards(&self, side: Side) -> Vec<(&'static str, &'static str)> {
        self.hands[side.idx()]
            .cards
            .iter()
            .filter(|c| !c.used)
            .map(|c| (c.kind.name(), c.kind.blurb()))
            .collect()
    }

    /// Legal moves for one card slot of the side to move.
    pub fn card_moves(&self, slot: usize) -> Result<Vec<Move>, MoveError> {
        if slot >= self.allowed_slots {
            return Err(MoveError::BadCardSlot {
                slot,
                allowed: self.allowed_slots,
            });
        }
        let hand = &self.hands[self.side_to_move.idx()];
        Ok(movegen::card_moves(
            &self.board,
            self.side_to_move,
            hand.card(slot),
            slot,
        ))
    }

    /// Push the pawn behind `target` onto it.
    pub fn push(&mut self, target: &str) -> Result<(), MoveError> {
        self.ensure_ongoing()?;
        let to =
            label_to_sq(target).ok_or_else(|| MoveError::BadTileLabel(target.to_string()))?;
        if !self.board.is_vacant(to) {
            return Err(MoveError::IllegalPush(sq_to_label(to), "the tile is occupied"));
        }
        let side = self.side_to_move;
        sq(col_of(to), row_of(to) - side.forward())
            .filter(|&s| self.board.tile_at(s) == Tile::Pawn(side))
            .ok_or_else(|| MoveError::IllegalPush(sq_to_label(to), "no pawn behind the tile"))?;
        self.board = apply_push(&self.board, side, to);
        self.commit(sq_to_label(to));
        self.run_automated();
        Ok(())
    }

    /// Play card `slot`, committing candidate `index` from its move list.
    pub fn play_card(&mut self, slot: usize, index: usize) -> Result<(), MoveError> {
        self.ensure_ongoing()?;
        let mut moves = self.card_moves(slot)?;
        if index >= moves.len() {
            return Err(MoveError::BadMoveIndex {
                index,
                available: moves.len(),
            });
        }
        let mv = moves.swap_remove(index);
        self.apply_card(mv);
        self.run_automated();
        Ok(())
    }

    /// Concede the turn. Only legal when nothing can move.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        self.ensure_ongoing()?;
        if !self.current_moves().is_empty() {
            return Err(MoveError::IllegalPass);
        }
        self.commit("pass".to_string());
        self.run_automated();
        Ok(())
    }

    /// End-of-game export; while a game is still running the winner field
    /// reads "draw".
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            white_cards: self.hands[0].sorted_names(),
            black_cards: self.hands[1].sorted_names(),
            is_white_defensive: self.hands[0].all_defensive(),
            is_black_defensive: self.hands[1].all_defensive(),
            winner: winner_label(self.status).to_string(),
            num_white_moves: self.moves_made[Side::White.idx()],
            final_ball_position: self.board.ball.label().to_string(),
        }
    }

    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        if self.status.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }

    fn current_moves(&self) -> Vec<Move> {
        let side = self.side_to_move;
        available_moves(
            &self.board,
            side,
            &self.hands[side.idx()],
            self.allowed_slots,
        )
    }

    fn apply_card(&mut self, mv: Move) {
        match mv {
            Move::CardMove {
                slot,
                board,
                description,
            } => {
                self.hands[self.side_to_move.idx()].cards[slot].mark_used();
                self.board = board;
                self.commit(description);
            }
            Move::Push { .. } => panic!("apply_card called with a push"),
        }
    }

    /// Record the action, hand the turn over and recompute the verdict.
    fn commit(&mut self, entry: String) {
        self.log.push(entry);
        self.moves_made[self.side_to_move.idx()] += 1;
        self.side_to_move = self.side_to_move.other();
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        if self.board.is_win_for(Side::White) {
            self.status = GameStatus::WhiteWin;
            return;
        }
        if self.board.is_win_for(Side::Black) {
            self.status = GameStatus::BlackWin;
            return;
        }
        let white_stuck =
            available_moves(&self.board, Side::White, &self.hands[0], self.allowed_slots)
                .is_empty();
        let black_stuck =
            available_moves(&self.board, Side::Black, &self.hands[1], self.allowed_slots)
                .is_empty();
        if white_stuck && black_stuck {
            // A full lock scores against the side that sat on a hand of
            // defensive cards; with neither side hoarding it is a draw.
            self.status = if self.hands[Side::Black.idx()].remaining_defensive() {
                GameStatus::WhiteDefensiveWin
            } else if self.hands[Side::White.idx()].remaining_defensive() {
                GameStatus::BlackDefensiveWin
            } else {
                GameStatus::Draw
            };
            return;
        }
        self.status = GameStatus::Ongoing;
    }

    /// Let automated seats act until a human is to move or the game ends.
    /// A seat with nothing legal passes on its own.
    fn run_automated(&mut self) {
        while self.status == GameStatus::Ongoing
            && !self.players[self.side_to_move.idx()].is_human()
        {
            let side = self.side_to_move;
            let ctx = TurnContext {
                side,
                allowed_slots: self.allowed_slots,
                unused_own: self.hands[side.idx()].num_unused(),
                unused_opponent: self.hands[side.other().idx()].num_unused(),
            };
            let chosen = self.players[side.idx()].find_move(
                &self.board,
                &self.hands[side.idx()],
                &ctx,
                &mut self.rng,
            );
            match chosen {
                Some(Move::Push { to }) => {
                    self.board = apply_push(&self.board, side, to);
                    self.commit(sq_to_label(to));
                }
                Some(mv @ Move::CardMove { .. }) => self.apply_card(mv),
                None => self.commit("pass".to_string()),
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
