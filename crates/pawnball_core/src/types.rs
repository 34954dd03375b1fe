use crate::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
    /// Row direction this side's pawns advance in.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
    /// The row this side's pawns start on.
    pub fn start_row(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 4,
        }
    }
    /// The far row; reaching it with a pawn wins the game.
    pub fn win_row(self) -> i8 {
        match self {
            Side::White => 4,
            Side::Black => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Pawn(Side),
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallHolder {
    White,
    Neutral,
    Black,
}

impl BallHolder {
    pub fn held_by(side: Side) -> BallHolder {
        match side {
            Side::White => BallHolder::White,
            Side::Black => BallHolder::Black,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BallHolder::White => "white",
            BallHolder::Neutral => "middle",
            BallHolder::Black => "black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    WhiteWin,
    BlackWin,
    Draw,
    WhiteDefensiveWin,
    BlackDefensiveWin,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// The side that takes the point, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::WhiteWin | GameStatus::WhiteDefensiveWin => Some(Side::White),
            GameStatus::BlackWin | GameStatus::BlackDefensiveWin => Some(Side::Black),
            _ => None,
        }
    }
}

/// One legal action. Card moves carry the full successor board, so applying
/// them swaps the session's board wholesale with no computation at that point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// Advance the pawn behind `to` onto it.
    Push { to: u8 },
    /// Commit a precomputed card effect from hand slot `slot`.
    CardMove {
        slot: usize,
        board: Board,
        description: String,
    },
}

impl Move {
    /// The log line this move produces: pushes log as the bare target label.
    pub fn description(&self) -> String {
        match self {
            Move::Push { to } => sq_to_label(*to),
            Move::CardMove { description, .. } => description.clone(),
        }
    }
}

// Helpers
pub fn col_of(sq: u8) -> i8 {
    (sq % 5) as i8
}
pub fn row_of(sq: u8) -> i8 {
    (sq / 5) as i8
}
pub fn sq(col: i8, row: i8) -> Option<u8> {
    if (0..5).contains(&col) && (0..5).contains(&row) {
        Some((row as u8) * 5 + (col as u8))
    } else {
        None
    }
}

/// Rows a pawn standing on `row` has advanced from its start row.
pub fn traveled(side: Side, row: i8) -> i8 {
    match side {
        Side::White => row,
        Side::Black => 4 - row,
    }
}

pub fn sq_to_label(sq: u8) -> String {
    let c = (b'A' + (sq % 5)) as char;
    let r = (b'1' + (sq / 5)) as char;
    format!("{c}{r}")
}

pub fn label_to_sq(label: &str) -> Option<u8> {
    let b = label.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let c = b[0];
    let r = b[1];
    if !(b'A'..=b'E').contains(&c) || !(b'1'..=b'5').contains(&r) {
        return None;
    }
    let col = c - b'A';
    let row = r - b'1';
    Some(row * 5 + col)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
