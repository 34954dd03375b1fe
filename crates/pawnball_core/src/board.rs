use std::fmt;

use crate::types::*;

/// A 5x5 grid of tiles plus the ball. Boards are values: move generation
/// clones them, edits the clone and freezes the result inside a `Move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub grid: [Tile; 25],
    pub ball: BallHolder,
}

impl Board {
    pub fn startpos() -> Self {
        let mut b = Board {
            grid: [Tile::Empty; 25],
            ball: BallHolder::Neutral,
        };
        for c in 0..5 {
            b.grid[c] = Tile::Pawn(Side::White);
            b.grid[20 + c] = Tile::Pawn(Side::Black);
        }
        b
    }

    /// Build a board from five display rows, row 5 first.
    /// `W`/`B` are pawns, `#` a wall, `.` an empty tile.
    /// Used by tests and scripted positions.
    pub fn from_lines(lines: [&str; 5], ball: BallHolder) -> Self {
        let mut grid = [Tile::Empty; 25];
        for (line_idx, line) in lines.iter().enumerate() {
            let row: i8 = 4 - line_idx as i8; // lines list row 5 .. 1
            assert!(line.len() == 5, "Board row must have exactly 5 tiles");
            for (col, ch) in line.chars().enumerate() {
                let tile = match ch {
                    'W' => Tile::Pawn(Side::White),
                    'B' => Tile::Pawn(Side::Black),
                    '#' => Tile::Wall,
                    '.' => Tile::Empty,
                    _ => panic!("Invalid tile char in board row: {}", ch),
                };
                let s = sq(col as i8, row).expect("Square out of bounds while parsing board");
                grid[s as usize] = tile;
            }
        }
        Board { grid, ball }
    }

    pub fn tile_at(&self, sq: u8) -> Tile {
        self.grid[sq as usize]
    }
    pub fn set_tile(&mut self, sq: u8, tile: Tile) {
        self.grid[sq as usize] = tile;
    }

    pub fn is_vacant(&self, sq: u8) -> bool {
        self.tile_at(sq) == Tile::Empty
    }

    /// Squares holding this side's pawns, in row-major order.
    pub fn pawn_squares(&self, side: Side) -> Vec<u8> {
        let mut out = Vec::new();
        for s in 0..25u8 {
            if self.tile_at(s) == Tile::Pawn(side) {
                out.push(s);
            }
        }
        out
    }

    /// A side has won when one of its pawns stands on the far row.
    pub fn is_win_for(&self, side: Side) -> bool {
        let base = (side.win_row() as u8) * 5;
        (base..base + 5).any(|s| self.tile_at(s) == Tile::Pawn(side))
    }

    /// Move a tile between squares. The destination must be vacant.
    pub fn move_tile(&mut self, from: u8, to: u8) {
        assert!(self.tile_at(from) != Tile::Empty, "no tile on from-square");
        assert!(self.is_vacant(to), "to-square is occupied");
        let t = self.tile_at(from);
        self.set_tile(from, Tile::Empty);
        self.set_tile(to, t);
    }

    pub fn eliminate_pawn(&mut self, sq: u8) {
        assert!(
            matches!(self.tile_at(sq), Tile::Pawn(_)),
            "no pawn on square"
        );
        self.set_tile(sq, Tile::Empty);
    }

    pub fn place_wall(&mut self, sq: u8) {
        assert!(self.is_vacant(sq), "wall square is occupied");
        self.set_tile(sq, Tile::Wall);
    }

    pub fn place_pawn(&mut self, sq: u8, side: Side) {
        assert!(self.is_vacant(sq), "spawn square is occupied");
        self.set_tile(sq, Tile::Pawn(side));
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..5u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..5u8 {
                let ch = match self.grid[(row * 5 + col) as usize] {
                    Tile::Empty => '.',
                    Tile::Wall => '#',
                    Tile::Pawn(Side::White) => 'W',
                    Tile::Pawn(Side::Black) => 'B',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ABCDE  ball: {}", self.ball.label())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
