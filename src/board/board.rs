//! Board structure with mutation tracking

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::EngineError;

/// N x N game board
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// X stones bitboard
    x: Bitboard,
    /// O stones bitboard
    o: Bitboard,
    /// Bumped on every place/remove
    generation: u64,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(EngineError::BoardSize { size });
        }
        Ok(Self {
            size,
            x: Bitboard::new(size * size),
            o: Bitboard::new(size * size),
            generation: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// Mutation counter. Two reads with the same generation saw the same board.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if signed coordinates fall on the board
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Error unless `pos` is on the board
    pub fn check_pos(&self, pos: Pos) -> Result<(), EngineError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
                size: self.size,
            })
        }
    }

    /// Bit index of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board. Off-board positions would otherwise
    /// alias a cell on the next row.
    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "{pos} is outside a {0}x{0} board",
            self.size
        );
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    fn pos_at(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    /// Get stone at position. Panics off the board; see `try_get`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.x.get(idx) {
            Stone::X
        } else if self.o.get(idx) {
            Stone::O
        } else {
            Stone::Empty
        }
    }

    /// Get stone at position, `OutOfBounds` when off the board
    pub fn try_get(&self, pos: Pos) -> Result<Stone, EngineError> {
        self.check_pos(pos)?;
        Ok(self.get(pos))
    }

    /// Get stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.in_bounds(row, col) {
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone, overwriting whatever was there. Panics off the board.
    /// Use `try_place_stone` or `Game::play` for checked placement.
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos);
        match player {
            Player::X => {
                self.o.clear(idx);
                self.x.set(idx);
            }
            Player::O => {
                self.x.clear(idx);
                self.o.set(idx);
            }
        }
        self.generation += 1;
    }

    /// Checked `place_stone`: the board is untouched on error
    pub fn try_place_stone(&mut self, pos: Pos, player: Player) -> Result<(), EngineError> {
        self.check_pos(pos)?;
        self.place_stone(pos, player);
        Ok(())
    }

    /// Remove a stone. Panics off the board.
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.x.clear(idx);
        self.o.clear(idx);
        self.generation += 1;
    }

    /// Checked `remove_stone`
    pub fn try_remove_stone(&mut self, pos: Pos) -> Result<(), EngineError> {
        self.check_pos(pos)?;
        self.remove_stone(pos);
        Ok(())
    }

    /// Get bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Positions of one player's stones in row-major order
    pub fn positions(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        self.stones(player).iter_ones().map(|idx| self.pos_at(idx))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.total_cells() - self.stone_count() as usize
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }
}

/// Boards compare by contents; the generation counter is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.x == other.x && self.o == other.o
    }
}

impl Eq for Board {}

/// One line per row, `.` for empty, `X`/`O` for stones
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.get(Pos::new(row as u8, col as u8)).to_char())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the `Display` format. Blank lines and surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let mut board = Board::new(rows.len())?;

        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != rows.len() {
                return Err(EngineError::Parse(format!(
                    "row {row} has {width} cells, expected {}",
                    rows.len()
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match ch {
                    'X' | 'x' => board.place_stone(pos, Player::X),
                    'O' | 'o' => board.place_stone(pos, Player::O),
                    '.' | '_' => {}
                    other => {
                        return Err(EngineError::Parse(format!(
                            "unexpected '{other}' at ({row}, {col})"
                        )))
                    }
                }
            }
        }

        Ok(board)
    }
}
