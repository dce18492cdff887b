//! Five-sequence detection through a just-placed stone
//!
//! A five-sequence is any window of 5 consecutive same-player cells inside
//! the maximal run through the anchor. Each window is classified by its two
//! ends:
//! - an end is **locked** when the cell beyond it is off the board or holds
//!   an opponent stone
//! - an end is **open** when that cell is empty or holds a friendly stone
//!
//! One open end makes an open five (a win). Two locked ends make a locked
//! five (an explosion).

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, Player, Pos};
use crate::error::EngineError;

/// Length of a scoring window
pub const FIVE: usize = 5;

/// Scan axes, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// (0, +1)
    Horizontal,
    /// (+1, 0)
    Vertical,
    /// (+1, +1)
    DiagonalDownRight,
    /// (+1, -1)
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Unit step (row, col)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// State of the cell just beyond one end of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndState {
    Open,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveKind {
    /// At least one end open: immediate win
    OpenFive,
    /// Both ends locked: explodes
    LockedFive,
}

/// A classified 5-cell window produced by one scan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiveSequence {
    cells: [Pos; FIVE],
    direction: Direction,
    player: Player,
    start: EndState,
    end: EndState,
}

impl FiveSequence {
    /// Cells in direction order
    #[inline]
    pub fn cells(&self) -> &[Pos; FIVE] {
        &self.cells
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// End before the first cell
    #[inline]
    pub fn start(&self) -> EndState {
        self.start
    }

    /// End after the last cell
    #[inline]
    pub fn end(&self) -> EndState {
        self.end
    }

    pub fn kind(&self) -> FiveKind {
        if self.start == EndState::Open || self.end == EndState::Open {
            FiveKind::OpenFive
        } else {
            FiveKind::LockedFive
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.kind() == FiveKind::OpenFive
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.kind() == FiveKind::LockedFive
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Lock state of the cell at signed coordinates, as seen by `player`
#[inline]
pub fn end_state(board: &Board, row: i32, col: i32, player: Player) -> EndState {
    match board.stone_at(row, col) {
        None => EndState::Locked,
        Some(stone) if stone.is_owned_by(player.opponent()) => EndState::Locked,
        Some(_) => EndState::Open,
    }
}

/// Maximal run of `player` stones through `anchor` along `direction`,
/// in increasing direction order.
fn collect_run(board: &Board, anchor: Pos, direction: Direction, player: Player) -> Vec<Pos> {
    let (dr, dc) = direction.delta();

    // Walk back to the furthest friendly stone
    let mut start = anchor;
    loop {
        let (r, c) = start.offset(dr, dc, -1);
        match board.stone_at(r, c) {
            Some(stone) if stone.is_owned_by(player) => start = Pos::new(r as u8, c as u8),
            _ => break,
        }
    }

    // Walk forward collecting the run
    let mut run = Vec::with_capacity(board.size());
    let mut cur = (start.row as i32, start.col as i32);
    while let Some(stone) = board.stone_at(cur.0, cur.1) {
        if !stone.is_owned_by(player) {
            break;
        }
        run.push(Pos::new(cur.0 as u8, cur.1 as u8));
        cur = (cur.0 + dr, cur.1 + dc);
    }
    run
}

/// Every five-sequence of `player` through `anchor`, across all 4 directions.
///
/// Order is load-bearing: direction order (`Direction::ALL`), then increasing
/// window start within the run. A run of length L yields `L - 4` windows.
///
/// The anchor must be on the board and hold `player`'s stone.
pub fn find_all_five_sequences(
    board: &Board,
    anchor: Pos,
    player: Player,
) -> Result<Vec<FiveSequence>, EngineError> {
    board.check_pos(anchor)?;
    if !board.get(anchor).is_owned_by(player) {
        return Err(EngineError::AnchorMismatch {
            pos: anchor,
            expected: player,
        });
    }

    let mut sequences = Vec::new();

    for direction in Direction::ALL {
        let run = collect_run(board, anchor, direction, player);
        trace!(?direction, len = run.len(), "run through {anchor}");
        if run.len() < FIVE {
            continue;
        }

        let (dr, dc) = direction.delta();
        for window in run.windows(FIVE) {
            let first = window[0];
            let last = window[FIVE - 1];
            let (br, bc) = first.offset(dr, dc, -1);
            let (ar, ac) = last.offset(dr, dc, 1);

            let mut cells = [first; FIVE];
            cells.copy_from_slice(window);

            sequences.push(FiveSequence {
                cells,
                direction,
                player,
                start: end_state(board, br, bc, player),
                end: end_state(board, ar, ac, player),
            });
        }
    }

    Ok(sequences)
}
