//! Per-move resolution: win, explosion, or nothing
//!
//! An open five anywhere in the scan wins outright and suppresses every
//! locked five from the same move. Only when no open five exists do the
//! locked fives explode.

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::EngineError;

use super::scan::{find_all_five_sequences, FiveSequence};

/// Locked fives waiting to be cleared.
///
/// Only `check_after_move` builds one, and `execute_explosions` consumes it
/// by value, so the list that was scored is the list that explodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExplosion {
    sequences: Vec<FiveSequence>,
    player: Player,
    generation: u64,
}

impl PendingExplosion {
    pub(crate) fn new(sequences: Vec<FiveSequence>, player: Player, generation: u64) -> Self {
        Self {
            sequences,
            player,
            generation,
        }
    }

    /// All locked fives, in scan order, not deduplicated
    #[inline]
    pub fn sequences(&self) -> &[FiveSequence] {
        &self.sequences
    }

    /// Number of locked fives (the scoring count)
    #[inline]
    pub fn count(&self) -> usize {
        self.sequences.len()
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Board generation this was computed against
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn into_sequences(self) -> Vec<FiveSequence> {
        self.sequences
    }
}

/// Result of resolving one placed stone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// First open five in scan order
    Win(FiveSequence),
    /// One or more locked fives and no open five
    Explosion(PendingExplosion),
    NoEffect,
}

impl MoveOutcome {
    #[inline]
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Win(_))
    }

    /// Locked-five count; zero for a win or no effect
    pub fn explosion_count(&self) -> usize {
        match self {
            MoveOutcome::Explosion(pending) => pending.count(),
            _ => 0,
        }
    }
}

/// Resolve the stone `player` just placed at `pos`. Pure read.
pub fn check_after_move(board: &Board, pos: Pos, player: Player) -> Result<MoveOutcome, EngineError> {
    let sequences = find_all_five_sequences(board, pos, player)?;

    if let Some(win) = sequences.iter().find(|seq| seq.is_open()) {
        debug!(%player, %pos, direction = ?win.direction(), "open five");
        return Ok(MoveOutcome::Win(win.clone()));
    }

    if sequences.is_empty() {
        return Ok(MoveOutcome::NoEffect);
    }

    // No open five, so every sequence left is locked
    debug!(%player, %pos, count = sequences.len(), "locked fives");
    Ok(MoveOutcome::Explosion(PendingExplosion::new(
        sequences,
        player,
        board.generation(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::scan::Direction;

    #[test]
    fn test_open_five_wins() {
        let board: Board = "
            .........
            .........
            .........
            .........
            XXXXX....
            .........
            .........
            .........
            .........
        "
        .parse()
        .unwrap();
        let outcome = check_after_move(&board, Pos::new(4, 4), Player::X).unwrap();
        match outcome {
            MoveOutcome::Win(seq) => {
                assert_eq!(seq.direction(), Direction::Horizontal);
                assert_eq!(seq.cells()[0], Pos::new(4, 0));
            }
            other => panic!("expected win, got {other:?}"),
        }
    }

    #[test]
    fn test_locked_five_explodes() {
        let board: Board = "
            .........
            .........
            .........
            .........
            XXXXXO...
            .........
            .........
            .........
            .........
        "
        .parse()
        .unwrap();
        let outcome = check_after_move(&board, Pos::new(4, 0), Player::X).unwrap();
        assert!(!outcome.is_win());
        assert_eq!(outcome.explosion_count(), 1);
        match outcome {
            MoveOutcome::Explosion(pending) => {
                assert_eq!(pending.player(), Player::X);
                assert_eq!(pending.generation(), board.generation());
                assert!(pending.sequences()[0].is_locked());
            }
            other => panic!("expected explosion, got {other:?}"),
        }
    }

    #[test]
    fn test_open_five_suppresses_locked_five() {
        // Horizontal locked (edge + O), vertical open
        let board: Board = "
            X.......
            X.......
            X.......
            X.......
            XXXXXO..
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        let outcome = check_after_move(&board, Pos::new(4, 0), Player::X).unwrap();
        match outcome {
            MoveOutcome::Win(seq) => assert_eq!(seq.direction(), Direction::Vertical),
            other => panic!("expected win, got {other:?}"),
        }
        assert_eq!(
            check_after_move(&board, Pos::new(4, 0), Player::X).unwrap().explosion_count(),
            0
        );
    }

    #[test]
    fn test_first_open_five_in_scan_order() {
        // Open horizontal and open vertical through (4, 4): horizontal comes first
        let board: Board = "
            .........
            .........
            ....X....
            ....X....
            ..XXXXX..
            ....X....
            ....X....
            .........
            .........
        "
        .parse()
        .unwrap();
        match check_after_move(&board, Pos::new(4, 4), Player::X).unwrap() {
            MoveOutcome::Win(seq) => {
                assert_eq!(seq.direction(), Direction::Horizontal);
                assert_eq!(seq.cells()[0], Pos::new(4, 2));
            }
            other => panic!("expected win, got {other:?}"),
        }
    }

    #[test]
    fn test_two_locked_directions_not_deduplicated() {
        // Horizontal row 0 and vertical col 0 share (0, 0); both edge-locked
        let board: Board = "
            XXXXXO...
            X........
            X........
            X........
            X........
            O........
            .........
            .........
            .........
        "
        .parse()
        .unwrap();
        match check_after_move(&board, Pos::new(0, 0), Player::X).unwrap() {
            MoveOutcome::Explosion(pending) => {
                assert_eq!(pending.count(), 2);
                assert_eq!(pending.sequences()[0].direction(), Direction::Horizontal);
                assert_eq!(pending.sequences()[1].direction(), Direction::Vertical);
            }
            other => panic!("expected explosion, got {other:?}"),
        }
    }

    #[test]
    fn test_no_effect() {
        let board: Board = "
            XXXX.
            .....
            .....
            .....
            .....
        "
        .parse()
        .unwrap();
        assert_eq!(
            check_after_move(&board, Pos::new(0, 3), Player::X).unwrap(),
            MoveOutcome::NoEffect
        );
    }
}
