//! Explosion execution: clear every cell of the pending locked fives

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::EngineError;

use super::outcome::PendingExplosion;
use super::score::calculate_explosion_score;

/// What one move's explosions removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplosionResult {
    /// Distinct cleared cells, row-major
    cleared: Vec<Pos>,
    sequence_count: usize,
    player: Player,
}

impl ExplosionResult {
    #[inline]
    pub fn cleared(&self) -> &[Pos] {
        &self.cleared
    }

    /// Distinct cells cleared. Lower than `5 * sequence_count` when fives overlap.
    #[inline]
    pub fn cleared_count(&self) -> usize {
        self.cleared.len()
    }

    /// Locked fives that exploded; this is what scoring counts
    #[inline]
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Points this explosion is worth
    #[inline]
    pub fn score(&self) -> u32 {
        calculate_explosion_score(self.sequence_count)
    }
}

/// Clear the union of all cells in `pending` and report what was removed.
///
/// The only mutating rule operation. Fails with `StaleExplosion` if the board
/// changed since `pending` was computed; the board is left untouched then.
pub fn execute_explosions(
    board: &mut Board,
    pending: PendingExplosion,
) -> Result<ExplosionResult, EngineError> {
    if pending.generation() != board.generation() {
        return Err(EngineError::StaleExplosion {
            expected: pending.generation(),
            actual: board.generation(),
        });
    }

    let player = pending.player();
    let sequences = pending.into_sequences();
    let sequence_count = sequences.len();

    let cells: BTreeSet<Pos> = sequences
        .iter()
        .flat_map(|seq| seq.cells().iter().copied())
        .collect();

    for &pos in &cells {
        board.remove_stone(pos);
    }

    debug!(%player, sequence_count, cleared = cells.len(), "explosion");

    Ok(ExplosionResult {
        cleared: cells.into_iter().collect(),
        sequence_count,
        player,
    })
}
