//! Game rules for locked-five explosion Caro
//!
//! This module implements the per-move rule pipeline:
//! - Scan: every five-sequence through the placed stone, classified open/locked
//! - Resolve: open five wins, otherwise locked fives explode
//! - Execute: clear the exploded cells
//! - Score: combo scoring, score win, full-board tiebreak
//!
//! For one move the steps must run in that order with no board mutation
//! between Resolve and Execute.

pub mod explosion;
pub mod outcome;
pub mod scan;
pub mod score;

// Re-exports for convenient access
pub use explosion::{execute_explosions, ExplosionResult};
pub use outcome::{check_after_move, MoveOutcome, PendingExplosion};
pub use scan::{end_state, find_all_five_sequences, Direction, EndState, FiveKind, FiveSequence, FIVE};
pub use score::{
    calculate_explosion_score, check_draw_with_explosion_score, check_explosion_win, DrawResult,
    ExplosionScores, WinResult, WinType, COMBO_BONUS, DEFAULT_EXPLOSION_WIN_THRESHOLD,
};
