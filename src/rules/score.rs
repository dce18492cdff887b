//! Explosion scoring, score win and full-board tiebreak
//!
//! Cumulative scores belong to the caller. Everything here is a pure
//! function of the numbers passed in.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

/// Cumulative explosion score needed to win
pub const DEFAULT_EXPLOSION_WIN_THRESHOLD: u32 = 5;
/// Flat award for two or more locked fives in one move
pub const COMBO_BONUS: u32 = 3;

/// How a game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinType {
    /// Unobstructed five
    OpenFive,
    /// Cumulative explosion score reached the threshold
    ExplosionScore,
    /// Board filled up; higher explosion score takes it
    ExplosionTiebreaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    pub winner: Player,
    pub win_type: WinType,
}

/// Full-board resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawResult {
    /// Board still has empty cells
    NoDecision,
    /// Board full, scores level
    Draw,
    /// Board full, one player ahead on explosion score
    Tiebreak(WinResult),
}

/// Points for one move's explosions: 0 -> 0, 1 -> 1, 2+ -> 3.
/// The combo bonus is a step, not a multiplier.
#[inline]
pub fn calculate_explosion_score(explosion_count: usize) -> u32 {
    match explosion_count {
        0 => 0,
        1 => 1,
        _ => COMBO_BONUS,
    }
}

/// First player at or above `threshold` wins. X is checked before O, so X
/// takes it if both cross together.
pub fn check_explosion_win(score_x: u32, score_o: u32, threshold: u32) -> Option<WinResult> {
    let winner = if score_x >= threshold {
        Player::X
    } else if score_o >= threshold {
        Player::O
    } else {
        return None;
    };

    Some(WinResult {
        winner,
        win_type: WinType::ExplosionScore,
    })
}

/// Decide a full board by explosion score. Non-full boards are never decided here.
pub fn check_draw_with_explosion_score(board: &Board, score_x: u32, score_o: u32) -> DrawResult {
    if !board.is_full() {
        return DrawResult::NoDecision;
    }

    let winner = match score_x.cmp(&score_o) {
        std::cmp::Ordering::Greater => Player::X,
        std::cmp::Ordering::Less => Player::O,
        std::cmp::Ordering::Equal => return DrawResult::Draw,
    };

    DrawResult::Tiebreak(WinResult {
        winner,
        win_type: WinType::ExplosionTiebreaker,
    })
}

/// Caller-side running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExplosionScores {
    pub x: u32,
    pub o: u32,
}

impl ExplosionScores {
    #[inline]
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    #[inline]
    pub fn add(&mut self, player: Player, points: u32) {
        match player {
            Player::X => self.x = self.x.saturating_add(points),
            Player::O => self.o = self.o.saturating_add(points),
        }
    }

    pub fn check_win(&self, threshold: u32) -> Option<WinResult> {
        check_explosion_win(self.x, self.o, threshold)
    }

    pub fn check_draw(&self, board: &Board) -> DrawResult {
        check_draw_with_explosion_score(board, self.x, self.o)
    }
}
