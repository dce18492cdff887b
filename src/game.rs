//! Headless game session
//!
//! Owns the board, turn order and cumulative explosion scores, and runs each
//! move through the rule pipeline. Per move, in order:
//! 1. Open five: the mover wins, nothing explodes
//! 2. Locked fives: clear them, add the move's points, check the score win
//! 3. Board full: decide by explosion score (or draw)
//! 4. Otherwise pass the turn

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, Player, Pos};
use crate::config::RuleConfig;
use crate::error::EngineError;
use crate::rules::{
    check_after_move, execute_explosions, DrawResult, ExplosionResult, ExplosionScores,
    FiveSequence, MoveOutcome, WinResult, WinType, FIVE,
};

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won {
        result: WinResult,
        /// Present for open-five wins
        winning_line: Option<[Pos; FIVE]>,
    },
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { result, .. } => Some(result.winner),
            _ => None,
        }
    }
}

/// What happened on the board for one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveEvent {
    Win(FiveSequence),
    Exploded(ExplosionResult),
    Quiet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub pos: Pos,
    pub player: Player,
    pub event: MoveEvent,
    /// Explosion points gained this move
    pub points: u32,
    pub status: GameStatus,
}

/// A two-player locked-five game
#[derive(Debug, Clone)]
pub struct Game {
    config: RuleConfig,
    board: Board,
    current_turn: Player,
    scores: ExplosionScores,
    status: GameStatus,
    history: Vec<(Pos, Player)>,
    last_explosion: Option<ExplosionResult>,
}

impl Game {
    pub fn new(config: RuleConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.board_size)?,
            current_turn: Player::X,
            scores: ExplosionScores::default(),
            status: GameStatus::InProgress,
            history: Vec::new(),
            last_explosion: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    #[inline]
    pub fn scores(&self) -> ExplosionScores {
        self.scores
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played, oldest first
    #[inline]
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Explosion caused by the most recent move, if any
    #[inline]
    pub fn last_explosion(&self) -> Option<&ExplosionResult> {
        self.last_explosion.as_ref()
    }

    /// Check if the current player may play at `pos`
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        !self.status.is_over() && self.board.contains(pos) && self.board.is_empty(pos)
    }

    /// Play the current player's stone at `pos`
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn play(&mut self, pos: Pos) -> Result<MoveReport, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        self.board.check_pos(pos)?;
        if !self.board.is_empty(pos) {
            return Err(EngineError::Occupied { pos });
        }

        let player = self.current_turn;
        self.board.place_stone(pos, player);

        // History only records moves that resolved
        let outcome = match check_after_move(&self.board, pos, player) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.board.remove_stone(pos);
                return Err(e);
            }
        };
        self.history.push((pos, player));
        self.last_explosion = None;

        let mut points = 0;
        let event = match outcome {
            MoveOutcome::Win(sequence) => {
                self.status = GameStatus::Won {
                    result: WinResult {
                        winner: player,
                        win_type: WinType::OpenFive,
                    },
                    winning_line: Some(*sequence.cells()),
                };
                MoveEvent::Win(sequence)
            }
            MoveOutcome::Explosion(pending) => {
                // Pending was computed on this board just above, so it is never stale
                let result = execute_explosions(&mut self.board, pending)?;
                points = result.score();
                self.scores.add(player, points);
                if let Some(win) = self.scores.check_win(self.config.explosion_win_threshold) {
                    self.status = GameStatus::Won {
                        result: win,
                        winning_line: None,
                    };
                }
                self.last_explosion = Some(result.clone());
                MoveEvent::Exploded(result)
            }
            MoveOutcome::NoEffect => MoveEvent::Quiet,
        };

        if !self.status.is_over() {
            match self.scores.check_draw(&self.board) {
                DrawResult::NoDecision => {}
                DrawResult::Draw => self.status = GameStatus::Draw,
                DrawResult::Tiebreak(result) => {
                    self.status = GameStatus::Won {
                        result,
                        winning_line: None,
                    }
                }
            }
        }

        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "game over");
        } else {
            self.current_turn = player.opponent();
        }

        debug!(%player, %pos, points, "move played");

        Ok(MoveReport {
            pos,
            player,
            event,
            points,
            status: self.status,
        })
    }

    /// Take back the last move by replaying the rest from an empty board
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo(&mut self) -> Result<(), EngineError> {
        if self.history.is_empty() {
            return Ok(());
        }

        let mut moves = std::mem::take(&mut self.history);
        moves.pop();
        self.reset()?;

        for (pos, player) in moves {
            // Replayed moves always follow the recorded turn order
            debug_assert_eq!(player, self.current_turn);
            self.play(pos)?;
        }
        Ok(())
    }

    /// Start over with the same config
    pub fn reset(&mut self) -> Result<(), EngineError> {
        *self = Game::new(self.config)?;
        Ok(())
    }
}
