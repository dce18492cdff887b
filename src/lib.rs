//! Locked-five explosion Caro rule engine
//!
//! A five-in-a-row variant where how a five is bounded decides what it does:
//! - Open five (at least one end empty or friendly): immediate win
//! - Locked five (both ends off-board or opponent): the stones explode
//! - One explosion scores 1 point, two or more in a single move score 3
//! - Reaching the explosion score threshold (default 5) wins
//! - A full board goes to the higher explosion score, level scores draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Runtime-sized board with per-player bitboards
//! - [`rules`]: Scan, resolve, execute and score, the per-move rule pipeline
//! - [`game`]: Headless session owning turns and cumulative scores
//! - [`config`]: Board size and score threshold, loadable from JSON
//! - [`ui`]: egui front end for hotseat play
//!
//! # Quick Start
//!
//! ```
//! use caro::{check_after_move, execute_explosions, Board, MoveOutcome, Player, Pos};
//!
//! let mut board: Board = "
//!     .........
//!     .........
//!     .........
//!     .........
//!     XXXXXO...
//!     .........
//!     .........
//!     .........
//!     .........
//! "
//! .parse()
//! .unwrap();
//!
//! // (4, 4) was the stone just played: edge on one side, O on the other
//! match check_after_move(&board, Pos::new(4, 4), Player::X).unwrap() {
//!     MoveOutcome::Explosion(pending) => {
//!         let result = execute_explosions(&mut board, pending).unwrap();
//!         assert_eq!(result.cleared_count(), 5);
//!         assert_eq!(result.score(), 1);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::RuleConfig;
pub use error::EngineError;
pub use game::{Game, GameStatus, MoveEvent, MoveReport};
pub use rules::{
    calculate_explosion_score, check_after_move, check_draw_with_explosion_score,
    check_explosion_win, execute_explosions, find_all_five_sequences, DrawResult,
    ExplosionResult, FiveKind, FiveSequence, MoveOutcome, WinResult, WinType,
};
