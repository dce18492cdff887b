//! Game state management for the Caro GUI

use std::time::{Duration, Instant};

use crate::{EngineError, Game, MoveEvent, Pos, RuleConfig};

/// How long exploded cells keep flashing
pub const EXPLOSION_FLASH: Duration = Duration::from_millis(900);

/// Cells cleared by the last explosion, for the fade-out effect
pub struct ExplosionFlash {
    pub cells: Vec<Pos>,
    pub started: Instant,
}

impl ExplosionFlash {
    /// 1.0 when it starts, 0.0 when done
    pub fn intensity(&self) -> f32 {
        let t = self.started.elapsed().as_secs_f32() / EXPLOSION_FLASH.as_secs_f32();
        (1.0 - t).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.started.elapsed() >= EXPLOSION_FLASH
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// GUI-side state around a hotseat game
pub struct GameState {
    pub game: Game,
    pub move_timer: MoveTimer,
    pub explosion_flash: Option<ExplosionFlash>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: RuleConfig) -> Result<Self, EngineError> {
        Ok(Self {
            game: Game::new(config)?,
            move_timer: MoveTimer::default(),
            explosion_flash: None,
            message: None,
        })
    }

    pub fn reset(&mut self) {
        if let Err(e) = self.game.reset() {
            self.message = Some(e.to_string());
            return;
        }
        self.move_timer = MoveTimer::default();
        self.explosion_flash = None;
        self.message = None;
    }

    /// Start a fresh game on another board size, keeping the threshold
    pub fn new_game(&mut self, board_size: usize) {
        let config = RuleConfig {
            board_size,
            ..*self.game.config()
        };
        match GameState::new(config) {
            Ok(state) => *self = state,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Attempt to place the current player's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), EngineError> {
        let report = self.game.play(pos)?;
        self.move_timer.stop();

        if let MoveEvent::Exploded(result) = &report.event {
            self.explosion_flash = Some(ExplosionFlash {
                cells: result.cleared().to_vec(),
                started: Instant::now(),
            });
            self.message = Some(format!(
                "{} exploded {} five{} (+{})",
                report.player,
                result.sequence_count(),
                if result.sequence_count() == 1 { "" } else { "s" },
                report.points,
            ));
        } else {
            self.message = None;
        }

        if !report.status.is_over() {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Undo last move
    pub fn undo(&mut self) {
        match self.game.undo() {
            Ok(()) => {
                self.explosion_flash = None;
                self.message = None;
                self.move_timer.start();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Drop the flash once it has faded
    pub fn tick(&mut self) {
        if self.explosion_flash.as_ref().is_some_and(ExplosionFlash::is_complete) {
            self.explosion_flash = None;
        }
    }
}
