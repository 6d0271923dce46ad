//! Grid state of a single snake game, advanced one cell per [`GameEngine::tick`].
//!
//! The engine owns no clock: whoever drives it calls `tick` at the current
//! [`GameEngine::tick_interval`] and forwards key presses to
//! [`GameEngine::set_direction`] and [`GameEngine::restart`].

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::basic::board::sample_free_spot;
use crate::basic::{Dir, GridDim, GridPoint};

pub use prefs::{Prefs, Score};
pub use snake::Snake;

pub mod prefs;
mod snake;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RunState {
    Running,
    GameOver,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Display)]
pub enum EndReason {
    #[display(fmt = "hit the wall")]
    Wall,
    #[display(fmt = "ran into itself")]
    SelfCollision,
    #[display(fmt = "filled the board")]
    BoardFilled,
}

/// What a call to [`GameEngine::tick`] did
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TickOutcome {
    /// The game is over, nothing changed
    Idle,
    Moved,
    Ate,
    Crashed(EndReason),
}

pub struct GameEngine<R: Rng = ThreadRng> {
    prefs: Prefs,

    snake: Snake,
    /// Applied at the start of the next tick
    pending_dir: Dir,
    /// `None` only after the snake has filled the board
    food: Option<GridPoint>,

    score: Score,
    tick_interval: Duration,

    state: RunState,
    end_reason: Option<EndReason>,

    rng: R,
}

impl GameEngine {
    pub fn new(prefs: Prefs) -> Self {
        Self::with_rng(prefs, thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(prefs: Prefs, rng: R) -> Self {
        let snake = Self::starting_snake(&prefs);
        let mut engine = Self {
            pending_dir: snake.dir,
            snake,
            food: None,
            score: 0,
            tick_interval: prefs.initial_interval,
            state: RunState::Running,
            end_reason: None,
            prefs,
            rng,
        };
        engine.initialize();
        engine
    }

    fn starting_snake(prefs: &Prefs) -> Snake {
        Snake::new(prefs.board_dim.center(), Dir::R, prefs.initial_len)
    }

    /// Fresh snake in the middle of the board heading right, fresh food,
    /// score and speed back to their starting values
    pub fn initialize(&mut self) {
        self.snake = Self::starting_snake(&self.prefs);
        self.pending_dir = self.snake.dir;
        self.score = 0;
        self.tick_interval = self.prefs.initial_interval;
        self.end_reason = None;
        self.state = RunState::Running;
        self.spawn_food();

        info!(
            head = ?self.snake.head(),
            food = ?self.food,
            interval_ms = self.tick_interval.as_millis() as u64,
            "new game"
        );
    }

    /// Leave the game over screen, returns whether a new game was started
    pub fn restart(&mut self) -> bool {
        match self.state {
            RunState::GameOver => {
                self.initialize();
                true
            }
            RunState::Running => false,
        }
    }

    /// Queue a turn for the next tick, reversing into the neck is ignored
    pub fn set_direction(&mut self, dir: Dir) {
        if self.state == RunState::GameOver {
            return;
        }
        if self.snake.dir.is_opposite(dir) {
            trace!(current = %self.snake.dir, requested = %dir, "ignored reversal");
            return;
        }
        self.pending_dir = dir;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state == RunState::GameOver {
            return TickOutcome::Idle;
        }

        self.snake.dir = self.pending_dir;
        let new_head = self.snake.next_head();

        if !self.prefs.board_dim.contains(new_head) {
            return self.game_over(EndReason::Wall);
        }
        if self.snake.contains(new_head) {
            return self.game_over(EndReason::SelfCollision);
        }

        let ate = self.food == Some(new_head);
        self.snake.advance(ate);
        if !ate {
            return TickOutcome::Moved;
        }

        self.score += self.prefs.food_score;
        self.tick_interval = self.prefs.next_interval(self.tick_interval);
        debug!(
            score = self.score,
            len = self.snake.len(),
            interval_ms = self.tick_interval.as_millis() as u64,
            "ate food"
        );

        self.spawn_food();
        if self.food.is_none() {
            warn!(len = self.snake.len(), "no free cell left for food");
            self.game_over(EndReason::BoardFilled);
        }
        TickOutcome::Ate
    }

    fn game_over(&mut self, reason: EndReason) -> TickOutcome {
        self.state = RunState::GameOver;
        self.end_reason = Some(reason);
        info!(score = self.score, len = self.snake.len(), "game over, snake {reason}");
        TickOutcome::Crashed(reason)
    }

    fn spawn_food(&mut self) {
        let occupied: Vec<_> = self.snake.iter().collect();
        self.food = sample_free_spot(
            &occupied,
            self.prefs.board_dim,
            self.prefs.food_spawn_attempts,
            &mut self.rng,
        );
    }
}

// accessors for the renderer and the shell
impl<R: Rng> GameEngine<R> {
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<GridPoint> {
        self.food
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Direction of the last committed step
    #[cfg(test)]
    pub fn direction(&self) -> Dir {
        self.snake.dir
    }

    pub fn board_dim(&self) -> GridDim {
        self.prefs.board_dim
    }
}
